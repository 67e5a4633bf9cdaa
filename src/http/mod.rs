//! HTTP protocol implementation.
//!
//! This module implements the hand-rolled HTTP/1.1 surface of the server: a
//! bounded single-read connection pipeline over a line-splitting parser.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: the per-connection pipeline (read once, parse, dispatch, write, close)
//! - **`parser`**: parses one request out of the decoded request text
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Request lifecycle
//!
//! Each connection carries exactly one request and is then closed:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read, at most 1024 bytes, under timeout
//!        └──────┬──────┘
//!               │ Decoded as UTF-8 (failure is connection-fatal)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Parse, then route to a handler
//!        └──────┬───────────┘     (parse failure → 400, no route → 404)
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (no keep-alive)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use paintboard::board::{BoardState, Router};
//! use paintboard::http::connection::Connection;
//! use std::time::Duration;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:5012").await?;
//!     let router = Router::new(BoardState::new());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = router.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router, Duration::from_secs(30));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
