//! paintboard - a minimal single-endpoint HTTP server
//!
//! Serves an in-memory paint board over a hand-rolled HTTP/1.1 pipeline.

pub mod board;
pub mod config;
pub mod http;
pub mod server;
