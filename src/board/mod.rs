//! Paint board domain
//!
//! This module holds the shared board state and the request routing over
//! it.

pub mod routes;
pub mod state;

pub use routes::Router;
pub use state::{BoardState, PaintBoard};
