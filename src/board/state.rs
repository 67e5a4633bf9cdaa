//! Paint board state
//!
//! This module owns the single process-wide board instance and shares it
//! through a cloneable handle, so no component reaches for a global.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The paint board: a 2-dimensional grid of small color integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintBoard {
    /// Grid rows; each cell holds a color value
    pub colors: Vec<Vec<u8>>,
}

impl Default for PaintBoard {
    /// The fixed 2x2 grid every process starts from.
    fn default() -> Self {
        Self {
            colors: vec![vec![1, 1], vec![0, 1]],
        }
    }
}

/// Cloneable handle to the shared board.
///
/// Reads go through the lock, so a mutation path added later is already
/// synchronized with them.
#[derive(Debug, Clone)]
pub struct BoardState {
    board: Arc<RwLock<PaintBoard>>,
}

impl BoardState {
    /// Creates the handle holding the initial board.
    pub fn new() -> Self {
        Self {
            board: Arc::new(RwLock::new(PaintBoard::default())),
        }
    }

    /// Returns a copy of the current board.
    pub async fn snapshot(&self) -> PaintBoard {
        self.board.read().await.clone()
    }
}
