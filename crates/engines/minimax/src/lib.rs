//! Minimax Tic-Tac-Toe Engine
//!
//! Exhaustive game-tree search with alpha-beta pruning and depth-sensitive
//! terminal scoring: faster wins are strictly preferred over slower wins,
//! and slower losses over faster losses. Plays perfectly when unlimited;
//! depth caps and root sampling provide an explicit reduced difficulty.

mod search;

use tictactoe_core::{Board, Cell, Engine, Error, SearchLimits, SearchResult};

/// A Tic-Tac-Toe engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Depth-aware terminal scoring anchored to its own side
/// - Alpha-beta pruning (identical results to the unpruned search)
/// - Optional depth cap and root sampling for reduced difficulty
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, Error> {
        self.nodes = 0;

        let (best_move, score) = search::pick_best_move(board, &limits, &mut self.nodes)?;

        Ok(SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use without the engine wrapper
pub use search::pick_best_move;

/// Exhaustive best move for the side to move.
pub fn best_move(board: &Board) -> Result<Cell, Error> {
    let mut nodes = 0;
    pick_best_move(board, &SearchLimits::exhaustive(), &mut nodes).map(|(cell, _)| cell)
}
