pub mod board;
pub mod error;
pub mod limits;
pub mod movegen;
pub mod perft;
pub mod tree;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::Error;
pub use limits::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all move-selection strategies
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The best move found
    pub best_move: Cell,
    /// Score from the engine's perspective; magnitude encodes win/loss
    /// speed (faster wins score higher)
    pub score: i32,
    /// Number of recursive evaluator entries (for stats and probes)
    pub nodes: u64,
}

/// Trait that all move-selection strategies implement.
///
/// This allows swapping between exhaustive search, depth-capped search,
/// random play, and learned strategies behind one seam.
pub trait Engine: Send {
    /// Select a move on the given board for the side to move.
    ///
    /// Callers must check for terminal state first: a board with no empty
    /// cells fails with `Error::NoMovesAvailable`.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, Error>;

    /// Returns the engine's name for reports and leaderboards
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
