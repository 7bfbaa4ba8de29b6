//! Random Move Tic-Tac-Toe Engine
//!
//! A simple engine that selects moves uniformly at random from all empty
//! cells. Useful for:
//! - Baseline comparisons (any real engine should at least never lose to this)
//! - Filler play for seeded or degenerate openings
//! - Stress testing move generation

use rand::seq::SliceRandom;
use rand::thread_rng;
use tictactoe_core::{empty_cells, Board, Cell, Engine, Error, SearchLimits, SearchResult};


/// Uniform random move for the side to move.
///
/// Fails with `NoMovesAvailable` on a board without empty cells.
pub fn random_move(board: &Board) -> Result<Cell, Error> {
    empty_cells(board)
        .choose(&mut thread_rng())
        .copied()
        .ok_or(Error::NoMovesAvailable)
}

/// A Tic-Tac-Toe engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all empty cells. It's the simplest possible engine and serves
/// as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> Result<SearchResult, Error> {
        let best_move = random_move(board)?;

        Ok(SearchResult {
            best_move,
            score: 0,
            nodes: 0,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
