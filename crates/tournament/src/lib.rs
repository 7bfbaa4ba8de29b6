//! Tournament runner for Tic-Tac-Toe engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking win rates between strategies
//! - Persisting results for benchmark comparisons
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines
//! cargo run -p tournament -- match minimax random --games 100
//!
//! # Verify that perfect self-play always draws
//! cargo run -p tournament -- selfplay --games 10
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
