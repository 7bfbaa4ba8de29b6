//! Match runner for playing games between engines

use tictactoe_core::{Board, Engine, Error, Outcome, Player, SearchLimits};
use tracing::{debug, info};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search limits handed to both engines
    pub limits: SearchLimits,
    /// Whether engine1 alternates between X and O each game
    pub alternate_marks: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            limits: SearchLimits::exhaustive(),
            alternate_marks: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, Error> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate marks if configured
            let engine1_is_x = !self.config.alternate_marks || game_num % 2 == 0;

            let game_result = if engine1_is_x {
                self.play_game(engine1, engine2)?
            } else {
                // Flip result since engine1 plays O
                self.play_game(engine2, engine1)?.flipped()
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            debug!(
                game = game_num + 1,
                of = self.config.num_games,
                outcome = ?game_result,
                engine1_is_x,
                "game finished"
            );
        }

        info!(
            engine1 = engine1.name(),
            engine2 = engine2.name(),
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );

        Ok(result)
    }

    /// Play a single game, returns the result from X's perspective.
    ///
    /// X always opens; the runner checks for a terminal board before every
    /// engine invocation, per the engine precondition.
    fn play_game(
        &self,
        x_engine: &mut dyn Engine,
        o_engine: &mut dyn Engine,
    ) -> Result<GameResult, Error> {
        let mut board = Board::new(Player::X);
        x_engine.new_game();
        o_engine.new_game();

        loop {
            match board.winner() {
                Outcome::Win(Player::X) => return Ok(GameResult::Win),
                Outcome::Win(Player::O) => return Ok(GameResult::Loss),
                Outcome::Draw => return Ok(GameResult::Draw),
                Outcome::Ongoing => {}
            }

            let searched = if board.to_move == Player::X {
                x_engine.search(&board, self.config.limits)?
            } else {
                o_engine.search(&board, self.config.limits)?
            };

            // Rejects an engine that returns an occupied cell
            board.apply(searched.best_move)?;
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    limits: SearchLimits,
) -> Result<MatchResult, Error> {
    let config = MatchConfig {
        num_games,
        limits,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MinimaxEngine;
    use random_engine::RandomEngine;

    #[test]
    fn perfect_self_play_always_draws() {
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = MinimaxEngine::new();

        let config = MatchConfig {
            num_games: 4,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2).unwrap();

        assert_eq!(result.total_games(), 4);
        assert_eq!(result.draws, 4);
    }

    #[test]
    fn minimax_never_loses_to_random() {
        let mut minimax = MinimaxEngine::new();
        let mut random = RandomEngine::new();

        let result = quick_match(&mut minimax, &mut random, 10, SearchLimits::exhaustive())
            .unwrap();

        assert_eq!(result.total_games(), 10);
        assert_eq!(result.losses, 0);
    }

    #[test]
    fn handicapped_match_completes() {
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = RandomEngine::new();

        let config = MatchConfig {
            num_games: 6,
            limits: SearchLimits::handicap(),
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2).unwrap();

        assert_eq!(result.total_games(), 6);
    }
}
