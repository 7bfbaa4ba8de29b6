//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use tictactoe_core::SearchLimits;

/// Result of a single game, from engine1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other engine's side
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament run configuration, loadable from TOML
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    /// Recursion depth cap handed to the engines (absent = exhaustive)
    pub max_depth: Option<u8>,
    /// Root sample size handed to the engines (absent = all moves)
    pub root_samples: Option<usize>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            max_depth: None,
            root_samples: None,
        }
    }
}

impl TournamentConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_depth: self.max_depth,
            root_samples: self.root_samples,
        }
    }

    /// Parse a TOML configuration document
    pub fn from_toml_str(doc: &str) -> Result<Self, String> {
        toml::from_str(doc).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        Self::from_toml_str(&contents)
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text win-rate report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth cap {:?}, root samples {:?}\n\n",
            self.config.games_per_match, self.config.max_depth, self.config.root_samples
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<12} vs {:<12} {:>4}-{:<4}-{:<4} {:>8}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<12} vs {:<12} {:>4}-{:<4}-{:<4} {:>7.1}%\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_draws_as_half() {
        let result = MatchResult {
            wins: 3,
            losses: 1,
            draws: 4,
        };
        assert_eq!(result.total_games(), 8);
        assert!((result.score() - 0.625).abs() < 1e-9);
    }

    #[test]
    fn empty_match_scores_even() {
        assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn results_round_trip_through_json() {
        let mut results = TournamentResults::new(
            "smoke",
            vec!["minimax".into(), "random".into()],
            TournamentConfig::default(),
        );
        results.add_match(
            "minimax",
            "random",
            MatchResult {
                wins: 9,
                losses: 0,
                draws: 1,
            },
        );

        let json = serde_json::to_string(&results).unwrap();
        let parsed: TournamentResults = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "smoke");
        assert_eq!(parsed.matches.len(), 1);
        assert_eq!(parsed.matches[0].result, results.matches[0].result);
    }

    #[test]
    fn config_parses_from_toml() {
        let config = TournamentConfig::from_toml_str(
            "games_per_match = 25\nmax_depth = 1\nroot_samples = 2\n",
        )
        .unwrap();
        assert_eq!(config.games_per_match, 25);
        assert_eq!(config.limits().max_depth, Some(1));
        assert_eq!(config.limits().root_samples, Some(2));
    }

    #[test]
    fn config_defaults_to_exhaustive() {
        let config = TournamentConfig::from_toml_str("games_per_match = 5\n").unwrap();
        assert_eq!(config.limits(), SearchLimits::exhaustive());
    }

    #[test]
    fn report_lists_every_match() {
        let mut results = TournamentResults::new(
            "report",
            vec!["minimax".into(), "random".into()],
            TournamentConfig::default(),
        );
        results.add_match(
            "minimax",
            "random",
            MatchResult {
                wins: 8,
                losses: 0,
                draws: 2,
            },
        );

        let report = results.generate_report();
        assert!(report.contains("minimax"));
        assert!(report.contains("random"));
        assert!(report.contains("90.0%"));
    }
}
