//! Tournament CLI
//!
//! Run matches between engines and report win rates.

use std::env;
use std::path::Path;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tictactoe_core::Engine;
use tournament::{MatchConfig, MatchRunner, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

const RESULTS_PATH: &str = "tournament_results.json";

fn print_usage() {
    println!("Tic-Tac-Toe Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--samples S] [--config FILE]");
    println!("  tournament selfplay [--games N]");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta search, perfect play");
    println!("  random        - Uniform random moves");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 100");
    println!("  tournament match minimax minimax --depth 1 --samples 2");
    println!("  tournament selfplay --games 10");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" => Box::new(MinimaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

/// Parse `--games/--depth/--samples/--config` flags over a config-file base.
fn parse_config(args: &[String]) -> TournamentConfig {
    let mut config = TournamentConfig::default();

    // A config file supplies the baseline; explicit flags override it
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            match TournamentConfig::load(Path::new(&args[i + 1])) {
                Ok(loaded) => config = loaded,
                Err(e) => eprintln!("Warning: {}", e),
            }
        }
        i += 1;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games_per_match = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.max_depth = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--samples" | "-s" => {
                if i + 1 < args.len() {
                    config.root_samples = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let config = parse_config(&args[2..]);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, depth cap: {:?}, root samples: {:?}",
        config.games_per_match, config.max_depth, config.root_samples
    );
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        limits: config.limits(),
        ..Default::default()
    });

    let result = match runner.run_match(engine1.as_mut(), engine2.as_mut()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: match aborted: {}", e);
            return;
        }
    };

    let mut results = TournamentResults::new(
        &format!("{} vs {}", engine1_spec, engine2_spec),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Err(e) = results.save(Path::new(RESULTS_PATH)) {
        eprintln!("Warning: Failed to save results: {}", e);
    }
}

fn run_selfplay(args: &[String]) {
    let config = parse_config(args);

    println!("=== Self-play: minimax vs minimax ===");
    println!("Games: {}", config.games_per_match);
    println!();

    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = MinimaxEngine::new();

    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        limits: config.limits(),
        ..Default::default()
    });

    match runner.run_match(&mut engine1, &mut engine2) {
        Ok(result) => {
            println!(
                "Result: {}-{}-{} over {} games",
                result.wins,
                result.losses,
                result.draws,
                result.total_games()
            );
            if result.draws == result.total_games() {
                println!("All games drawn, as perfect play demands.");
            }
        }
        Err(e) => eprintln!("Error: self-play aborted: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "selfplay" => run_selfplay(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
        }
    }
}
