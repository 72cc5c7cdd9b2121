//! Tournament CLI
//!
//! Play engines against each other and report the score.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use heuristic_engine::HeuristicEngine;
use quarto_core::Engine;
use random_engine::RandomEngine;
use search_engine::SearchEngine;
use tiered_engine::{EngineConfig, TieredEngine};
use tournament::{MatchRunner, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Quarto Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--seed S] [--config PATH] [--out PATH]");
    println!();
    println!("Engines:");
    println!("  random        - Uniformly random legal moves");
    println!("  heuristic     - Shared-attribute heuristics with a one-ply safety check");
    println!("  search        - Negamax with an exact endgame solver");
    println!("  tiered        - Heuristics early, search once few pieces remain");
    println!();
    println!("Examples:");
    println!("  tournament match tiered random --games 20 --seed 7");
    println!("  tournament match search heuristic --config tournament.toml --out results.json");
}

/// Builds an engine by name. `index` offsets the seed so two seeded copies differ.
fn create_engine(
    name: &str,
    seed: Option<u64>,
    index: u64,
    engine_config: &EngineConfig,
) -> Option<Box<dyn Engine>> {
    let seed = seed.map(|s| s.wrapping_add(index));
    let engine: Box<dyn Engine> = match name.to_lowercase().as_str() {
        "random" => Box::new(match seed {
            Some(s) => RandomEngine::seeded(s),
            None => RandomEngine::new(),
        }),
        "heuristic" => Box::new(match seed {
            Some(s) => HeuristicEngine::seeded(s),
            None => HeuristicEngine::new(),
        }),
        "search" => Box::new(SearchEngine::with_config(engine_config.search.clone())),
        "tiered" => Box::new(TieredEngine::new(EngineConfig {
            seed: seed.or(engine_config.seed),
            ..engine_config.clone()
        })),
        _ => return None,
    };
    Some(engine)
}

fn run_match(args: &[String]) -> ExitCode {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine names");
        print_usage();
        return ExitCode::FAILURE;
    }

    let engine1_name = &args[0];
    let engine2_name = &args[1];

    let mut num_games: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--games" | "-g", Some(v)) => match v.parse() {
                Ok(n) => num_games = Some(n),
                Err(_) => {
                    eprintln!("Error: --games expects a number, got {v}");
                    return ExitCode::FAILURE;
                }
            },
            ("--seed" | "-s", Some(v)) => match v.parse() {
                Ok(s) => seed = Some(s),
                Err(_) => {
                    eprintln!("Error: --seed expects a number, got {v}");
                    return ExitCode::FAILURE;
                }
            },
            ("--config" | "-c", Some(v)) => config_path = Some(PathBuf::from(v)),
            ("--out" | "-o", Some(v)) => out_path = Some(PathBuf::from(v)),
            (flag, _) => {
                eprintln!("Error: unexpected argument {flag}");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
        i += 2;
    }

    let mut config = match config_path {
        Some(path) => match TournamentConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => TournamentConfig::default(),
    };
    if let Some(n) = num_games {
        config.match_config.num_games = n;
    }
    if seed.is_some() {
        config.match_config.seed = seed;
    }

    let seed = config.match_config.seed;
    let (Some(mut engine1), Some(mut engine2)) = (
        create_engine(engine1_name, seed, 0, &config.engine),
        create_engine(engine2_name, seed, 1, &config.engine),
    ) else {
        eprintln!("Error: unknown engine in {engine1_name} vs {engine2_name}");
        print_usage();
        return ExitCode::FAILURE;
    };

    println!("=== Match: {} vs {} ===", engine1_name, engine2_name);
    println!("Games: {}", config.match_config.num_games);
    println!();

    let runner = MatchRunner::new(config.match_config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws ({} forfeits)",
        engine1_name, result.wins, result.losses, result.draws, result.forfeits
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = out_path {
        let mut results = TournamentResults::new(
            &format!("{engine1_name} vs {engine2_name}"),
            vec![engine1_name.clone(), engine2_name.clone()],
            config.match_config,
        );
        results.add_match(engine1_name, engine2_name, result);
        println!();
        results.print_report();
        match results.save(&path) {
            Ok(()) => println!("Results saved to {}", path.display()),
            Err(e) => eprintln!("Warning: {e}"),
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
