// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pieceq::config::GameConfig;
use pieceq::game::{ActionOutcome, PieceFactory, Session};
use pieceq::ui::Console;

fn print_usage() {
    println!("PIECEQ - Upcoming-piece queue for a falling-block puzzle");
    println!();
    println!("Usage: pieceq [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>    Load game settings from a YAML file");
    println!("  --capacity <N>     Queue capacity (default 5)");
    println!("  --seed <N>         Seed the piece generator for a reproducible run");
    println!("  --help             Show this help message");
}

fn resolve_config(
    config_path: Option<&str>,
    capacity: Option<usize>,
    seed: Option<u64>,
) -> Result<GameConfig> {
    let mut config = match config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    // CLI flags win over the config file
    if let Some(capacity) = capacity {
        config.queue_capacity = capacity;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}

fn run_game(config: &GameConfig) -> Result<()> {
    let factory = match config.seed {
        Some(seed) => PieceFactory::with_seed(seed),
        None => PieceFactory::new(),
    };
    let mut session = Session::new(config.queue_capacity, factory);
    let mut console = Console::stdio();

    // Opening screen: generate the initial queue
    console.clear_screen()?;
    console.banner()?;
    console.show_welcome()?;
    let created = session.fill_initial();
    console.show_initial_fill(&created)?;
    console.pause()?;

    while session.is_running() {
        console.clear_screen()?;
        console.banner()?;
        console.show_queue(session.queue())?;
        console.show_menu()?;

        let choice = console.read_choice()?;
        match session.apply(choice) {
            ActionOutcome::Played(piece) => {
                console.clear_screen()?;
                console.banner()?;
                console.show_played(&piece)?;
                console.show_queue(session.queue())?;
                console.pause()?;
            }
            ActionOutcome::Inserted(piece) => {
                console.clear_screen()?;
                console.banner()?;
                console.show_inserted(&piece)?;
                console.show_queue(session.queue())?;
                console.pause()?;
            }
            ActionOutcome::Rejected(err) => {
                console.clear_screen()?;
                console.banner()?;
                console.show_rejected(err)?;
                console.show_queue(session.queue())?;
                console.pause()?;
            }
            ActionOutcome::Ended(stats) => {
                console.clear_screen()?;
                console.banner()?;
                console.show_goodbye(&stats)?;
            }
            ActionOutcome::InvalidChoice => {
                console.show_invalid_choice()?;
                console.pause()?;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Keep the interactive screen clean unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<String> = None;
    let mut capacity: Option<usize> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --config requires a file path");
                        std::process::exit(1);
                    }
                }
            }
            "--capacity" => {
                i += 1;
                let raw = match args.get(i) {
                    Some(raw) => raw,
                    None => {
                        eprintln!("Error: --capacity requires a number");
                        std::process::exit(1);
                    }
                };
                let parsed: usize = raw.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid capacity: {}", raw)
                })?;
                capacity = Some(parsed);
            }
            "--seed" => {
                i += 1;
                let raw = match args.get(i) {
                    Some(raw) => raw,
                    None => {
                        eprintln!("Error: --seed requires a number");
                        std::process::exit(1);
                    }
                };
                let parsed: u64 = raw.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid seed: {}", raw)
                })?;
                seed = Some(parsed);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = resolve_config(config_path.as_deref(), capacity, seed)?;
    run_game(&config)
}
