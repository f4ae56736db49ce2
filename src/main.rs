//! Jumper - CLI
//!
//! Guess the word before all parachute lines are cut. Line-based by default,
//! with an optional full-screen TUI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jumper::{
    commands::run_play,
    engine::Director,
    interactive::{App, run_tui},
    output::print_farewell,
    wordlists::WordSource,
};
use log::info;
use std::io;

#[derive(Parser)]
#[command(
    name = "jumper",
    about = "Guess the word before all parachute lines are cut",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based game on stdin/stdout (default)
    Play,

    /// Full-screen terminal UI
    Tui,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init()
        .unwrap_or(());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match cli.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            WordSource::seeded(seed)
        }
        None => WordSource::new(),
    };
    let mut director = Director::new(source);

    // Default to line mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            run_play(&mut director, stdin.lock(), io::stdout().lock())?;
        }
        Commands::Tui => {
            let app = run_tui(App::new(director))?;
            print_farewell(&mut io::stdout().lock(), app.director.stats())?;
        }
    }

    Ok(())
}
