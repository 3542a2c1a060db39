//! Touchdown CLI - play in the terminal or run headless games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Touchdown - a turn-paced arcade football game
#[derive(Parser, Debug)]
#[command(name = "touchdown")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write tracing output to this file (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play in the terminal
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file (default: built-in settings)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run headless autopilot games in parallel and aggregate statistics
    Simulate {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// JSON config file (default: built-in settings)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Print the default config, or validate a config file
    Config {
        /// Config file to validate
        #[arg(long)]
        check: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = cli::init_logging(args.log.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        Commands::Play { seed, config } => cli::play::execute(seed, config.as_deref()),

        Commands::Simulate {
            games,
            seed,
            threads,
            config,
            format,
            progress,
        } => cli::simulate::execute(&cli::simulate::Options {
            games,
            seed,
            threads,
            config,
            format,
            progress,
        }),

        Commands::Config { check } => cli::config::execute(check.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
