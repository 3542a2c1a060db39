//! Simulate command implementation.

use super::output::{format_sim_text, JsonSimSummary, SimStats};
use super::{CliError, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use touchdown::{simulate, ConfigError, GameConfig, SimParams};

/// Options for the simulate command.
#[derive(Debug)]
pub(crate) struct Options {
    /// Number of games.
    pub(crate) games: u64,
    /// Base seed; game `i` uses `seed + i`.
    pub(crate) seed: Option<u64>,
    /// Worker threads.
    pub(crate) threads: Option<usize>,
    /// Config file.
    pub(crate) config: Option<PathBuf>,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Show a progress bar.
    pub(crate) progress: bool,
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the config is invalid or output fails.
pub(crate) fn execute(opts: &Options) -> Result<(), CliError> {
    let config = super::load_config(opts.config.as_deref())?;
    config.validate()?;
    let params = SimParams::default();

    // Set thread pool size if specified
    if let Some(num_threads) = opts.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = super::seed_or_random(opts.seed);

    let pb = if opts.progress {
        let pb = ProgressBar::new(opts.games);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})",
            )
            .map_err(|e| CliError::new(format!("Bad progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    let stats = run_games(config, base_seed, opts.games, &params, pb.as_ref())?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    match opts.format {
        OutputFormat::Text => {
            println!();
            print!("{}", format_sim_text(&stats, base_seed));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let summary = JsonSimSummary::from_stats(&stats, base_seed);
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Play `games` seeds starting at `base_seed` in parallel and total them.
///
/// # Errors
///
/// The first game that fails to start aborts the run with its error.
fn run_games(
    config: GameConfig,
    base_seed: u64,
    games: u64,
    params: &SimParams,
    pb: Option<&ProgressBar>,
) -> Result<SimStats, ConfigError> {
    // Each worker folds into its own stats; the partial totals are merged at the end
    (0..games)
        .into_par_iter()
        .map(|i| {
            let result = simulate(config, base_seed.wrapping_add(i), params);
            if let Some(pb) = pb {
                pb.inc(1);
            }
            result
        })
        .try_fold(SimStats::default, |mut local, result| {
            local.add_result(&result?);
            Ok::<_, ConfigError>(local)
        })
        .try_reduce(SimStats::default, |mut a, b| {
            a.merge(&b);
            Ok(a)
        })
}
