//! Output formatting utilities for CLI.

// Averages over game counts
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use touchdown::{GameOverReason, SimResult};

/// Running totals over many headless games.
///
/// Built per worker with `fold` and combined with `merge`.
#[derive(Debug, Clone, Default)]
pub(super) struct SimStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Games ended by the clock.
    time_up: u64,
    /// Games ended by running out of downs.
    out_of_attempts: u64,
    /// Games cut off by the virtual time cap.
    unfinished: u64,
    total_score: u64,
    score_sq_sum: f64,
    best_score: u32,
    total_touchdowns: u64,
    total_knockdowns: u64,
    total_downs: u64,
    total_moves: u64,
}

impl SimStats {
    /// Add a game result to the stats.
    pub(super) fn add_result(&mut self, result: &SimResult) {
        self.games_played += 1;
        match result.reason {
            Some(GameOverReason::TimeUp) => self.time_up += 1,
            Some(GameOverReason::OutOfAttempts) => self.out_of_attempts += 1,
            None => self.unfinished += 1,
        }
        self.total_score += u64::from(result.score);
        self.score_sq_sum += f64::from(result.score) * f64::from(result.score);
        self.best_score = self.best_score.max(result.score);
        self.total_touchdowns += u64::from(result.touchdowns);
        self.total_knockdowns += u64::from(result.knockdowns);
        self.total_downs += u64::from(result.downs);
        self.total_moves += u64::from(result.moves);
    }

    /// Fold another worker's totals into these.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.time_up += other.time_up;
        self.out_of_attempts += other.out_of_attempts;
        self.unfinished += other.unfinished;
        self.total_score += other.total_score;
        self.score_sq_sum += other.score_sq_sum;
        self.best_score = self.best_score.max(other.best_score);
        self.total_touchdowns += other.total_touchdowns;
        self.total_knockdowns += other.total_knockdowns;
        self.total_downs += other.total_downs;
        self.total_moves += other.total_moves;
    }

    fn mean(&self, total: u64) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        total as f64 / self.games_played as f64
    }

    /// Average final score.
    pub(super) fn avg_score(&self) -> f64 {
        self.mean(self.total_score)
    }

    /// Score standard deviation.
    pub(super) fn score_std_dev(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let mean = self.avg_score();
        let variance = self.score_sq_sum / self.games_played as f64 - mean * mean;
        variance.max(0.0).sqrt()
    }
}

/// JSON-serializable simulation summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimSummary {
    games_played: u64,
    base_seed: u64,
    time_up: u64,
    out_of_attempts: u64,
    unfinished: u64,
    avg_score: f64,
    score_std_dev: f64,
    best_score: u32,
    avg_touchdowns: f64,
    avg_knockdowns: f64,
    avg_downs: f64,
    avg_moves: f64,
}

impl JsonSimSummary {
    /// Create from stats.
    pub(super) fn from_stats(stats: &SimStats, base_seed: u64) -> Self {
        Self {
            games_played: stats.games_played,
            base_seed,
            time_up: stats.time_up,
            out_of_attempts: stats.out_of_attempts,
            unfinished: stats.unfinished,
            avg_score: stats.avg_score(),
            score_std_dev: stats.score_std_dev(),
            best_score: stats.best_score,
            avg_touchdowns: stats.mean(stats.total_touchdowns),
            avg_knockdowns: stats.mean(stats.total_knockdowns),
            avg_downs: stats.mean(stats.total_downs),
            avg_moves: stats.mean(stats.total_moves),
        }
    }
}

/// Format simulation stats as human-readable text.
pub(super) fn format_sim_text(stats: &SimStats, base_seed: u64) -> String {
    let games = stats.games_played.max(1) as f64;
    let pct = |n: u64| n as f64 / games * 100.0;

    let mut output = String::new();
    output.push_str(&format!(
        "Simulation Results ({} games, seeds {base_seed}..)\n",
        stats.games_played
    ));
    output.push_str("========================================\n\n");

    output.push_str("Endings:\n");
    output.push_str(&format!("  Time's up:       {:.1}%\n", pct(stats.time_up)));
    output.push_str(&format!("  Out of attempts: {:.1}%\n", pct(stats.out_of_attempts)));
    if stats.unfinished > 0 {
        output.push_str(&format!("  Unfinished:      {}\n", stats.unfinished));
    }

    output.push_str(&format!(
        "\nScore: {:.1} (+/- {:.1}), best {}\n",
        stats.avg_score(),
        stats.score_std_dev(),
        stats.best_score
    ));
    output.push_str(&format!(
        "Per game: {:.2} touchdowns, {:.1} knockdowns, {:.1} downs, {:.0} moves\n",
        stats.mean(stats.total_touchdowns),
        stats.mean(stats.total_knockdowns),
        stats.mean(stats.total_downs),
        stats.mean(stats.total_moves)
    ));

    output
}
