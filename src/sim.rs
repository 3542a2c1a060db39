//! Headless games driven by a scripted runner.
//!
//! [`simulate`] plays a complete game without a terminal: the virtual clock
//! is advanced in fixed steps and an [`Autopilot`] picks one move per step.
//! Used by the `simulate` command, the benchmarks and the property tests.

use serde::Serialize;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::{resolve_move, Direction, Field, Mobile, MoveOutcome, Roster};
use crate::session::{GameOverReason, Input, Phase, Session};

/// Greedy runner policy.
///
/// Every candidate move is tried on a scratch copy of the roster. Moves
/// that would be discarded or end in a tackle are never chosen; among the
/// rest the policy prefers progress toward the goal, then knockdowns, and
/// avoids tiles next to standing defenders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Reward for a step toward the goal line.
    pub progress_weight: f64,
    /// Reward for flattening a defender.
    pub knockdown_weight: f64,
    /// Penalty per standing defender next to the landing tile.
    pub danger_weight: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            progress_weight: 3.0,
            knockdown_weight: 1.0,
            danger_weight: 2.0,
        }
    }
}

impl Autopilot {
    /// Pick a move, or `None` when every move is refused or fatal.
    ///
    /// Ties keep the first direction in [`Direction::ALL`] order.
    #[must_use]
    pub fn choose(&self, roster: &Roster, field: &Field) -> Option<Direction> {
        let mut best: Option<(f64, Direction)> = None;
        for dir in Direction::ALL {
            let Some(value) = self.evaluate(roster, field, dir) else {
                continue;
            };
            if best.is_none_or(|(v, _)| value > v) {
                best = Some((value, dir));
            }
        }
        best.map(|(_, dir)| dir)
    }

    fn evaluate(&self, roster: &Roster, field: &Field, dir: Direction) -> Option<f64> {
        let mut probe = roster.clone();
        let outcome = resolve_move(&mut probe, field, dir);
        match outcome {
            MoveOutcome::Discarded | MoveOutcome::Tackled { .. } => return None,
            MoveOutcome::Touchdown { .. } => return Some(f64::INFINITY),
            MoveOutcome::Stepped | MoveOutcome::KnockedDown { .. } => {}
        }

        let landing = probe.player.pos;
        let progress = f64::from(roster.player.pos.x - landing.x);
        let knockdown = if outcome.knockdown().is_some() { 1.0 } else { 0.0 };
        let danger = probe
            .defenders
            .iter()
            .filter(|d| !d.is_knocked_down() && d.pos().manhattan(landing) == 1)
            .count();
        let danger = f64::from(u32::try_from(danger).unwrap_or(u32::MAX));

        Some(
            self.progress_weight * progress + self.knockdown_weight * knockdown
                - self.danger_weight * danger,
        )
    }
}

/// Knobs for a headless game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Virtual milliseconds between runner moves.
    pub move_interval_ms: u64,
    /// Hard stop on virtual time, in case a configuration never ends.
    pub max_virtual_ms: u64,
    /// Runner policy.
    pub autopilot: Autopilot,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            move_interval_ms: 250,
            max_virtual_ms: 30 * 60 * 1000,
            autopilot: Autopilot::default(),
        }
    }
}

/// Final tally of a headless game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimResult {
    /// Session seed.
    pub seed: u64,
    /// Final score.
    pub score: u32,
    /// Touchdowns scored.
    pub touchdowns: u32,
    /// Defenders flattened.
    pub knockdowns: u32,
    /// Downs played.
    pub downs: u32,
    /// Runner moves sent.
    pub moves: u32,
    /// Virtual time when the game stopped.
    pub virtual_ms: u64,
    /// How the game ended, or `None` if it hit `max_virtual_ms`.
    pub reason: Option<GameOverReason>,
}

/// Play one game from kickoff to game over.
///
/// # Errors
///
/// Returns an error if `config` fails validation.
pub fn simulate(config: GameConfig, seed: u64, params: &SimParams) -> Result<SimResult, ConfigError> {
    let mut session = Session::new(config, seed)?;
    session.handle(Input::Start);

    let step = params.move_interval_ms.max(1);
    let mut moves = 0u32;
    while session.phase() != Phase::GameOver && session.now() < params.max_virtual_ms {
        session.advance(step);
        if session.phase() != Phase::Playing {
            continue;
        }
        if let Some(dir) = params.autopilot.choose(session.roster(), session.field()) {
            session.handle(Input::Move(dir));
            moves += 1;
        }
    }

    let board = *session.scoreboard();
    let result = SimResult {
        seed,
        score: board.score,
        touchdowns: board.touchdowns,
        knockdowns: board.knockdowns,
        downs: session.downs(),
        moves,
        virtual_ms: session.now(),
        reason: session.game_over_reason(),
    };
    debug!(seed, score = result.score, downs = result.downs, "simulation finished");
    Ok(result)
}
