//! Defender and referee AI tick.
//!
//! Every tick each standing defender, then each referee, takes at most one
//! cardinal step. Defenders resolve in roster order and the first one to
//! reach the runner's tile tackles it, ending the tick.

use rand::Rng;
use tracing::trace;

use crate::config::AiConfig;
use crate::game::{Behavior, Coord, Defender, Direction, Field, Mobile, Referee, Roster};
use crate::rng::chance;

/// Result of one AI tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nobody reached the runner.
    Quiet,
    /// A defender reached the runner's tile.
    Tackle {
        /// Index of the tackling defender in [`Roster::defenders`].
        defender: usize,
    },
}

/// Advance every defender and referee by at most one step.
///
/// At most one tackle is reported per tick: iteration stops at the first
/// defender that lands on the runner, and later defenders and all referees
/// stay put for this tick. A step onto the runner tackles wherever the
/// runner stands, including columns defenders may not enter.
pub fn tick<R: Rng>(roster: &mut Roster, field: &Field, config: &AiConfig, rng: &mut R) -> TickOutcome {
    let runner = roster.player.pos;

    for i in 0..roster.defenders.len() {
        let defender = roster.defenders[i];
        if defender.is_knocked_down() {
            continue;
        }
        let from = defender.pos();
        let Some(dir) = choose_step(from, runner, Defender::BEHAVIOR, config, rng) else {
            continue;
        };
        let to = from.step(dir);
        if to == runner {
            roster.defenders[i].face(dir);
            // The tackler keeps its tile; the runner goes down on its own
            trace!(defender = i, x = from.x, y = from.y, "tackle");
            return TickOutcome::Tackle { defender: i };
        }
        if !field.in_npc_bounds(to) {
            continue;
        }
        // Facing follows the intent even when the step is refused
        roster.defenders[i].face(dir);
        if !roster.is_occupied(to) {
            roster.defenders[i].step_to(to);
        }
    }

    for i in 0..roster.referees.len() {
        let from = roster.referees[i].pos();
        let Some(dir) = choose_step(from, runner, Referee::BEHAVIOR, config, rng) else {
            continue;
        };
        let to = from.step(dir);
        if field.in_npc_bounds(to) && !roster.is_occupied(to) {
            roster.referees[i].step_to(to);
        }
    }

    TickOutcome::Quiet
}

/// Pick this tick's step for an entity at `from`, or `None` to stand still.
fn choose_step<R: Rng>(
    from: Coord,
    runner: Coord,
    behavior: Behavior,
    config: &AiConfig,
    rng: &mut R,
) -> Option<Direction> {
    match behavior {
        Behavior::Chase => {
            if from.manhattan(runner) == 1 && chance(rng, config.lunge_chance) {
                return toward(from, runner, rng);
            }
            if chance(rng, config.idle_chance) {
                return None;
            }
            if chance(rng, config.chase_chance) {
                return toward(from, runner, rng);
            }
            Some(random_direction(rng))
        }
        Behavior::Patrol => {
            if chance(rng, config.referee_idle_chance) {
                None
            } else {
                Some(random_direction(rng))
            }
        }
    }
}

/// Single-axis step closing the gap to `target`, along the longer axis.
///
/// Ties are broken at random. Returns `None` when already on `target`.
fn toward<R: Rng>(from: Coord, target: Coord, rng: &mut R) -> Option<Direction> {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let horizontal = match dx.abs().cmp(&dy.abs()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal if dx == 0 => return None,
        std::cmp::Ordering::Equal => rng.gen_bool(0.5),
    };
    Some(match (horizontal, dx.signum(), dy.signum()) {
        (true, -1, _) => Direction::Left,
        (true, _, _) => Direction::Right,
        (false, _, -1) => Direction::Up,
        (false, _, _) => Direction::Down,
    })
}

/// Uniformly random cardinal direction.
fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}
