//! Session invariants - sanity checks that detect bugs.
//!
//! These hold after every input and every clock advance of a correctly
//! implemented session. They are bug detectors, not gameplay rules.

use std::collections::HashSet;

use crate::game::{Coord, Mobile};
use crate::session::{Phase, Session};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

/// Check all session invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(session: &Session) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let field = session.field();
    let roster = session.roster();

    // Occupancy: runner, standing defenders and referees never share a tile
    let mut taken: HashSet<Coord> = HashSet::new();
    taken.insert(roster.player.pos);
    let blockers = roster
        .defenders
        .iter()
        .filter(|d| !d.is_knocked_down())
        .map(|d| ("defender", d.pos()))
        .chain(roster.referees.iter().map(|r| ("referee", r.pos())));
    for (kind, pos) in blockers {
        if !taken.insert(pos) {
            violations.push(violation(format!("{kind} at {pos:?} shares its tile")));
        }
    }

    if !field.in_bounds(roster.player.pos) {
        violations.push(violation(format!(
            "Runner at {:?} is off the field",
            roster.player.pos
        )));
    }
    let npcs = roster
        .defenders
        .iter()
        .map(Mobile::pos)
        .chain(roster.referees.iter().map(Mobile::pos));
    for pos in npcs {
        if !field.in_npc_bounds(pos) {
            violations.push(violation(format!("Entity at {pos:?} is outside defender bounds")));
        }
    }

    let camera_x = session.camera_x();
    if !(0..=field.max_camera_x()).contains(&camera_x) {
        violations.push(violation(format!(
            "Camera offset {camera_x} outside 0..={}",
            field.max_camera_x()
        )));
    }

    let board = session.scoreboard();
    let config = session.config();
    if board.attempts > config.rules.start_attempts {
        violations.push(violation(format!(
            "Attempts {} exceed the starting {}",
            board.attempts, config.rules.start_attempts
        )));
    }
    if board.attempts == 0 && session.phase() != Phase::GameOver {
        violations.push(violation(format!(
            "No attempts left in phase {:?}",
            session.phase()
        )));
    }
    if board.time_remaining > config.timing.game_duration_secs {
        violations.push(violation(format!(
            "Clock {} exceeds game length {}",
            board.time_remaining, config.timing.game_duration_secs
        )));
    }
    if board.knockdowns.saturating_mul(config.rules.knockdown_points)
        + board.touchdowns.saturating_mul(config.rules.touchdown_points)
        != board.score
    {
        violations.push(violation(format!(
            "Score {} does not match {} knockdowns and {} touchdowns",
            board.score, board.knockdowns, board.touchdowns
        )));
    }

    if (session.phase() == Phase::GameOver) != session.game_over_reason().is_some() {
        violations.push(violation(format!(
            "Phase {:?} disagrees with game-over reason {:?}",
            session.phase(),
            session.game_over_reason()
        )));
    }

    violations
}

/// Assert all session invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(session: &Session) {
    let violations = check_invariants(session);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Session invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_session: &Session) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{Defender, Player, Referee, Roster};
    use crate::session::Input;

    fn session() -> Session {
        let mut s = Session::new(GameConfig::default(), 17).unwrap();
        s.handle(Input::Start);
        s
    }

    #[test]
    fn test_valid_session_passes() {
        assert!(check_invariants(&session()).is_empty());
    }

    #[test]
    fn test_shared_tile_detected() {
        let mut s = session();
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        roster.defenders.push(Defender::new(Coord::new(10, 3)));
        roster.referees.push(Referee::new(Coord::new(10, 3)));
        s.set_roster_unchecked(roster);

        let violations = check_invariants(&s);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("shares its tile"));
    }

    #[test]
    fn test_knocked_down_defender_may_share() {
        let mut s = session();
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        let mut flat = Defender::new(Coord::new(20, 3));
        flat.knock_down();
        roster.defenders.push(flat);
        s.set_roster_unchecked(roster);

        assert!(check_invariants(&s).is_empty());
    }

    #[test]
    fn test_defender_on_outer_column_detected() {
        let mut s = session();
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        roster.defenders.push(Defender::new(Coord::new(0, 3)));
        s.set_roster_unchecked(roster);

        let violations = check_invariants(&s);
        assert!(violations[0].message.contains("outside defender bounds"));
    }
}
