//! Runner movement and collision resolution.

use crate::game::{Coord, Direction, Field, Roster};

/// What a single directional input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Out of bounds or into a referee. Nothing changed.
    Discarded,
    /// The runner stepped onto an empty tile.
    Stepped,
    /// The runner flattened a defender and took its tile.
    KnockedDown {
        /// Index of the flattened defender.
        defender: usize,
    },
    /// The runner hit a defender with nowhere to go. The runner stays put.
    Tackled {
        /// Index of the defender that made the stop.
        defender: usize,
    },
    /// The runner reached the goal line.
    Touchdown {
        /// Defender flattened on the way in, if any.
        knocked_down: Option<usize>,
    },
}

impl MoveOutcome {
    /// Whether the runner changed tiles.
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(
            self,
            MoveOutcome::Stepped | MoveOutcome::KnockedDown { .. } | MoveOutcome::Touchdown { .. }
        )
    }

    /// The defender flattened by this move, if any.
    #[must_use]
    pub const fn knockdown(self) -> Option<usize> {
        match self {
            MoveOutcome::KnockedDown { defender } => Some(defender),
            MoveOutcome::Touchdown { knocked_down } => knocked_down,
            _ => None,
        }
    }
}

/// Apply one directional input to the runner.
///
/// Side effects happen in this order: animation pose, collision
/// resolution, knockdown flag, runner position. A discarded move (out of
/// bounds, or a referee on the target tile) touches nothing at all.
///
/// Moving into a standing defender pushes it over when the tile behind it,
/// in the same direction, is inside the defender bounds and free of other
/// standing defenders. Otherwise the defender holds its ground and the
/// runner is tackled.
pub fn resolve_move(roster: &mut Roster, field: &Field, dir: Direction) -> MoveOutcome {
    let target = roster.player.pos.step(dir);

    if !field.in_bounds(target) || roster.has_referee_at(target) {
        return MoveOutcome::Discarded;
    }

    roster.player.animate(dir);

    let mut knocked_down = None;
    if let Some(defender) = roster.defender_at(target) {
        let behind = target.step(dir);
        if !can_fall_into(roster, field, behind) {
            return MoveOutcome::Tackled { defender };
        }
        roster.defenders[defender].knock_down();
        knocked_down = Some(defender);
    }

    roster.player.pos = target;

    if field.is_touchdown(target.x) {
        return MoveOutcome::Touchdown { knocked_down };
    }
    match knocked_down {
        Some(defender) => MoveOutcome::KnockedDown { defender },
        None => MoveOutcome::Stepped,
    }
}

/// Whether a defender pushed onto `behind` can go down there.
fn can_fall_into(roster: &Roster, field: &Field, behind: Coord) -> bool {
    field.in_npc_bounds(behind) && roster.defender_at(behind).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Defender, Facing, Mobile, Player, Pose, Referee};

    fn roster_at(x: i32, y: i32) -> Roster {
        Roster::new(Player::new(Coord::new(x, y)))
    }

    #[test]
    fn test_step_onto_empty_tile() {
        let field = Field::default();
        let mut roster = roster_at(10, 3);
        assert_eq!(resolve_move(&mut roster, &field, Direction::Up), MoveOutcome::Stepped);
        assert_eq!(roster.player.pos, Coord::new(10, 2));
        assert_eq!(roster.player.pose, Pose::RunningUp);
    }

    #[test]
    fn test_successful_knockdown() {
        let field = Field::default();
        let mut roster = roster_at(10, 3);
        roster.defenders.push(Defender::new(Coord::new(11, 3)));

        let outcome = resolve_move(&mut roster, &field, Direction::Right);
        assert_eq!(outcome, MoveOutcome::KnockedDown { defender: 0 });
        assert!(roster.defenders[0].is_knocked_down());
        assert_eq!(roster.player.pos, Coord::new(11, 3));
        assert_eq!(roster.player.facing, Facing::Right);
    }

    #[test]
    fn test_blocked_knockdown_is_tackle() {
        let field = Field::default();
        let mut roster = roster_at(10, 3);
        roster.defenders.push(Defender::new(Coord::new(11, 3)));
        roster.defenders.push(Defender::new(Coord::new(12, 3)));

        let outcome = resolve_move(&mut roster, &field, Direction::Right);
        assert_eq!(outcome, MoveOutcome::Tackled { defender: 0 });
        assert_eq!(roster.player.pos, Coord::new(10, 3));
        assert!(!roster.defenders[0].is_knocked_down());
        assert!(!roster.defenders[1].is_knocked_down());
    }

    #[test]
    fn test_knockdown_against_sideline_is_tackle() {
        let field = Field::default();
        let mut roster = roster_at(10, 1);
        roster.defenders.push(Defender::new(Coord::new(10, 0)));

        let outcome = resolve_move(&mut roster, &field, Direction::Up);
        assert_eq!(outcome, MoveOutcome::Tackled { defender: 0 });
        assert_eq!(roster.player.pos, Coord::new(10, 1));
    }

    #[test]
    fn test_knocked_down_defender_behind_does_not_block() {
        let field = Field::default();
        let mut roster = roster_at(10, 3);
        roster.defenders.push(Defender::new(Coord::new(9, 3)));
        let mut flat = Defender::new(Coord::new(8, 3));
        flat.knock_down();
        roster.defenders.push(flat);

        let outcome = resolve_move(&mut roster, &field, Direction::Left);
        assert_eq!(outcome, MoveOutcome::KnockedDown { defender: 0 });
    }

    #[test]
    fn test_referee_blocks_without_side_effects() {
        let field = Field::default();
        let mut roster = roster_at(10, 3);
        roster.referees.push(Referee::new(Coord::new(9, 3)));
        let before = roster.clone();

        assert_eq!(resolve_move(&mut roster, &field, Direction::Left), MoveOutcome::Discarded);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_out_of_bounds_is_discarded() {
        let field = Field::default();
        let mut roster = roster_at(10, 0);
        let before = roster.clone();

        assert_eq!(resolve_move(&mut roster, &field, Direction::Up), MoveOutcome::Discarded);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_reaching_goal_line_scores() {
        let field = Field::default();
        let mut roster = roster_at(field.goal_line() + 1, 3);

        let outcome = resolve_move(&mut roster, &field, Direction::Left);
        assert_eq!(outcome, MoveOutcome::Touchdown { knocked_down: None });
        assert_eq!(roster.player.pos.x, field.goal_line());
    }

    #[test]
    fn test_knockdown_against_back_wall_is_tackle() {
        let field = Field::default();
        let mut roster = roster_at(3, 3);
        roster.defenders.push(Defender::new(Coord::new(2, 3)));
        // Column 1 behind the defender is still inside defender bounds
        resolve_move(&mut roster, &field, Direction::Left);
        assert!(roster.defenders[0].is_knocked_down());
        assert_eq!(roster.player.pos, Coord::new(2, 3));

        roster.defenders.push(Defender::new(Coord::new(1, 2)));
        roster.player.pos = Coord::new(2, 2);
        // Behind (1, 2) is column 0, a wall for defenders
        let outcome = resolve_move(&mut roster, &field, Direction::Left);
        assert_eq!(outcome, MoveOutcome::Tackled { defender: 1 });
    }

    #[test]
    fn test_walk_over_knocked_down_defender() {
        let field = Field::default();
        let mut roster = roster_at(10, 3);
        let mut flat = Defender::new(Coord::new(9, 3));
        flat.knock_down();
        roster.defenders.push(flat);

        assert_eq!(resolve_move(&mut roster, &field, Direction::Left), MoveOutcome::Stepped);
        assert_eq!(roster.player.pos, roster.defenders[0].pos());
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(MoveOutcome::Stepped.moved());
        assert!(!MoveOutcome::Discarded.moved());
        assert!(!MoveOutcome::Tackled { defender: 0 }.moved());
        assert_eq!(MoveOutcome::KnockedDown { defender: 2 }.knockdown(), Some(2));
        assert_eq!(MoveOutcome::Touchdown { knocked_down: None }.knockdown(), None);
    }
}
