//! Runner, defender and referee state.

use serde::Serialize;

use crate::game::{Coord, Direction};

/// Horizontal facing. Vertical moves leave it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Facing {
    /// Facing toward column 0.
    Left,
    /// Facing toward the home endzone.
    Right,
}

impl Facing {
    /// Facing after a step of `dx` columns, or `self` for a vertical step.
    #[must_use]
    pub const fn after_step(self, dx: i32) -> Self {
        if dx < 0 {
            Facing::Left
        } else if dx > 0 {
            Facing::Right
        } else {
            self
        }
    }
}

/// Animation pose of the runner. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pose {
    /// Upright, between strides.
    Standing,
    /// Mid-stride toward the left or right.
    RunningSideways,
    /// Running toward row 0.
    RunningUp,
    /// Running toward the last row.
    RunningDown,
}

/// The player-controlled runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Current tile.
    pub pos: Coord,
    /// Horizontal facing.
    pub facing: Facing,
    /// Animation pose.
    pub pose: Pose,
    /// Alternates on every vertical step to swap the planted foot.
    pub left_foot: bool,
}

impl Player {
    /// A runner lined up at `pos`, facing the scoring endzone.
    #[must_use]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            facing: Facing::Left,
            pose: Pose::RunningSideways,
            left_foot: false,
        }
    }

    /// Update facing and pose for an input in `dir`.
    ///
    /// Horizontal input alternates between standing and running sideways;
    /// vertical input picks the up/down pose and swaps the planted foot.
    pub fn animate(&mut self, dir: Direction) {
        let (dx, _) = dir.delta();
        match dir {
            Direction::Left | Direction::Right => {
                self.facing = self.facing.after_step(dx);
                self.pose = if self.pose == Pose::RunningSideways {
                    Pose::Standing
                } else {
                    Pose::RunningSideways
                };
            }
            Direction::Up => {
                self.pose = Pose::RunningUp;
                self.left_foot = !self.left_foot;
            }
            Direction::Down => {
                self.pose = Pose::RunningDown;
                self.left_foot = !self.left_foot;
            }
        }
    }
}

/// How a non-player entity picks its next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Behavior {
    /// Lunges at an adjacent runner, drifts toward it, otherwise wanders.
    /// Reaching the runner's tile is a tackle.
    Chase,
    /// Wanders at random and never interacts with the runner.
    Patrol,
}

/// Positional state shared by defenders and referees.
pub trait Mobile {
    /// AI strategy for this kind of entity.
    const BEHAVIOR: Behavior;

    /// Current tile.
    fn pos(&self) -> Coord;

    /// Move to `to`, updating facing from the horizontal component.
    fn step_to(&mut self, to: Coord);

    /// Turn toward `dir` without moving. Vertical directions keep facing.
    fn face(&mut self, dir: Direction);

    /// Current facing.
    fn facing(&self) -> Facing;
}

/// An AI-controlled defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Defender {
    pos: Coord,
    facing: Facing,
    knocked_down: bool,
}

impl Defender {
    /// A standing defender at `pos`, facing the runner's side of the field.
    #[must_use]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            facing: Facing::Right,
            knocked_down: false,
        }
    }

    /// Whether the runner has flattened this defender.
    ///
    /// Once set it stays set for the rest of the down.
    #[must_use]
    pub const fn is_knocked_down(&self) -> bool {
        self.knocked_down
    }

    /// Knock this defender down for the rest of the down.
    pub fn knock_down(&mut self) {
        self.knocked_down = true;
    }

    /// Whether this defender blocks `coord`.
    #[must_use]
    pub fn blocks(&self, coord: Coord) -> bool {
        !self.knocked_down && self.pos == coord
    }
}

impl Mobile for Defender {
    const BEHAVIOR: Behavior = Behavior::Chase;

    fn pos(&self) -> Coord {
        self.pos
    }

    fn step_to(&mut self, to: Coord) {
        self.facing = self.facing.after_step(to.x - self.pos.x);
        self.pos = to;
    }

    fn face(&mut self, dir: Direction) {
        self.facing = self.facing.after_step(dir.delta().0);
    }

    fn facing(&self) -> Facing {
        self.facing
    }
}

/// A referee: an impassable obstacle that is never knocked down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Referee {
    pos: Coord,
    facing: Facing,
}

impl Referee {
    /// A referee standing at `pos`.
    #[must_use]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            facing: Facing::Right,
        }
    }
}

impl Mobile for Referee {
    const BEHAVIOR: Behavior = Behavior::Patrol;

    fn pos(&self) -> Coord {
        self.pos
    }

    fn step_to(&mut self, to: Coord) {
        self.facing = self.facing.after_step(to.x - self.pos.x);
        self.pos = to;
    }

    fn face(&mut self, dir: Direction) {
        self.facing = self.facing.after_step(dir.delta().0);
    }

    fn facing(&self) -> Facing {
        self.facing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_input_alternates_pose() {
        let mut p = Player::new(Coord::new(10, 3));
        assert_eq!(p.pose, Pose::RunningSideways);
        p.animate(Direction::Left);
        assert_eq!(p.pose, Pose::Standing);
        p.animate(Direction::Left);
        assert_eq!(p.pose, Pose::RunningSideways);
    }

    #[test]
    fn test_horizontal_input_sets_facing() {
        let mut p = Player::new(Coord::new(10, 3));
        p.animate(Direction::Right);
        assert_eq!(p.facing, Facing::Right);
        p.animate(Direction::Up);
        assert_eq!(p.facing, Facing::Right);
        p.animate(Direction::Left);
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_vertical_input_swaps_foot() {
        let mut p = Player::new(Coord::new(10, 3));
        p.animate(Direction::Up);
        assert_eq!(p.pose, Pose::RunningUp);
        assert!(p.left_foot);
        p.animate(Direction::Down);
        assert_eq!(p.pose, Pose::RunningDown);
        assert!(!p.left_foot);
    }

    #[test]
    fn test_knockdown_is_one_way() {
        let mut d = Defender::new(Coord::new(4, 4));
        assert!(d.blocks(Coord::new(4, 4)));
        d.knock_down();
        assert!(d.is_knocked_down());
        assert!(!d.blocks(Coord::new(4, 4)));
        d.knock_down();
        assert!(d.is_knocked_down());
    }

    #[test]
    fn test_step_updates_facing_only_horizontally() {
        let mut r = Referee::new(Coord::new(5, 5));
        r.step_to(Coord::new(4, 5));
        assert_eq!(r.facing(), Facing::Left);
        r.step_to(Coord::new(4, 4));
        assert_eq!(r.facing(), Facing::Left);
        assert_eq!(r.pos(), Coord::new(4, 4));
    }

    #[test]
    fn test_behaviors() {
        assert_eq!(Defender::BEHAVIOR, Behavior::Chase);
        assert_eq!(Referee::BEHAVIOR, Behavior::Patrol);
    }
}
