//! Field geometry: coordinates, directions, bounds and distance queries.

use serde::Serialize;

use crate::config::FieldConfig;

/// A tile coordinate on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// One of the four cardinal directions. Diagonal moves do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0, the scoring endzone.
    Left,
    /// Toward the home endzone.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Whether this direction moves along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Immutable field geometry for one game.
///
/// ```text
///  col: 0   1 | 2 ..................... 41 | 42  43
///      wall  GL|          field            | home EZ
/// ```
///
/// `GL` is the goal line. The runner scores by stepping onto it. Defenders
/// and referees never enter the outermost columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    width: i32,
    height: i32,
    view_width: i32,
    endzone_left: i32,
    endzone_right: i32,
    yards_per_tile: i32,
}

impl Field {
    /// Build the field from a (validated) configuration.
    #[must_use]
    pub const fn new(config: &FieldConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            view_width: config.view_width,
            endzone_left: config.endzone_left,
            endzone_right: config.endzone_right,
            yards_per_tile: config.yards_per_tile,
        }
    }

    /// Total grid width `W`.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height `H`.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Viewport width `V`.
    #[must_use]
    pub const fn view_width(&self) -> i32 {
        self.view_width
    }

    /// First field column next to the scoring endzone.
    #[must_use]
    pub const fn endzone_left(&self) -> i32 {
        self.endzone_left
    }

    /// First column of the home endzone.
    #[must_use]
    pub const fn endzone_right(&self) -> i32 {
        self.endzone_right
    }

    /// Column the runner must reach to score.
    #[must_use]
    pub const fn goal_line(&self) -> i32 {
        self.endzone_left - 1
    }

    /// Where the runner lines up at the start of every down.
    #[must_use]
    pub const fn kickoff_spot(&self) -> Coord {
        Coord::new(self.endzone_right, self.height / 2)
    }

    /// Largest valid camera offset, `W - V`.
    #[must_use]
    pub const fn max_camera_x(&self) -> i32 {
        self.width - self.view_width
    }

    /// Whether the runner may stand on `coord`.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Whether a defender or referee may stand on `coord`.
    ///
    /// The outermost columns are walls for everyone but the runner.
    #[must_use]
    pub const fn in_npc_bounds(&self, coord: Coord) -> bool {
        coord.x >= 1 && coord.x <= self.width - 2 && coord.y >= 0 && coord.y < self.height
    }

    /// Whether standing on column `x` scores a touchdown.
    #[must_use]
    pub const fn is_touchdown(&self, x: i32) -> bool {
        x <= self.goal_line()
    }

    /// Whether column `x` lies in either endzone.
    #[must_use]
    pub const fn is_endzone(&self, x: i32) -> bool {
        x < self.endzone_left || x >= self.endzone_right
    }

    /// Scoreboard distance from column `x` to the goal line, never negative.
    #[must_use]
    pub fn yards_from_goal(&self, x: i32) -> i32 {
        (x - self.goal_line()).max(0) * self.yards_per_tile
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(&FieldConfig::default())
    }
}
