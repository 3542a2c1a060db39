//! Entity registry: the runner plus every defender and referee on the field.

use rand::Rng;
use serde::Serialize;
use tracing::warn;

use crate::config::SpawnConfig;
use crate::game::{Coord, Defender, Field, Mobile, Player, Referee};

/// Outcome of a spawn pass.
///
/// Placement is rejection sampling with a bounded number of draws, so a
/// field that is too crowded yields fewer entities instead of looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpawnReport {
    /// Defenders requested for this difficulty level.
    pub defenders_requested: u32,
    /// Defenders actually placed.
    pub defenders_placed: u32,
    /// Referees requested.
    pub referees_requested: u32,
    /// Referees actually placed.
    pub referees_placed: u32,
}

impl SpawnReport {
    /// Entities that could not be placed.
    #[must_use]
    pub const fn skipped(&self) -> u32 {
        (self.defenders_requested - self.defenders_placed)
            + (self.referees_requested - self.referees_placed)
    }
}

/// Every entity on the field for the current down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    /// The runner.
    pub player: Player,
    /// Defenders in tick order.
    pub defenders: Vec<Defender>,
    /// Referees in tick order.
    pub referees: Vec<Referee>,
}

impl Roster {
    /// A roster holding only the runner.
    #[must_use]
    pub const fn new(player: Player) -> Self {
        Self {
            player,
            defenders: Vec::new(),
            referees: Vec::new(),
        }
    }

    /// Whether `coord` holds the runner, a standing defender, or a referee.
    ///
    /// Knocked-down defenders are floor decoration and never occupy a tile.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.player.pos == coord || self.defender_at(coord).is_some() || self.has_referee_at(coord)
    }

    /// Index of the standing defender on `coord`, if any.
    #[must_use]
    pub fn defender_at(&self, coord: Coord) -> Option<usize> {
        self.defenders.iter().position(|d| d.blocks(coord))
    }

    /// Whether a referee stands on `coord`.
    #[must_use]
    pub fn has_referee_at(&self, coord: Coord) -> bool {
        self.referees.iter().any(|r| r.pos() == coord)
    }

    /// Number of defenders still standing.
    #[must_use]
    pub fn standing_defenders(&self) -> usize {
        self.defenders.iter().filter(|d| !d.is_knocked_down()).count()
    }

    /// Defenders to field at `level` (touchdowns scored so far).
    #[must_use]
    pub fn defender_count(config: &SpawnConfig, level: u32) -> u32 {
        config
            .base_defenders
            .saturating_add(config.defenders_per_level.saturating_mul(level))
            .min(config.max_defenders)
    }

    /// Referees to field alongside `defenders` defenders (at least one).
    #[must_use]
    pub fn referee_count(config: &SpawnConfig, defenders: u32) -> u32 {
        (defenders / config.defenders_per_referee.max(1)).max(1)
    }

    /// Replace every defender and referee with a fresh random layout.
    ///
    /// Defenders are drawn from the field columns shrunk by
    /// `defender_margin` on both sides, referees from the whole field
    /// between the endzones. Nothing is ever placed in an endzone or on an
    /// occupied tile.
    pub fn spawn<R: Rng>(
        &mut self,
        field: &Field,
        config: &SpawnConfig,
        level: u32,
        rng: &mut R,
    ) -> SpawnReport {
        self.defenders.clear();
        self.referees.clear();

        let defenders_requested = Self::defender_count(config, level);
        let referees_requested = Self::referee_count(config, defenders_requested);
        let mut report = SpawnReport {
            defenders_requested,
            referees_requested,
            ..SpawnReport::default()
        };

        let defender_cols = (
            field.endzone_left() + config.defender_margin,
            field.endzone_right() - config.defender_margin,
        );
        for _ in 0..defenders_requested {
            if let Some(pos) = self.free_tile(field, defender_cols, config.max_placement_attempts, rng) {
                self.defenders.push(Defender::new(pos));
                report.defenders_placed += 1;
            }
        }

        let referee_cols = (field.endzone_left(), field.endzone_right());
        for _ in 0..referees_requested {
            if let Some(pos) = self.free_tile(field, referee_cols, config.max_placement_attempts, rng) {
                self.referees.push(Referee::new(pos));
                report.referees_placed += 1;
            }
        }

        if report.skipped() > 0 {
            warn!(
                skipped = report.skipped(),
                requested = defenders_requested + referees_requested,
                "field too crowded, some entities were not placed"
            );
        }
        report
    }

    /// Draw a random unoccupied tile with `cols.0 <= x < cols.1`.
    fn free_tile<R: Rng>(
        &self,
        field: &Field,
        cols: (i32, i32),
        attempts: u32,
        rng: &mut R,
    ) -> Option<Coord> {
        if cols.1 <= cols.0 || field.height() <= 0 {
            return None;
        }
        for _ in 0..attempts {
            let pos = Coord::new(rng.gen_range(cols.0..cols.1), rng.gen_range(0..field.height()));
            if !self.is_occupied(pos) {
                return Some(pos);
            }
        }
        None
    }
}
