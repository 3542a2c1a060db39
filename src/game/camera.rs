//! Horizontal scrolling camera with a dead zone.

use crate::config::CameraConfig;
use crate::game::Field;

/// Leftmost visible column plus the dead zone that drives scrolling.
///
/// The offset is kept in `0..=W - V` and moves by at most one column per
/// runner step, so scrolling tracks footsteps instead of snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    x: i32,
    max_x: i32,
    view_width: i32,
    low: i32,
    high: i32,
}

impl Camera {
    /// A camera parked at the home endzone.
    #[must_use]
    pub const fn new(field: &Field, config: &CameraConfig) -> Self {
        Self {
            x: field.max_camera_x(),
            max_x: field.max_camera_x(),
            view_width: field.view_width(),
            low: config.low_threshold,
            high: config.high_threshold,
        }
    }

    /// Current offset (`cameraX`).
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Park the camera back at the home endzone for a new down.
    pub fn reset(&mut self) {
        self.x = self.max_x;
    }

    /// Nudge the offset toward the runner at `player_x` and return it.
    pub fn follow(&mut self, player_x: i32) -> i32 {
        let rel = player_x - self.x;
        if rel < self.low && self.x > 0 {
            self.x -= 1;
        } else if rel > self.high && self.x < self.max_x {
            self.x += 1;
        }
        self.x
    }

    /// Whether field column `x` is on screen.
    #[must_use]
    pub const fn is_visible(&self, x: i32) -> bool {
        x >= self.x && x < self.x + self.view_width
    }

    /// Viewport column of field column `x`, if visible.
    #[must_use]
    pub fn to_screen(&self, x: i32) -> Option<i32> {
        self.is_visible(x).then(|| x - self.x)
    }
}
