//! Game configuration.
//!
//! Defaults match the classic arcade tuning. Any subset of settings can be
//! overridden from a JSON file; missing keys fall back to the defaults.
//!
//! ```json
//! { "timing": { "game_duration_secs": 90 }, "ai": { "idle_chance": 0.5 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Field geometry, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Total grid width `W`.
    pub width: i32,
    /// Grid height `H`.
    pub height: i32,
    /// Visible columns `V`.
    pub view_width: i32,
    /// First field column next to the scoring endzone.
    pub endzone_left: i32,
    /// First column of the home endzone, where the runner lines up.
    pub endzone_right: i32,
    /// Yards represented by one tile on the scoreboard.
    pub yards_per_tile: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 44,
            height: 7,
            view_width: 14,
            endzone_left: 2,
            endzone_right: 42,
            yards_per_tile: 1,
        }
    }
}

/// Cadences and presentation delays, in milliseconds unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Interval between defender ticks.
    pub turn_delay_ms: u64,
    /// Game clock length in seconds.
    pub game_duration_secs: u32,
    /// Pre-snap countdown.
    pub ready_delay_ms: u64,
    /// Pause after a tackle before the next down.
    pub tackle_pause_ms: u64,
    /// Interval between touchdown banner toggles.
    pub blink_interval_ms: u64,
    /// Number of banner toggles before the next kickoff.
    pub blink_count: u32,
    /// Delay of the crowd cue after the opening kickoff.
    pub crowd_cue_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            turn_delay_ms: 500,
            game_duration_secs: 60,
            ready_delay_ms: 3000,
            tackle_pause_ms: 5000,
            blink_interval_ms: 625,
            blink_count: 8,
            crowd_cue_delay_ms: 1000,
        }
    }
}

/// Scoring and attempt rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Attempts (downs) granted at kickoff and after every touchdown.
    pub start_attempts: u32,
    /// Points for reaching the endzone.
    pub touchdown_points: u32,
    /// Points for each knockdown.
    pub knockdown_points: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            start_attempts: 4,
            touchdown_points: 7,
            knockdown_points: 1,
        }
    }
}

/// Probabilities steering the defender and referee AI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_field_names)]
pub struct AiConfig {
    /// Chance that a defender next to the runner lunges at it.
    pub lunge_chance: f64,
    /// Chance that a defender stays put for a tick.
    pub idle_chance: f64,
    /// Chance that a moving defender steps toward the runner instead of at random.
    pub chase_chance: f64,
    /// Chance that a referee stays put for a tick.
    pub referee_idle_chance: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            lunge_chance: 0.8,
            idle_chance: 0.6,
            chase_chance: 0.25,
            referee_idle_chance: 0.7,
        }
    }
}

/// Entity placement at the start of each down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Defenders at difficulty level 0.
    pub base_defenders: u32,
    /// Extra defenders per touchdown scored.
    pub defenders_per_level: u32,
    /// Upper bound on defenders.
    pub max_defenders: u32,
    /// One referee per this many defenders (at least one referee).
    pub defenders_per_referee: u32,
    /// Columns kept clear of defenders inside each endzone boundary.
    pub defender_margin: i32,
    /// Random draws per entity before it is skipped.
    pub max_placement_attempts: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            base_defenders: 12,
            defenders_per_level: 2,
            max_defenders: 30,
            defenders_per_referee: 5,
            defender_margin: 2,
            max_placement_attempts: 256,
        }
    }
}

/// Viewport-relative dead zone for the scrolling camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Scroll left when the runner is left of this viewport column.
    pub low_threshold: i32,
    /// Scroll right when the runner is right of this viewport column.
    pub high_threshold: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            low_threshold: 9,
            high_threshold: 11,
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Field geometry.
    pub field: FieldConfig,
    /// Cadences and delays.
    pub timing: TimingConfig,
    /// Scoring rules.
    pub rules: RulesConfig,
    /// AI probabilities.
    pub ai: AiConfig,
    /// Spawn density.
    pub spawn: SpawnConfig,
    /// Camera dead zone.
    pub camera: CameraConfig,
}

impl GameConfig {
    /// Parse a configuration from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or holds
    /// out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every setting against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_field()?;
        self.validate_timing()?;
        self.validate_rules()?;
        self.validate_ai()?;
        self.validate_spawn()?;
        self.validate_camera()
    }

    fn validate_field(&self) -> Result<(), ConfigError> {
        let f = &self.field;
        if f.height < 1 {
            return Err(ConfigError::invalid("field.height", "must be at least 1"));
        }
        if !(1..=f.width).contains(&f.view_width) {
            return Err(ConfigError::invalid(
                "field.view_width",
                format!("must be between 1 and the field width ({})", f.width),
            ));
        }
        // The goal line sits one column left of endzone_left and must be
        // reachable by the runner without touching column 0 as a wall.
        if f.endzone_left < 2 {
            return Err(ConfigError::invalid("field.endzone_left", "must be at least 2"));
        }
        if f.endzone_right <= f.endzone_left || f.endzone_right > f.width - 1 {
            return Err(ConfigError::invalid(
                "field.endzone_right",
                format!(
                    "must lie in ({}, {}]",
                    f.endzone_left,
                    f.width - 1
                ),
            ));
        }
        if f.yards_per_tile < 1 {
            return Err(ConfigError::invalid("field.yards_per_tile", "must be positive"));
        }
        Ok(())
    }

    fn validate_timing(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if t.turn_delay_ms == 0 {
            return Err(ConfigError::invalid("timing.turn_delay_ms", "must be positive"));
        }
        if t.game_duration_secs == 0 {
            return Err(ConfigError::invalid("timing.game_duration_secs", "must be positive"));
        }
        if t.blink_interval_ms == 0 {
            return Err(ConfigError::invalid("timing.blink_interval_ms", "must be positive"));
        }
        Ok(())
    }

    fn validate_rules(&self) -> Result<(), ConfigError> {
        if self.rules.start_attempts == 0 {
            return Err(ConfigError::invalid("rules.start_attempts", "must be positive"));
        }
        Ok(())
    }

    fn validate_ai(&self) -> Result<(), ConfigError> {
        let checks = [
            ("ai.lunge_chance", self.ai.lunge_chance),
            ("ai.idle_chance", self.ai.idle_chance),
            ("ai.chase_chance", self.ai.chase_chance),
            ("ai.referee_idle_chance", self.ai.referee_idle_chance),
        ];
        for (setting, p) in checks {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::invalid(setting, format!("{p} is not a probability")));
            }
        }
        Ok(())
    }

    fn validate_spawn(&self) -> Result<(), ConfigError> {
        let s = &self.spawn;
        if s.defenders_per_referee == 0 {
            return Err(ConfigError::invalid("spawn.defenders_per_referee", "must be positive"));
        }
        if s.max_placement_attempts == 0 {
            return Err(ConfigError::invalid("spawn.max_placement_attempts", "must be positive"));
        }
        let span = self.field.endzone_right - self.field.endzone_left;
        if s.defender_margin < 0 || 2 * s.defender_margin >= span {
            return Err(ConfigError::invalid(
                "spawn.defender_margin",
                format!("must leave at least one column of the {span}-column field"),
            ));
        }
        Ok(())
    }

    fn validate_camera(&self) -> Result<(), ConfigError> {
        let c = &self.camera;
        if c.low_threshold < 0 || c.high_threshold >= self.field.view_width {
            return Err(ConfigError::invalid(
                "camera",
                format!("dead zone must lie within 0..{}", self.field.view_width),
            ));
        }
        if c.low_threshold > c.high_threshold {
            return Err(ConfigError::invalid(
                "camera.low_threshold",
                "must not exceed camera.high_threshold",
            ));
        }
        Ok(())
    }
}
