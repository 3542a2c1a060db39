// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Touchdown: a turn-paced arcade football game on a scrolling tile grid.
//!
//! The runner starts at the home endzone and must reach the far goal line
//! while defenders close in on a fixed cadence. Stepping into a defender
//! with room behind it knocks it flat; without room it is a tackle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front ends (TUI, headless sim)    │
//! ├─────────────────────────────────────┤
//! │   Session (phases, clock, timers)   │
//! ├─────────────────────────────────────┤
//! │   Game rules (field, AI, movement)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! Everything below the front ends is deterministic: a [`Session`] built
//! from the same [`GameConfig`] and seed, fed the same inputs at the same
//! virtual times, plays out identically.

pub mod config;
pub mod error;
pub mod game;
pub mod invariants;
pub mod rng;
pub mod schedule;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

// Re-export key types at crate root for convenience
pub use game::{Coord, Direction, Field, Roster};
pub use session::{Cue, GameOverReason, Input, Phase, Scoreboard, Session};
pub use sim::{simulate, Autopilot, SimParams, SimResult};
