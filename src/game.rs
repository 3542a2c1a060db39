//! Core rules of the gridiron.
//!
//! Everything here is a pure function of its arguments plus an explicit
//! [`GameRng`](crate::rng::GameRng); timing and phase live in
//! [`Session`](crate::session::Session).
//! - Field geometry and coordinates
//! - Runner, defender and referee state
//! - Spawning and occupancy
//! - Defender AI tick
//! - Runner movement, knockdowns and tackles
//! - Scrolling camera

mod ai;
mod camera;
mod entity;
mod field;
mod movement;
mod roster;

pub use ai::{tick, TickOutcome};
pub use camera::Camera;
pub use entity::{Behavior, Defender, Facing, Mobile, Player, Pose, Referee};
pub use field::{Coord, Direction, Field};
pub use movement::{resolve_move, MoveOutcome};
pub use roster::{Roster, SpawnReport};
