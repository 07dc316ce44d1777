//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by host samples (no clocks, no randomness)
//! - Level data comes from the catalog only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod level;
pub mod state;

pub use collision::{ClampEdges, MoveResult, Obstacles, resolve_move};
pub use geometry::{Rect, Transform};
pub use input::{InputEvent, apply};
pub use level::{LEVEL_COUNT, Level, ShapeRule, build_level};
pub use state::{Avatar, GameEvent, GamePhase, GameState, SensorDemand, Shape};
