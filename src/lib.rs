//! Gravity Run - a tilt-controlled maze game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, levels, collisions, game state, input mapping)
//! - `menu`: Level select layout and hit testing
//! - `renderer`: Per-frame draw snapshot and vertex generation for the host
//! - `settings`: Data-driven gameplay tuning
//! - `engine`: Host-facing facade over all of the above

pub mod color;
pub mod engine;
pub mod menu;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use engine::Engine;
pub use settings::{SessionEnd, Settings};

/// Game configuration constants (design space units unless noted)
pub mod consts {
    /// Maze body width (without the right border)
    pub const MAZE_WIDTH: f32 = 1000.0;
    /// Maze body height (without the bottom border)
    pub const MAZE_HEIGHT: f32 = 1700.0;
    /// Outer border thickness
    pub const BORDER_WIDTH: f32 = 10.0;

    /// Full authoring canvas. Every level is laid out in this space.
    pub const DESIGN_WIDTH: f32 = MAZE_WIDTH + BORDER_WIDTH;
    pub const DESIGN_HEIGHT: f32 = MAZE_HEIGHT + BORDER_WIDTH;

    /// Thickness of interior maze walls
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Avatar defaults
    pub const START_X: f32 = 60.0;
    pub const START_Y: f32 = 60.0;
    pub const AVATAR_RADIUS: f32 = 30.0;
    /// Displacement per unit of tilt per sample
    pub const MOVEMENT_SPEED: f32 = 2.5;
    /// Per-axis cap on one sample's displacement, reached only past 2g of tilt.
    /// A sample crosses a wall only by moving at least the wall's thickness plus
    /// the avatar's width, and the thinnest wall is `BORDER_WIDTH`.
    pub const MAX_STEP: f32 = 50.0;

    /// Tilt samples between shape toggles on cycling levels
    pub const SHAPE_CHANGE_INTERVAL: u64 = 30;

    /// Ambient light (lux) below which the backdrop darkens
    pub const DARK_LUX_THRESHOLD: f32 = 10.0;

    /// Text sizes for overlays
    pub const BANNER_TEXT_SIZE: f32 = 60.0;
    pub const SUBTITLE_TEXT_SIZE: f32 = 40.0;
    pub const BUTTON_TEXT_SIZE: f32 = 50.0;

    /// Exit zone corner rounding
    pub const EXIT_CORNER_RADIUS: f32 = 10.0;

    /// Square avatar side relative to the radius
    pub const SQUARE_SIZE_FACTOR: f32 = 1.5;
}
