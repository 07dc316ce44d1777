//! Render-facing query layer
//!
//! The host owns the drawing surface. This module only describes what to
//! draw: a [`Frame`] snapshot, and optionally a flat triangle list for hosts
//! that upload vertex buffers directly.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{ButtonDraw, ExitDraw, Frame, TextDraw};
pub use vertex::Vertex;
