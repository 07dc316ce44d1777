//! Collision detection and response for the avatar
//!
//! The avatar collides as its bounding box. A blocked move is split into an
//! X-only and a Y-only attempt so the avatar slides along walls instead of
//! sticking to them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Which edges of the maze bounds hold the avatar in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampEdges {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl ClampEdges {
    pub const ALL: ClampEdges = ClampEdges {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };
    pub const NONE: ClampEdges = ClampEdges {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };
}

/// Everything the avatar can run into, in design space
#[derive(Debug, Clone, Copy)]
pub struct Obstacles<'a> {
    pub walls: &'a [Rect],
    pub exit: Option<Rect>,
    /// Outer maze bounds for clamping
    pub bounds: Rect,
    pub clamp: ClampEdges,
}

/// Outcome of a single move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Position after sliding and clamping. Unchanged when the exit was reached.
    pub pos: Vec2,
    pub reached_exit: bool,
}

/// Bounding box of an avatar centered at `center`
#[inline]
pub fn avatar_bounds(center: Vec2, radius: f32) -> Rect {
    Rect::around(center, radius)
}

/// True if the avatar at `center` overlaps any wall
pub fn hits_any_wall(center: Vec2, radius: f32, walls: &[Rect]) -> bool {
    let bounds = avatar_bounds(center, radius);
    walls.iter().any(|wall| wall.intersects(&bounds))
}

/// True if the avatar at `center` overlaps the exit zone
pub fn reaches_exit(center: Vec2, radius: f32, exit: Option<&Rect>) -> bool {
    exit.is_some_and(|exit| exit.intersects(&avatar_bounds(center, radius)))
}

/// Move the avatar by `delta`.
///
/// The exit is checked before walls, so a candidate touching both wins the
/// level. Otherwise a colliding move is retried per axis: X first, then Y
/// using the already-updated X.
pub fn resolve_move(obstacles: &Obstacles<'_>, pos: Vec2, radius: f32, delta: Vec2) -> MoveResult {
    let next = pos + delta;

    if reaches_exit(next, radius, obstacles.exit.as_ref()) {
        return MoveResult {
            pos,
            reached_exit: true,
        };
    }

    let mut resolved = pos;
    if hits_any_wall(next, radius, obstacles.walls) {
        if !hits_any_wall(Vec2::new(next.x, resolved.y), radius, obstacles.walls) {
            resolved.x = next.x;
        }
        if !hits_any_wall(Vec2::new(resolved.x, next.y), radius, obstacles.walls) {
            resolved.y = next.y;
        }
    } else {
        resolved = next;
    }

    MoveResult {
        pos: clamp_to_bounds(resolved, radius, &obstacles.bounds, obstacles.clamp),
        reached_exit: false,
    }
}

/// Keep the avatar's bounding box inside `bounds` on the enabled edges
pub fn clamp_to_bounds(pos: Vec2, radius: f32, bounds: &Rect, edges: ClampEdges) -> Vec2 {
    let mut pos = pos;
    if edges.left && pos.x < bounds.left + radius {
        pos.x = bounds.left + radius;
    }
    if edges.right && pos.x > bounds.right - radius {
        pos.x = bounds.right - radius;
    }
    if edges.top && pos.y < bounds.top + radius {
        pos.y = bounds.top + radius;
    }
    if edges.bottom && pos.y > bounds.bottom - radius {
        pos.y = bounds.bottom - radius;
    }
    pos
}
