//! Rectangles and the design-space to screen-space transform
//!
//! Levels are authored on a fixed 1010x1710 canvas. The transform scales that
//! canvas uniformly to fit the viewport and centers it, letterboxing the
//! leftover axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DESIGN_HEIGHT, DESIGN_WIDTH};

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of half-size `half` around `center`
    pub fn around(center: Vec2, half: f32) -> Self {
        Self::new(
            center.x - half,
            center.y - half,
            center.x + half,
            center.y + half,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Strict overlap test. Rectangles that only share an edge don't intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Half-open containment (`left <= x < right`, `top <= y < bottom`)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

/// Uniform scale + centering offset from design space to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Viewport exactly the size of the design canvas
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Fit the design canvas into a `width` x `height` viewport.
    ///
    /// Returns `None` for empty, negative or non-finite sizes; callers keep
    /// their previous transform in that case.
    pub fn fit(width: f32, height: f32) -> Option<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return None;
        }

        let scale = (width / DESIGN_WIDTH).min(height / DESIGN_HEIGHT);
        let offset = Vec2::new(
            (width - DESIGN_WIDTH * scale) / 2.0,
            (height - DESIGN_HEIGHT * scale) / 2.0,
        );
        Some(Self { scale, offset })
    }

    #[inline]
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        p * self.scale + self.offset
    }

    /// Scale a length (radius, speed) without offsetting it
    #[inline]
    pub fn length(&self, len: f32) -> f32 {
        len * self.scale
    }

    pub fn rect_to_screen(&self, r: &Rect) -> Rect {
        let min = self.to_screen(Vec2::new(r.left, r.top));
        let max = self.to_screen(Vec2::new(r.right, r.bottom));
        Rect::new(min.x, min.y, max.x, max.y)
    }
}
