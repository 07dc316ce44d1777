//! RGBA colors used by levels, overlays and the menu

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x000000);
    pub const WHITE: Color = Color::rgb(0xFFFFFF);
    pub const GRAY: Color = Color::rgb(0x888888);
    pub const DARK_GRAY: Color = Color::rgb(0x444444);
    pub const RED: Color = Color::rgb(0xFF0000);
    pub const GREEN: Color = Color::rgb(0x00FF00);
    pub const BLUE: Color = Color::rgb(0x0000FF);
    pub const YELLOW: Color = Color::rgb(0xFFFF00);
    pub const MAGENTA: Color = Color::rgb(0xFF00FF);

    /// Menu button fill and outline
    pub const BUTTON_FILL: Color = Color::rgb(0x282828);
    pub const BUTTON_STROKE: Color = Color::rgb(0x444444);

    /// Opaque color from a packed `0xRRGGBB` value
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 0xFF,
        }
    }

    /// Normalized `[r, g, b, a]` for vertex buffers
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}
