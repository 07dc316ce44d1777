//! Level select menu layout
//!
//! Buttons are laid out against the raw viewport (not the maze transform) so
//! the menu always fills the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;
use crate::sim::level::LEVEL_COUNT;

pub const TITLE: &str = "GRAVITY RUN";
pub const SUBTITLE: &str = "Choose your level";

/// A level select button in screen space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuButton {
    /// Level loaded when tapped
    pub level: i32,
    pub rect: Rect,
    pub label: String,
}

/// Buttons stacked down the middle of the viewport, one per level
pub fn layout(viewport: Vec2) -> Vec<MenuButton> {
    let button_height = viewport.y / 6.0;
    let button_width = viewport.x * 0.7;
    let margin = viewport.y / 15.0;
    let start_y = viewport.y / 3.0;
    let left = (viewport.x - button_width) / 2.0;

    (0..LEVEL_COUNT as i32)
        .map(|i| {
            let top = start_y + i as f32 * (button_height + margin);
            MenuButton {
                level: i + 1,
                rect: Rect::new(left, top, left + button_width, top + button_height),
                label: format!("LEVEL {}", i + 1),
            }
        })
        .collect()
}

/// Level whose button contains `point`, if any
pub fn hit_test(viewport: Vec2, point: Vec2) -> Option<i32> {
    layout(viewport)
        .into_iter()
        .find(|button| button.rect.contains(point))
        .map(|button| button.level)
}

/// Title anchor
pub fn title_anchor(viewport: Vec2) -> Vec2 {
    Vec2::new(viewport.x / 2.0, viewport.y / 7.0)
}

/// Subtitle anchor
pub fn subtitle_anchor(viewport: Vec2) -> Vec2 {
    Vec2::new(viewport.x / 2.0, viewport.y / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: Vec2 = Vec2::new(1080.0, 1920.0);

    #[test]
    fn test_layout_matches_viewport() {
        let buttons = layout(PHONE);
        assert_eq!(buttons.len(), LEVEL_COUNT as usize);

        let first = &buttons[0];
        assert_eq!(first.level, 1);
        assert_eq!(first.label, "LEVEL 1");
        assert!((first.rect.top - 640.0).abs() < 1e-3);
        assert!((first.rect.height() - 320.0).abs() < 1e-3);
        assert!((first.rect.width() - 756.0).abs() < 1e-3);
        assert!((first.rect.left - 162.0).abs() < 1e-3);

        // Stacked with a margin of h/15 between buttons
        let gap = buttons[1].rect.top - buttons[0].rect.bottom;
        assert!((gap - 128.0).abs() < 1e-3);

        // Everything stays on screen
        assert!(buttons.iter().all(|b| b.rect.bottom <= PHONE.y));
    }

    #[test]
    fn test_hit_test() {
        for button in layout(PHONE) {
            assert_eq!(hit_test(PHONE, button.rect.center()), Some(button.level));
            assert_eq!(
                hit_test(PHONE, Vec2::new(button.rect.left, button.rect.top)),
                Some(button.level)
            );
            // Right and bottom edges are exclusive
            assert_ne!(
                hit_test(PHONE, Vec2::new(button.rect.right, button.rect.center().y)),
                Some(button.level)
            );
        }
        assert_eq!(hit_test(PHONE, Vec2::new(10.0, 10.0)), None);
        assert_eq!(hit_test(PHONE, Vec2::new(540.0, 1000.0)), None);
    }
}
