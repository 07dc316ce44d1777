//! Per-frame draw snapshot
//!
//! Everything the host needs to paint one frame, in screen space. Built from
//! the game state on demand; holds no state of its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;
use crate::menu::{self, MenuButton};
use crate::sim::{Avatar, GamePhase, GameState, Rect};

/// Exit zone drawn as a rounded rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitDraw {
    pub rect: Rect,
    pub color: Color,
    pub corner_radius: f32,
}

/// Centered text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDraw {
    pub text: String,
    pub anchor: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Menu button with its label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDraw {
    pub button: MenuButton,
    pub fill: Color,
    pub stroke: Color,
    pub label_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub background: Color,
    pub walls: Vec<Rect>,
    pub wall_color: Color,
    pub exit: Option<ExitDraw>,
    /// Hidden in the menu and once the level is won
    pub avatar: Option<Avatar>,
    /// Title lines in the menu, banner while paused/won/lost
    pub text: Vec<TextDraw>,
    pub buttons: Vec<ButtonDraw>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let scale = state.transform.scale;

        let exit = match (state.exit, state.exit_color()) {
            (Some(rect), Some(color)) => Some(ExitDraw {
                rect,
                color,
                corner_radius: EXIT_CORNER_RADIUS * scale,
            }),
            _ => None,
        };

        let avatar = match state.phase {
            GamePhase::Running | GamePhase::Paused | GamePhase::Lost => Some(state.screen_avatar()),
            GamePhase::LevelSelect | GamePhase::Won => None,
        };

        let mut text = Vec::new();
        let mut buttons = Vec::new();

        if state.phase == GamePhase::LevelSelect {
            text.push(TextDraw {
                text: menu::TITLE.to_string(),
                anchor: menu::title_anchor(state.viewport),
                size: BANNER_TEXT_SIZE * scale,
                color: Color::WHITE,
            });
            text.push(TextDraw {
                text: menu::SUBTITLE.to_string(),
                anchor: menu::subtitle_anchor(state.viewport),
                size: SUBTITLE_TEXT_SIZE * scale,
                color: Color::WHITE,
            });
            buttons = menu::layout(state.viewport)
                .into_iter()
                .map(|button| ButtonDraw {
                    button,
                    fill: Color::BUTTON_FILL,
                    stroke: Color::BUTTON_STROKE,
                    label_size: BUTTON_TEXT_SIZE * scale,
                })
                .collect();
        } else if let Some((message, color)) = banner(state) {
            text.push(TextDraw {
                text: message,
                anchor: state.viewport / 2.0,
                size: BANNER_TEXT_SIZE * scale,
                color,
            });
        }

        Self {
            phase: state.phase,
            background: state.background(),
            walls: state.walls.clone(),
            wall_color: state.wall_color(),
            exit,
            avatar,
            text,
            buttons,
        }
    }

    /// Main overlay line (menu title or banner)
    pub fn overlay_message(&self) -> Option<&str> {
        self.text.first().map(|t| t.text.as_str())
    }
}

/// Banner for the paused and terminal phases
pub fn banner(state: &GameState) -> Option<(String, Color)> {
    match state.phase {
        GamePhase::Paused => Some(("PAUSED".to_string(), Color::YELLOW)),
        GamePhase::Won => Some((
            format!("YOU CLEARED LEVEL {}! Tap to continue.", state.level_index()),
            Color::GREEN,
        )),
        GamePhase::Lost => Some(("GAME OVER! Tap to restart".to_string(), Color::RED)),
        GamePhase::LevelSelect | GamePhase::Running => None,
    }
}
