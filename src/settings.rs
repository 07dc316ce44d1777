//! Gameplay tuning
//!
//! Defaults reproduce the canonical game. Hosts may embed overrides as JSON;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;

/// What a tap does once a session has ended (final level won, or run lost)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionEnd {
    /// Back to the level select menu
    #[default]
    Menu,
    /// Straight into level 1
    RestartFirst,
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEnd::Menu => "Menu",
            SessionEnd::RestartFirst => "RestartFirst",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Avatar ===
    /// Displacement per unit of tilt per sample (design units)
    pub movement_speed: f32,
    /// Avatar radius (design units)
    pub avatar_radius: f32,
    /// Start position (design units)
    pub start: [f32; 2],
    /// Cap on each axis of a sample's displacement (design units)
    pub max_step: f32,
    /// Tilt samples between shape toggles on cycling levels
    pub shape_change_interval: u64,

    // === Environment ===
    /// Lux below which the backdrop switches to `dark_background`
    pub dark_lux_threshold: f32,
    pub dark_background: Color,

    // === Progression ===
    /// Winning a level (tap) continues with the next one
    pub advance_on_win: bool,
    /// Tap after clearing the last level
    pub after_final_level: SessionEnd,
    /// Tap after a loss
    pub after_loss: SessionEnd,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            movement_speed: MOVEMENT_SPEED,
            avatar_radius: AVATAR_RADIUS,
            start: [START_X, START_Y],
            max_step: MAX_STEP,
            shape_change_interval: SHAPE_CHANGE_INTERVAL,

            dark_lux_threshold: DARK_LUX_THRESHOLD,
            dark_background: Color::DARK_GRAY,

            advance_on_win: true,
            after_final_level: SessionEnd::Menu,
            after_loss: SessionEnd::Menu,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields are defaulted.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values the simulation can't work with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(self.movement_speed.is_finite() && self.movement_speed >= 0.0) {
            log::warn!("Invalid movement_speed {}, using default", self.movement_speed);
            self.movement_speed = defaults.movement_speed;
        }
        if !(self.avatar_radius.is_finite() && self.avatar_radius > 0.0) {
            log::warn!("Invalid avatar_radius {}, using default", self.avatar_radius);
            self.avatar_radius = defaults.avatar_radius;
        }
        if !self.start.iter().all(|v| v.is_finite()) {
            log::warn!("Invalid start {:?}, using default", self.start);
            self.start = defaults.start;
        }
        // A step this long can jump the avatar clean over the thinnest wall
        let tunnel_limit = BORDER_WIDTH + 2.0 * self.avatar_radius;
        if !(self.max_step.is_finite() && self.max_step > 0.0 && self.max_step < tunnel_limit) {
            log::warn!("Invalid max_step {}, using default", self.max_step);
            self.max_step = if defaults.max_step < tunnel_limit {
                defaults.max_step
            } else {
                tunnel_limit / 2.0
            };
        }
        if self.shape_change_interval == 0 {
            log::warn!("shape_change_interval must be positive, using default");
            self.shape_change_interval = defaults.shape_change_interval;
        }
        if !self.dark_lux_threshold.is_finite() {
            log::warn!("Invalid dark_lux_threshold, using default");
            self.dark_lux_threshold = defaults.dark_lux_threshold;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "movement_speed": 4.0 }"#).unwrap();
        assert_eq!(settings.movement_speed, 4.0);
        assert_eq!(settings.shape_change_interval, SHAPE_CHANGE_INTERVAL);
        assert_eq!(settings.after_loss, SessionEnd::Menu);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.after_final_level = SessionEnd::RestartFirst;
        settings.dark_background = Color::rgb(0x101010);

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ movement_speed: ").is_err());
        assert!(Settings::from_json(r#"{ "advance_on_win": "yes" }"#).is_err());
    }

    #[test]
    fn test_validated_repairs_bad_values() {
        let settings = Settings {
            movement_speed: f32::NAN,
            avatar_radius: -1.0,
            max_step: 500.0,
            shape_change_interval: 0,
            ..Default::default()
        }
        .validated();

        let defaults = Settings::default();
        assert_eq!(settings.movement_speed, defaults.movement_speed);
        assert_eq!(settings.avatar_radius, defaults.avatar_radius);
        assert_eq!(settings.max_step, defaults.max_step);
        assert_eq!(settings.shape_change_interval, defaults.shape_change_interval);
    }

    #[test]
    fn test_max_step_stays_below_tunnel_limit() {
        let settings = Settings {
            avatar_radius: 5.0,
            max_step: 40.0,
            ..Default::default()
        }
        .validated();
        assert!(settings.max_step < BORDER_WIDTH + 2.0 * settings.avatar_radius);

        let defaults = Settings::default();
        assert!(defaults.max_step < BORDER_WIDTH + 2.0 * defaults.avatar_radius);
    }
}
