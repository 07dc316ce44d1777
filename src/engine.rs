//! Host-facing engine facade
//!
//! Wraps a [`GameState`] and exposes the inbound sample handlers and the
//! per-frame queries under one type. Single-threaded: the host delivers
//! samples one at a time from its own dispatch thread.

use glam::{Vec2, Vec3};

use crate::Color;
use crate::Settings;
use crate::renderer::{Frame, Vertex, shapes};
use crate::sim::{
    Avatar, GameEvent, GamePhase, GameState, InputEvent, Rect, SensorDemand, Transform, input,
};

#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Inbound ===

    pub fn on_viewport_resized(&mut self, width: f32, height: f32) {
        input::resize(&mut self.state, width, height);
    }

    pub fn on_tilt_sample(&mut self, ax: f32, ay: f32, az: f32) {
        input::tilt(&mut self.state, Vec3::new(ax, ay, az));
    }

    pub fn on_proximity_sample(&mut self, distance: f32, max_range: f32) {
        input::proximity(&mut self.state, distance, max_range);
    }

    pub fn on_light_sample(&mut self, lux: f32) {
        input::light(&mut self.state, lux);
    }

    pub fn on_tap(&mut self, x: f32, y: f32) {
        input::tap(&mut self.state, Vec2::new(x, y));
    }

    pub fn load_level(&mut self, index: i32) {
        self.state.load_level(index);
    }

    pub fn return_to_menu(&mut self) {
        self.state.return_to_menu();
    }

    /// External loss signal (timer, hazard)
    pub fn signal_lost(&mut self) {
        input::lose(&mut self.state);
    }

    /// Dispatch a recorded or scripted event
    pub fn handle(&mut self, event: &InputEvent) {
        input::apply(&mut self.state, event);
    }

    // === Outbound ===

    pub fn current_walls(&self) -> &[Rect] {
        &self.state.walls
    }

    pub fn current_exit_zone(&self) -> Option<Rect> {
        self.state.exit
    }

    /// Avatar in screen space
    pub fn current_avatar(&self) -> Avatar {
        self.state.screen_avatar()
    }

    pub fn current_background_color(&self) -> Color {
        self.state.background()
    }

    pub fn current_overlay_message(&self) -> Option<String> {
        self.frame().overlay_message().map(str::to_string)
    }

    pub fn current_state(&self) -> GamePhase {
        self.state.phase
    }

    /// 0 while in the level select menu
    pub fn current_level_index(&self) -> u32 {
        self.state.level_index()
    }

    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    pub fn sensor_demand(&self) -> SensorDemand {
        self.state.sensor_demand()
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    /// Triangle list for the current frame
    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::frame(&self.frame())
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
