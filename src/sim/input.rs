//! Sample-driven input mapping
//!
//! The host delivers tilt, proximity and light samples plus taps, one at a
//! time. Each handler mutates the state in place and returns immediately.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::resolve_move;
use super::geometry::Transform;
use super::level::LEVEL_COUNT;
use super::state::{GameEvent, GamePhase, GameState};
use crate::menu;
use crate::{SessionEnd, Settings};

/// One inbound event from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Resize { width: f32, height: f32 },
    /// Accelerometer reading (ax, ay, az)
    Tilt(Vec3),
    Proximity { distance: f32, max_range: f32 },
    Light { lux: f32 },
    Tap(Vec2),
    LoadLevel(i32),
    ReturnToMenu,
    /// External loss signal (timer, hazard)
    Lose,
}

/// Dispatch a single event
pub fn apply(state: &mut GameState, event: &InputEvent) {
    match *event {
        InputEvent::Resize { width, height } => resize(state, width, height),
        InputEvent::Tilt(accel) => tilt(state, accel),
        InputEvent::Proximity {
            distance,
            max_range,
        } => proximity(state, distance, max_range),
        InputEvent::Light { lux } => light(state, lux),
        InputEvent::Tap(point) => tap(state, point),
        InputEvent::LoadLevel(index) => state.load_level(index),
        InputEvent::ReturnToMenu => state.return_to_menu(),
        InputEvent::Lose => lose(state),
    }
}

/// Viewport size changed. Degenerate sizes keep the previous transform.
pub fn resize(state: &mut GameState, width: f32, height: f32) {
    let Some(transform) = Transform::fit(width, height) else {
        log::warn!("Ignoring degenerate viewport {}x{}", width, height);
        return;
    };

    state.viewport = Vec2::new(width, height);
    if transform == state.transform {
        return;
    }
    log::debug!(
        "Viewport {}x{}: scale {:.3}, offset ({:.1}, {:.1})",
        width,
        height,
        transform.scale,
        transform.offset.x,
        transform.offset.y
    );
    state.apply_transform(transform);
}

/// Accelerometer sample. Only moves the avatar while running.
pub fn tilt(state: &mut GameState, accel: Vec3) {
    if state.phase != GamePhase::Running {
        return;
    }
    if !accel.is_finite() {
        log::warn!("Ignoring non-finite tilt sample {:?}", accel);
        return;
    }
    let Some(rule) = state.level.as_ref().map(|level| level.shape) else {
        return;
    };

    // Device X is mirrored on screen, Y is not
    let delta = step_for(&state.settings, accel);

    if rule.cycles() {
        state.frame_count += 1;
        let interval = state.settings.shape_change_interval.max(1);
        if state.frame_count % interval == 0 {
            let shape = rule.next(state.avatar.shape);
            log::debug!("Shape -> {:?} after {} samples", shape, state.frame_count);
            state.avatar.shape = shape;
            state.events.push(GameEvent::ShapeChanged { shape });
        }
    }

    let result = resolve_move(
        &state.obstacles(),
        state.avatar.pos,
        state.avatar.radius,
        delta,
    );

    if result.reached_exit {
        let level = state.level_index();
        log::info!("Exit reached on level {}", level);
        state.events.push(GameEvent::ExitReached { level });
        state.set_phase(GamePhase::Won);
    } else {
        state.avatar.pos = result.pos;
    }
}

/// Design-space displacement for one accelerometer sample
pub fn step_for(settings: &Settings, accel: Vec3) -> Vec2 {
    let cap = settings.max_step;
    let delta = Vec2::new(-accel.x, accel.y) * settings.movement_speed;
    delta.clamp(Vec2::splat(-cap), Vec2::splat(cap))
}

/// Proximity sample. Covering the sensor pauses, uncovering resumes.
/// Recorded in every phase; only Running and Paused react.
pub fn proximity(state: &mut GameState, distance: f32, max_range: f32) {
    if distance.is_nan() || max_range.is_nan() {
        log::warn!("Ignoring NaN proximity sample");
        return;
    }
    state.proximity = Some(distance);

    let covered = distance < max_range;
    match (state.phase, covered) {
        (GamePhase::Running, true) => state.set_phase(GamePhase::Paused),
        (GamePhase::Paused, false) => state.set_phase(GamePhase::Running),
        _ => {}
    }
}

/// Ambient light sample. Only affects the backdrop color.
pub fn light(state: &mut GameState, lux: f32) {
    if lux.is_nan() {
        log::warn!("Ignoring NaN light sample");
        return;
    }
    state.lux = Some(lux);
}

/// Tap at a screen point
pub fn tap(state: &mut GameState, point: Vec2) {
    match state.phase {
        GamePhase::LevelSelect => match menu::hit_test(state.viewport, point) {
            Some(level) => state.load_level(level),
            None => log::debug!("Tap at ({}, {}) missed every button", point.x, point.y),
        },
        GamePhase::Won => {
            let current = state.level_index();
            if state.settings.advance_on_win && current < LEVEL_COUNT {
                state.load_level(current as i32 + 1);
            } else {
                end_session(state, state.settings.after_final_level);
            }
        }
        GamePhase::Lost => end_session(state, state.settings.after_loss),
        GamePhase::Running | GamePhase::Paused => {}
    }
}

/// External loss signal. Only a running game can be lost.
pub fn lose(state: &mut GameState) {
    if state.phase == GamePhase::Running {
        state.set_phase(GamePhase::Lost);
    } else {
        log::debug!("Lose signal ignored in {}", state.phase.as_str());
    }
}

fn end_session(state: &mut GameState, policy: SessionEnd) {
    match policy {
        SessionEnd::Menu => state.return_to_menu(),
        SessionEnd::RestartFirst => state.load_level(1),
    }
}
