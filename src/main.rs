//! Gravity Run entry point
//!
//! The engine is embedded by a host that owns sensors and the drawing
//! surface. Natively this runs a short scripted session and logs each step,
//! which is handy for checking tuning changes. Put a settings JSON string in
//! `GRAVITY_RUN_SETTINGS` to try different values.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::{Vec2, Vec3};
    use gravity_run::Engine;
    use gravity_run::sim::InputEvent;

    env_logger::init();
    log::info!("Gravity Run (native) starting...");

    let settings = load_settings();
    log::info!(
        "Tap after final level: {}, after loss: {}",
        settings.after_final_level.as_str(),
        settings.after_loss.as_str()
    );
    let mut engine = Engine::new(settings);

    let width = 720.0;
    let height = 1280.0;
    let button = gravity_run::menu::layout(Vec2::new(width, height))
        .first()
        .map(|b| b.rect.center())
        .unwrap_or_default();

    let mut script = vec![
        InputEvent::Resize { width, height },
        InputEvent::Tap(button),
    ];
    // Roll right, then tip forward
    script.extend(std::iter::repeat_n(InputEvent::Tilt(Vec3::new(-4.0, 0.0, 9.8)), 40));
    script.extend(std::iter::repeat_n(InputEvent::Tilt(Vec3::new(0.0, 4.0, 9.8)), 40));
    script.extend([
        InputEvent::Proximity {
            distance: 0.0,
            max_range: 5.0,
        },
        InputEvent::Tilt(Vec3::new(-4.0, 4.0, 9.8)),
        InputEvent::Proximity {
            distance: 5.0,
            max_range: 5.0,
        },
        InputEvent::Light { lux: 2.0 },
        InputEvent::Lose,
        InputEvent::Tap(Vec2::ZERO),
    ]);

    for event in &script {
        engine.handle(event);
        for e in engine.drain_events() {
            log::info!("{:?}", e);
        }
    }

    let frame = engine.frame();
    let vertices = engine.vertices();
    log::info!(
        "Finished in {} on level {}: avatar at ({:.1}, {:.1}), {} walls, {} vertices ({} bytes), overlay {:?}",
        engine.current_state().as_str(),
        engine.current_level_index(),
        engine.current_avatar().pos.x,
        engine.current_avatar().pos.y,
        frame.walls.len(),
        vertices.len(),
        gravity_run::renderer::vertex::as_bytes(&vertices).len(),
        frame.overlay_message(),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> gravity_run::Settings {
    let Ok(json) = std::env::var("GRAVITY_RUN_SETTINGS") else {
        return gravity_run::Settings::default();
    };
    match gravity_run::Settings::from_json(&json) {
        Ok(settings) => {
            log::info!("Loaded settings from GRAVITY_RUN_SETTINGS");
            settings
        }
        Err(e) => {
            log::warn!("Invalid GRAVITY_RUN_SETTINGS, using defaults: {}", e);
            gravity_run::Settings::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts drive the library directly on wasm
}
