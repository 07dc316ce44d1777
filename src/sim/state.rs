//! Game state and core simulation types
//!
//! One `GameState` owns everything that changes while playing. Input handlers
//! in `sim::input` take it by `&mut`; render queries borrow it immutably.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{ClampEdges, Obstacles};
use super::geometry::{Rect, Transform};
use super::level::{Level, build_level};
use crate::consts::{DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::{Color, Settings};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level select menu, no level loaded
    LevelSelect,
    /// Active gameplay
    Running,
    /// Proximity sensor covered
    Paused,
    /// Exit reached, waiting for a tap
    Won,
    /// Run ended by an external signal, waiting for a tap
    Lost,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::LevelSelect => "LevelSelect",
            GamePhase::Running => "Running",
            GamePhase::Paused => "Paused",
            GamePhase::Won => "Won",
            GamePhase::Lost => "Lost",
        }
    }

    /// A level's geometry is live in this phase
    pub fn in_level(&self) -> bool {
        !matches!(self, GamePhase::LevelSelect)
    }
}

/// Avatar shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
}

/// The player's avatar.
///
/// `GameState` keeps it in design space; [`Avatar::to_screen`] gives the
/// copy handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub radius: f32,
    pub shape: Shape,
    pub color: Color,
}

impl Avatar {
    pub fn to_screen(&self, transform: &Transform) -> Avatar {
        Avatar {
            pos: transform.to_screen(self.pos),
            radius: transform.length(self.radius),
            ..*self
        }
    }
}

/// Notable things that happened since the host last drained events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelLoaded { level: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
    ShapeChanged { shape: Shape },
    ExitReached { level: u32 },
}

/// Which sensor streams the engine currently consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDemand {
    pub tilt: bool,
    /// Proximity and ambient light
    pub environment: bool,
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    /// Last valid viewport size
    pub viewport: Vec2,
    pub transform: Transform,
    /// Design-space data of the loaded level (`None` in the menu)
    pub level: Option<Level>,
    /// Screen-space walls of the loaded level, for render queries
    pub walls: Vec<Rect>,
    /// Screen-space exit zone of the loaded level
    pub exit: Option<Rect>,
    /// Design space. Collision runs here so a resize never moves it.
    pub avatar: Avatar,
    /// Tilt samples seen on the current level (drives shape cycling)
    pub frame_count: u64,
    /// Last proximity reading
    pub proximity: Option<f32>,
    /// Last ambient light reading
    pub lux: Option<f32>,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state at the level select menu, sized for the design canvas
    /// until the host reports a viewport
    pub fn new(settings: Settings) -> Self {
        let settings = settings.validated();
        let avatar = Avatar {
            pos: Vec2::from(settings.start),
            radius: settings.avatar_radius,
            shape: Shape::Circle,
            color: Color::GRAY,
        };

        Self {
            settings,
            phase: GamePhase::LevelSelect,
            viewport: Vec2::new(DESIGN_WIDTH, DESIGN_HEIGHT),
            transform: Transform::IDENTITY,
            level: None,
            walls: Vec::new(),
            exit: None,
            avatar,
            frame_count: 0,
            proximity: None,
            lux: None,
            events: Vec::new(),
        }
    }

    /// Current level index, 0 at the menu
    pub fn level_index(&self) -> u32 {
        self.level.as_ref().map_or(0, |level| level.index)
    }

    /// Switch phase, recording the change
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {} -> {}", from.as_str(), to.as_str());
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Load level `index`. 0 returns to the menu; other out-of-range
    /// indices fall back to level 1.
    pub fn load_level(&mut self, index: i32) {
        if index == 0 {
            self.return_to_menu();
            return;
        }

        let level = build_level(index);
        log::info!("Loading level {} ({})", level.index, level.name);

        self.frame_count = 0;
        self.avatar.pos = Vec2::from(self.settings.start);
        self.avatar.shape = level.shape.initial();
        self.avatar.color = level.palette.avatar;

        let index = level.index;
        self.level = Some(level);
        self.rebuild_geometry();

        self.events.push(GameEvent::LevelLoaded { level: index });
        self.set_phase(GamePhase::Running);
    }

    /// Unload the level and show the menu
    pub fn return_to_menu(&mut self) {
        self.level = None;
        self.rebuild_geometry();
        self.frame_count = 0;
        self.avatar.pos = Vec2::from(self.settings.start);
        self.avatar.shape = Shape::Circle;
        self.avatar.color = Color::GRAY;
        self.set_phase(GamePhase::LevelSelect);
    }

    /// Project the loaded level's design geometry through the current
    /// transform. Always starts from the catalog data, never from the
    /// previous screen rectangles.
    pub fn rebuild_geometry(&mut self) {
        self.walls.clear();
        self.exit = None;

        if let Some(level) = &self.level {
            let transform = self.transform;
            self.walls
                .extend(level.walls.iter().map(|w| transform.rect_to_screen(w)));
            self.exit = Some(transform.rect_to_screen(&level.exit));
        }
    }

    /// Apply a new transform. The avatar's design position is untouched.
    pub fn apply_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.rebuild_geometry();
    }

    /// Avatar projected into the viewport
    pub fn screen_avatar(&self) -> Avatar {
        self.avatar.to_screen(&self.transform)
    }

    /// Design-space obstacles of the loaded level
    pub fn obstacles(&self) -> Obstacles<'_> {
        let bounds = Rect::new(0.0, 0.0, DESIGN_WIDTH, DESIGN_HEIGHT);
        match &self.level {
            Some(level) => Obstacles {
                walls: &level.walls,
                exit: Some(level.exit),
                bounds,
                clamp: level.clamp,
            },
            None => Obstacles {
                walls: &[],
                exit: None,
                bounds,
                clamp: ClampEdges::ALL,
            },
        }
    }

    /// Backdrop color: the level's own, darkened when the room is dark
    pub fn background(&self) -> Color {
        let Some(level) = &self.level else {
            return Color::BLACK;
        };
        match self.lux {
            Some(lux) if lux < self.settings.dark_lux_threshold => self.settings.dark_background,
            _ => level.palette.background,
        }
    }

    pub fn wall_color(&self) -> Color {
        self.level
            .as_ref()
            .map_or(Color::DARK_GRAY, |level| level.palette.wall)
    }

    pub fn exit_color(&self) -> Option<Color> {
        self.level.as_ref().map(|level| level.palette.exit)
    }

    /// Sensor streams the host should keep registered
    pub fn sensor_demand(&self) -> SensorDemand {
        SensorDemand {
            tilt: self.phase == GamePhase::Running,
            environment: self.phase.in_level(),
        }
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::LEVEL_COUNT;

    #[test]
    fn test_new_state_is_menu() {
        let state = GameState::new(Settings::default());
        assert_eq!(state.phase, GamePhase::LevelSelect);
        assert_eq!(state.level_index(), 0);
        assert!(state.walls.is_empty());
        assert!(state.exit.is_none());
        assert_eq!(state.background(), Color::BLACK);
        assert_eq!(
            state.sensor_demand(),
            SensorDemand {
                tilt: false,
                environment: false
            }
        );
    }

    #[test]
    fn test_load_level_resets_avatar_and_geometry() {
        let mut state = GameState::new(Settings::default());
        state.load_level(2);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.level_index(), 2);
        assert_eq!(state.avatar.pos, Vec2::new(60.0, 60.0));
        assert_eq!(state.avatar.shape, Shape::Square);
        assert_eq!(state.avatar.color, Color::BLUE);
        assert_eq!(state.walls.len(), build_level(2).walls.len());

        // Switching levels replaces the wall set entirely
        state.avatar.pos = Vec2::new(500.0, 500.0);
        state.frame_count = 17;
        state.load_level(1);
        assert_eq!(state.walls.len(), build_level(1).walls.len());
        assert_eq!(state.avatar.pos, Vec2::new(60.0, 60.0));
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.exit, Some(build_level(1).exit));
    }

    #[test]
    fn test_load_level_zero_returns_to_menu() {
        let mut state = GameState::new(Settings::default());
        state.load_level(3);
        state.load_level(0);
        assert_eq!(state.phase, GamePhase::LevelSelect);
        assert!(state.walls.is_empty());
        assert!(state.exit.is_none());
    }

    #[test]
    fn test_invalid_index_loads_level_1() {
        let mut state = GameState::new(Settings::default());
        state.load_level(-4);
        assert_eq!(state.level_index(), 1);
        state.load_level(LEVEL_COUNT as i32 + 7);
        assert_eq!(state.level_index(), 1);
    }

    #[test]
    fn test_events_are_recorded_and_drained() {
        let mut state = GameState::new(Settings::default());
        state.load_level(1);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::LevelLoaded { level: 1 },
                GameEvent::PhaseChanged {
                    from: GamePhase::LevelSelect,
                    to: GamePhase::Running
                },
            ]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_apply_transform_rebuilds_from_design_data() {
        let mut state = GameState::new(Settings::default());
        state.load_level(1);
        state.avatar.pos = Vec2::new(200.0, 300.0);

        let half = Transform {
            scale: 0.5,
            offset: Vec2::new(10.0, 0.0),
        };
        state.apply_transform(half);
        state.apply_transform(half);
        assert_eq!(state.avatar.pos, Vec2::new(200.0, 300.0));
        let screen = state.screen_avatar();
        assert_eq!(screen.pos, Vec2::new(110.0, 150.0));
        assert_eq!(screen.radius, 15.0);
        assert_eq!(screen.color, state.avatar.color);
        assert_eq!(state.walls[0], half.rect_to_screen(&build_level(1).walls[0]));

        state.apply_transform(Transform::IDENTITY);
        assert_eq!(state.screen_avatar().pos, Vec2::new(200.0, 300.0));
        assert_eq!(state.walls, build_level(1).walls);
    }

    #[test]
    fn test_background_darkens_in_low_light() {
        let mut state = GameState::new(Settings::default());
        state.load_level(3);
        assert_eq!(state.background(), Color::rgb(0x4B0082));
        state.lux = Some(3.0);
        assert_eq!(state.background(), Color::DARK_GRAY);
        state.lux = Some(10.0);
        assert_eq!(state.background(), Color::rgb(0x4B0082));
    }
}
