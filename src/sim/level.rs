//! Level catalog
//!
//! Every playable level is a declarative record in [`LEVELS`]. [`build_level`]
//! expands a record into owned design-space geometry (interior walls, border,
//! exit zone). Nothing else in the crate produces level data.

use serde::{Deserialize, Serialize};

use super::collision::ClampEdges;
use super::geometry::Rect;
use super::state::Shape;
use crate::Color;
use crate::consts::*;

/// Number of playable levels (indices `1..=LEVEL_COUNT`)
pub const LEVEL_COUNT: u32 = 3;

/// How the avatar's shape is chosen on a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeRule {
    /// Same shape for the whole level
    Fixed(Shape),
    /// Starts as the first shape and toggles between the two every
    /// `shape_change_interval` tilt samples
    Cycle(Shape, Shape),
}

impl ShapeRule {
    pub fn initial(&self) -> Shape {
        match *self {
            ShapeRule::Fixed(shape) | ShapeRule::Cycle(shape, _) => shape,
        }
    }

    pub fn cycles(&self) -> bool {
        matches!(self, ShapeRule::Cycle(..))
    }

    /// Shape after one toggle from `current`. Fixed rules never change.
    pub fn next(&self, current: Shape) -> Shape {
        match *self {
            ShapeRule::Fixed(shape) => shape,
            ShapeRule::Cycle(a, b) => {
                if current == a {
                    b
                } else {
                    a
                }
            }
        }
    }
}

/// Bottom edge of the outer border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BottomBorder {
    /// Solid wall across the whole width
    Closed,
    /// Split around the exit's horizontal span
    GapAtExit,
}

/// Colors for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub wall: Color,
    pub avatar: Color,
    pub exit: Color,
}

/// Static description of a level in design space
#[derive(Debug)]
pub struct LevelSpec {
    pub name: &'static str,
    /// Interior walls as `[left, top, right, bottom]`
    pub walls: &'static [[f32; 4]],
    pub exit: [f32; 4],
    pub bottom: BottomBorder,
    pub clamp: ClampEdges,
    pub palette: Palette,
    pub shape: ShapeRule,
}

/// A loaded level: fresh, owned design-space geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level index
    pub index: u32,
    pub name: String,
    /// Interior walls followed by the border
    pub walls: Vec<Rect>,
    pub exit: Rect,
    pub clamp: ClampEdges,
    pub palette: Palette,
    pub shape: ShapeRule,
}

const T: f32 = WALL_THICKNESS;

/// Exit centered in the bottom border
const BOTTOM_EXIT: [f32; 4] = [450.0, MAZE_HEIGHT, 650.0, DESIGN_HEIGHT];

const LEVEL_1_WALLS: &[[f32; 4]] = &[
    [10.0, 100.0, 300.0, 100.0 + T],
    [400.0, 100.0, 1000.0, 100.0 + T],
    [100.0, 100.0, 100.0 + T, 400.0],
    [100.0, 400.0, 500.0, 400.0 + T],
    [600.0, 400.0, 1000.0, 400.0 + T],
    [300.0, 500.0, 300.0 + T, 800.0],
    [400.0, 600.0, 900.0, 600.0 + T],
    [600.0, 200.0, 600.0 + T, 600.0],
    [10.0, 800.0, 700.0, 800.0 + T],
    [100.0, 900.0, 100.0 + T, 1400.0],
    [200.0, 1000.0, 800.0, 1000.0 + T],
    [500.0, 900.0, 500.0 + T, 1200.0],
    [10.0, 1300.0, 400.0, 1300.0 + T],
    [900.0, 1300.0, 900.0 + T, 1600.0],
];

// Four concentric rings, each open on one side, closing in on a central exit
const LEVEL_2_WALLS: &[[f32; 4]] = &[
    [100.0, 100.0, 900.0, 100.0 + T],
    [900.0 - T, 100.0 + T, 900.0, 1500.0],
    [100.0, 1500.0 - T, 900.0 - T, 1500.0],
    [100.0, 200.0, 100.0 + T, 1500.0 - T],
    [200.0, 200.0, 800.0, 200.0 + T],
    [800.0 - T, 200.0 + T, 800.0, 1400.0],
    [200.0, 1400.0 - T, 800.0 - T, 1400.0],
    [200.0, 300.0, 200.0 + T, 1400.0 - T],
    [300.0, 300.0, 700.0, 300.0 + T],
    [700.0 - T, 300.0 + T, 700.0, 1300.0],
    [300.0, 1300.0 - T, 700.0 - T, 1300.0],
    [300.0, 400.0, 300.0 + T, 1300.0 - T],
    [400.0, 400.0, 600.0, 400.0 + T],
    [600.0 - T, 400.0 + T, 600.0, 1200.0],
    [400.0, 1200.0 - T, 600.0 - T, 1200.0],
    [400.0, 500.0, 400.0 + T, 1200.0 - T],
    [500.0 - T / 2.0, 500.0, 500.0 + T / 2.0, 800.0],
    [500.0 - T / 2.0, 900.0, 500.0 + T / 2.0, 1100.0],
];

const LEVEL_3_WALLS: &[[f32; 4]] = &[
    // Row 1
    [10.0, 200.0, 300.0, 200.0 + T],
    [500.0, 200.0, 1000.0, 200.0 + T],
    [400.0, 200.0 + T, 400.0 + T, 600.0],
    // Row 2
    [100.0, 400.0, 400.0, 400.0 + T],
    [500.0, 400.0, 900.0, 400.0 + T],
    [600.0, 400.0 + T, 600.0 + T, 800.0],
    // Row 3
    [10.0, 600.0, 500.0, 600.0 + T],
    [700.0, 600.0, 1000.0, 600.0 + T],
    [200.0, 600.0 + T, 200.0 + T, 1000.0],
    // Row 4
    [300.0, 800.0, 700.0, 800.0 + T],
    [800.0, 800.0, 1000.0, 800.0 + T],
    [800.0, 800.0 + T, 800.0 + T, 1200.0],
    // Row 5
    [10.0, 1000.0, 200.0, 1000.0 + T],
    [300.0, 1000.0, 700.0, 1000.0 + T],
    [900.0, 1000.0, 1000.0, 1000.0 + T],
    [500.0, 1000.0 + T, 500.0 + T, 1400.0],
    // Row 6
    [10.0, 1400.0, 400.0, 1400.0 + T],
    [600.0, 1400.0, 1000.0, 1400.0 + T],
    // Funnel toward the exit gap
    [700.0, 1500.0, 700.0 + T, 1700.0],
    [300.0, 1500.0, 300.0 + T, 1700.0],
    [700.0 + T, 1600.0, 1000.0, 1600.0 + T],
    [10.0, 1600.0, 300.0, 1600.0 + T],
];

/// Bottom stays open on every level: with a solid bottom border it never
/// matters, and on gap levels it lets the avatar drop into the exit.
const CANONICAL_CLAMP: ClampEdges = ClampEdges {
    left: true,
    top: true,
    right: true,
    bottom: false,
};

/// The catalog, in play order
pub static LEVELS: [LevelSpec; LEVEL_COUNT as usize] = [
    LevelSpec {
        name: "Classic",
        walls: LEVEL_1_WALLS,
        exit: BOTTOM_EXIT,
        bottom: BottomBorder::Closed,
        clamp: CANONICAL_CLAMP,
        palette: Palette {
            background: Color::rgb(0xA0522D),
            wall: Color::DARK_GRAY,
            avatar: Color::RED,
            exit: Color::GREEN,
        },
        shape: ShapeRule::Fixed(Shape::Circle),
    },
    LevelSpec {
        name: "Spiral",
        walls: LEVEL_2_WALLS,
        exit: [400.0, 800.0, 600.0, 900.0],
        bottom: BottomBorder::Closed,
        // Exit is inside the maze, so every edge holds the avatar in
        clamp: ClampEdges::ALL,
        palette: Palette {
            background: Color::rgb(0x4682B4),
            wall: Color::DARK_GRAY,
            avatar: Color::BLUE,
            exit: Color::YELLOW,
        },
        shape: ShapeRule::Fixed(Shape::Square),
    },
    LevelSpec {
        name: "Shifter",
        walls: LEVEL_3_WALLS,
        exit: BOTTOM_EXIT,
        bottom: BottomBorder::GapAtExit,
        clamp: CANONICAL_CLAMP,
        palette: Palette {
            background: Color::rgb(0x4B0082),
            wall: Color::DARK_GRAY,
            avatar: Color::MAGENTA,
            exit: Color::RED,
        },
        shape: ShapeRule::Cycle(Shape::Circle, Shape::Square),
    },
];

fn rect(r: &[f32; 4]) -> Rect {
    Rect::new(r[0], r[1], r[2], r[3])
}

/// Resolve a requested index to a playable one. Anything outside
/// `1..=LEVEL_COUNT` falls back to level 1.
pub fn resolve_index(index: i32) -> u32 {
    match u32::try_from(index) {
        Ok(i) if (1..=LEVEL_COUNT).contains(&i) => i,
        _ => {
            log::warn!("Level {} does not exist, falling back to level 1", index);
            1
        }
    }
}

/// Build level `index` (1-based) in design space.
///
/// Out-of-range indices fall back to level 1. Each call returns new wall
/// storage; nothing is shared between loads.
pub fn build_level(index: i32) -> Level {
    let index = resolve_index(index);
    let spec = &LEVELS[(index - 1) as usize];
    let exit = rect(&spec.exit);

    let mut walls: Vec<Rect> = Vec::with_capacity(spec.walls.len() + 5);
    walls.extend(spec.walls.iter().map(rect));

    // Outer border: left, right, top
    walls.push(Rect::new(0.0, 0.0, BORDER_WIDTH, DESIGN_HEIGHT));
    walls.push(Rect::new(MAZE_WIDTH, 0.0, DESIGN_WIDTH, DESIGN_HEIGHT));
    walls.push(Rect::new(0.0, 0.0, DESIGN_WIDTH, BORDER_WIDTH));

    match spec.bottom {
        BottomBorder::Closed => {
            walls.push(Rect::new(0.0, MAZE_HEIGHT, DESIGN_WIDTH, DESIGN_HEIGHT));
        }
        BottomBorder::GapAtExit => {
            walls.push(Rect::new(0.0, MAZE_HEIGHT, exit.left, DESIGN_HEIGHT));
            walls.push(Rect::new(exit.right, MAZE_HEIGHT, DESIGN_WIDTH, DESIGN_HEIGHT));
        }
    }

    Level {
        index,
        name: spec.name.to_string(),
        walls,
        exit,
        clamp: spec.clamp,
        palette: spec.palette,
        shape: spec.shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_build_is_deterministic_and_unaliased() {
        let a = build_level(1);
        let mut b = build_level(1);
        assert_eq!(a, b);

        b.walls.clear();
        assert!(!a.walls.is_empty());
        assert_eq!(build_level(1).walls.len(), a.walls.len());
    }

    #[test]
    fn test_out_of_range_falls_back_to_level_1() {
        let first = build_level(1);
        for index in [-3, 0, LEVEL_COUNT as i32 + 1, i32::MAX] {
            assert_eq!(build_level(index), first);
        }
    }

    #[test]
    fn test_level_palettes_and_shapes() {
        let l1 = build_level(1);
        assert_eq!(l1.palette.background, Color::rgb(0xA0522D));
        assert_eq!(l1.shape, ShapeRule::Fixed(Shape::Circle));

        let l2 = build_level(2);
        assert_eq!(l2.palette.avatar, Color::BLUE);
        assert_eq!(l2.shape.initial(), Shape::Square);

        let l3 = build_level(3);
        assert!(l3.shape.cycles());
        assert_eq!(l3.shape.initial(), Shape::Circle);
        assert!(!l1.shape.cycles());
    }

    #[test]
    fn test_shape_rule_next() {
        let cycle = ShapeRule::Cycle(Shape::Circle, Shape::Square);
        assert_eq!(cycle.next(Shape::Circle), Shape::Square);
        assert_eq!(cycle.next(Shape::Square), Shape::Circle);
        // A shape outside the pair snaps back to the first member
        assert_eq!(cycle.next(Shape::Triangle), Shape::Circle);

        let fixed = ShapeRule::Fixed(Shape::Triangle);
        assert_eq!(fixed.next(Shape::Circle), Shape::Triangle);
    }

    #[test]
    fn test_gap_border_is_aligned_with_exit() {
        let level = build_level(3);
        let bottom: Vec<&Rect> = level
            .walls
            .iter()
            .filter(|w| w.top == MAZE_HEIGHT)
            .collect();
        assert_eq!(bottom.len(), 2);
        assert!(bottom.iter().any(|w| w.right == level.exit.left));
        assert!(bottom.iter().any(|w| w.left == level.exit.right));
        assert!(bottom.iter().all(|w| !w.intersects(&level.exit)));
    }

    #[test]
    fn test_closed_border_levels() {
        for index in [1, 2] {
            let level = build_level(index);
            assert!(level.walls.contains(&Rect::new(
                0.0,
                MAZE_HEIGHT,
                DESIGN_WIDTH,
                DESIGN_HEIGHT
            )));
        }
    }

    #[test]
    fn test_central_exit_on_level_2() {
        let level = build_level(2);
        let center = level.exit.center();
        assert!(center.y < MAZE_HEIGHT / 2.0 + 100.0);
        assert!((center.x - MAZE_WIDTH / 2.0).abs() < 1.0);
    }

    #[test]
    fn test_start_position_is_clear_on_every_level() {
        let start = Vec2::new(START_X, START_Y);
        let bounds = Rect::around(start, AVATAR_RADIUS);
        for index in 1..=LEVEL_COUNT as i32 {
            let level = build_level(index);
            assert!(
                level.walls.iter().all(|w| !w.intersects(&bounds)),
                "start overlaps a wall on level {}",
                index
            );
            assert!(!level.exit.intersects(&bounds));
        }
    }

    #[test]
    fn test_walls_are_well_formed() {
        for index in 1..=LEVEL_COUNT as i32 {
            for wall in build_level(index).walls {
                assert!(wall.width() > 0.0 && wall.height() > 0.0);
                assert!(wall.right <= DESIGN_WIDTH && wall.bottom <= DESIGN_HEIGHT);
                // No-tunneling guarantee relies on this
                assert!(wall.width().min(wall.height()) >= BORDER_WIDTH);
            }
        }
    }
}
