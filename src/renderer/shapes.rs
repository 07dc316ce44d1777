//! Shape generation for 2D primitives
//!
//! Turns a [`Frame`] into a flat triangle list. Text is left to the host.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::frame::Frame;
use super::vertex::Vertex;
use crate::consts::SQUARE_SIZE_FACTOR;
use crate::sim::{Avatar, Rect, Shape};

/// Segments for full circles
const CIRCLE_SEGMENTS: u32 = 32;
/// Segments per rounded corner
const CORNER_SEGMENTS: u32 = 6;
/// Menu button outline width
const BUTTON_STROKE_WIDTH: f32 = 5.0;

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(r.left, r.top, color),
        Vertex::new(r.right, r.top, color),
        Vertex::new(r.left, r.bottom, color),
        Vertex::new(r.left, r.bottom, color),
        Vertex::new(r.right, r.top, color),
        Vertex::new(r.right, r.bottom, color),
    ]
}

/// Rectangle outline of the given stroke width, drawn inside `r`
pub fn rect_outline(r: &Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(r.width() / 2.0).min(r.height() / 2.0);
    let edges = [
        Rect::new(r.left, r.top, r.right, r.top + w),
        Rect::new(r.left, r.bottom - w, r.right, r.bottom),
        Rect::new(r.left, r.top + w, r.left + w, r.bottom - w),
        Rect::new(r.right - w, r.top + w, r.right, r.bottom - w),
    ];
    edges.iter().flat_map(|edge| rect(edge, color)).collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Rectangle with rounded corners (cross of two rects plus four quarter fans)
pub fn rounded_rect(r: &Rect, corner: f32, color: [f32; 4]) -> Vec<Vertex> {
    let c = corner.max(0.0).min(r.width() / 2.0).min(r.height() / 2.0);
    if c <= 0.0 {
        return rect(r, color);
    }

    let mut vertices = rect(&Rect::new(r.left + c, r.top, r.right - c, r.bottom), color);
    vertices.extend(rect(&Rect::new(r.left, r.top + c, r.left + c, r.bottom - c), color));
    vertices.extend(rect(&Rect::new(r.right - c, r.top + c, r.right, r.bottom - c), color));

    // Corner centers with the angle each quarter starts at (y grows downward)
    let corners = [
        (Vec2::new(r.right - c, r.bottom - c), 0.0),
        (Vec2::new(r.left + c, r.bottom - c), FRAC_PI_2),
        (Vec2::new(r.left + c, r.top + c), PI),
        (Vec2::new(r.right - c, r.top + c), PI + FRAC_PI_2),
    ];
    for (center, start) in corners {
        for i in 0..CORNER_SEGMENTS {
            let a1 = start + (i as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            let a2 = start + ((i + 1) as f32 / CORNER_SEGMENTS as f32) * FRAC_PI_2;
            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(center.x + c * a1.cos(), center.y + c * a1.sin(), color));
            vertices.push(Vertex::new(center.x + c * a2.cos(), center.y + c * a2.sin(), color));
        }
    }

    vertices
}

/// Equilateral triangle inscribed in the avatar circle, apex up
pub fn triangle(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half_base = radius * 3.0f32.sqrt() / 2.0;
    vec![
        Vertex::new(center.x, center.y - radius, color),
        Vertex::new(center.x - half_base, center.y + radius / 2.0, color),
        Vertex::new(center.x + half_base, center.y + radius / 2.0, color),
    ]
}

/// The avatar in its current shape
pub fn avatar(avatar: &Avatar) -> Vec<Vertex> {
    let color = avatar.color.to_f32_array();
    match avatar.shape {
        Shape::Circle => circle(avatar.pos, avatar.radius, color, CIRCLE_SEGMENTS),
        Shape::Square => {
            let half = avatar.radius * SQUARE_SIZE_FACTOR / 2.0;
            rect(&Rect::around(avatar.pos, half), color)
        }
        Shape::Triangle => triangle(avatar.pos, avatar.radius, color),
    }
}

/// Whole frame, back to front: walls, exit, menu buttons, avatar
pub fn frame(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let wall_color = frame.wall_color.to_f32_array();
    for wall in &frame.walls {
        vertices.extend(rect(wall, wall_color));
    }

    if let Some(exit) = &frame.exit {
        vertices.extend(rounded_rect(
            &exit.rect,
            exit.corner_radius,
            exit.color.to_f32_array(),
        ));
    }

    for button in &frame.buttons {
        vertices.extend(rounded_rect(
            &button.button.rect,
            20.0,
            button.fill.to_f32_array(),
        ));
        vertices.extend(rect_outline(
            &button.button.rect,
            BUTTON_STROKE_WIDTH,
            button.stroke.to_f32_array(),
        ));
    }

    if let Some(a) = &frame.avatar {
        vertices.extend(avatar(a));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Frame;
    use crate::sim::GameState;
    use crate::{Color, Settings};

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn bounds(vertices: &[Vertex]) -> Rect {
        vertices.iter().fold(
            Rect::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |b, v| {
                Rect::new(
                    b.left.min(v.position[0]),
                    b.top.min(v.position[1]),
                    b.right.max(v.position[0]),
                    b.bottom.max(v.position[1]),
                )
            },
        )
    }

    fn avatar_with(shape: Shape) -> Avatar {
        Avatar {
            pos: Vec2::new(100.0, 100.0),
            radius: 30.0,
            shape,
            color: Color::RED,
        }
    }

    #[test]
    fn test_square_avatar_size() {
        let vertices = avatar(&avatar_with(Shape::Square));
        assert_eq!(vertices.len(), 6);
        assert_eq!(bounds(&vertices), Rect::new(77.5, 77.5, 122.5, 122.5));
    }

    #[test]
    fn test_triangle_avatar() {
        let vertices = avatar(&avatar_with(Shape::Triangle));
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0].position, [100.0, 70.0]);
        assert_eq!(vertices[1].position[1], 115.0);
        let b = bounds(&vertices);
        assert!((b.width() - 30.0 * 3.0f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn test_circle_avatar_fits_radius() {
        let a = avatar_with(Shape::Circle);
        let vertices = avatar(&a);
        assert_eq!(vertices.len(), (CIRCLE_SEGMENTS * 3) as usize);
        assert!(
            vertices
                .iter()
                .all(|v| (Vec2::from(v.position) - a.pos).length() <= a.radius + 1e-3)
        );
        assert_eq!(vertices[0].color, Color::RED.to_f32_array());
    }

    #[test]
    fn test_rounded_rect_stays_inside() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        let vertices = rounded_rect(&r, 10.0, WHITE);
        let b = bounds(&vertices);
        assert!((b.left - r.left).abs() < 1e-3 && (b.right - r.right).abs() < 1e-3);
        assert!((b.top - r.top).abs() < 1e-3 && (b.bottom - r.bottom).abs() < 1e-3);
        assert_eq!(vertices.len() % 3, 0);

        // Zero radius degenerates to a plain rect
        assert_eq!(rounded_rect(&r, 0.0, WHITE), rect(&r, WHITE));
    }

    #[test]
    fn test_rect_outline() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let vertices = rect_outline(&r, 5.0, WHITE);
        assert_eq!(vertices.len(), 24);
        assert_eq!(bounds(&vertices), r);
    }

    #[test]
    fn test_frame_vertices() {
        let mut state = GameState::new(Settings::default());
        let menu = frame(&Frame::capture(&state));
        assert!(!menu.is_empty());

        state.load_level(1);
        let f = Frame::capture(&state);
        let vertices = frame(&f);
        let walls_only = f.walls.len() * 6;
        assert!(vertices.len() > walls_only);
        assert_eq!(vertices.len() % 3, 0);
    }
}
