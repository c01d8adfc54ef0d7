use glam::Vec2;

use crate::components::color::Color;
use crate::core::physics::PhysicsBody;

/// Geometry tag for a drawable shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Heart { width: f32, height: f32 },
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
    HalfCircle { radius: f32 },
}

/// A drawable entity backed by exactly one physics body.
///
/// `pos` and `rotation` are overwritten from the body every frame; the body
/// handle is owned by this shape alone and is removed together with it.
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Color,
    /// Draw anchor in world space, refreshed from the body each frame.
    pub pos: Vec2,
    /// Rotation in radians, refreshed from the body each frame.
    pub rotation: f32,
    pub body: PhysicsBody,
}

impl Shape {
    pub fn new(kind: ShapeKind, color: Color, body: PhysicsBody) -> Self {
        Self {
            kind,
            color,
            pos: Vec2::ZERO,
            rotation: 0.0,
            body,
        }
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// The singleton decorative text block.
///
/// Its body is static and acts as an obstacle; it never rotates and the draw
/// routine ignores rotation entirely. `colors` holds one entry per letter,
/// cycling when shorter than the text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    /// Non-empty by construction; blank submissions fall back to a default.
    pub text: String,
    pub font_size: f32,
    pub colors: Vec<Color>,
    pub pos: Vec2,
    pub body: PhysicsBody,
}

impl TextBlock {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
