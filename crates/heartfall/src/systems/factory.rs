//! Shape construction: logical descriptors plus the matching body specs.
//!
//! Factories return blueprints whose bodies have not been registered with
//! the world yet; the scene manager registers them on insert.

use glam::Vec2;
use std::f32::consts::PI;

use crate::components::color::Color;
use crate::components::shape::ShapeKind;
use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};
use crate::core::rng::Rng;

/// Heart width/height sampling range for click spawns, in pixels.
const HEART_SIZE_MIN: f32 = 100.0;
const HEART_SIZE_MAX: f32 = 150.0;
/// Side range for squares and rectangles.
const SIDE_MIN: f32 = 100.0;
const SIDE_MAX: f32 = 150.0;
/// Radius range for circles and half-circles.
const RADIUS_MIN: f32 = 50.0;
const RADIUS_MAX: f32 = 75.0;
/// Initial spin sampled at spawn. Cosmetic only: the contact solver owns the
/// body's orientation from the first step onward.
const SPAWN_ANGLE_MAX: f32 = 5.0 * PI;
/// Linear and angular velocity decay for spawned shapes ("air friction").
const AIR_FRICTION: f32 = 0.02;
/// Vertical offset of the heart's top corners and cleft, as a fraction of
/// height. Shared with the drawn outline.
pub(crate) const TOP_CLEFT_FRACTION: f32 = 0.3;
/// Horizontal advance per glyph as a fraction of font size; the text body
/// width uses the same constant.
pub const GLYPH_ADVANCE: f32 = 0.6;

/// Requested spawn variant, as selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Heart,
    Square,
    Rectangle,
    Circle,
    HalfCircle,
}

impl SpawnKind {
    /// Map a UI trigger tag to a variant. Unknown tags map to `None` and the
    /// trigger is dropped by the caller.
    pub fn from_tag(tag: u32) -> Option<SpawnKind> {
        match tag {
            0 => Some(SpawnKind::Heart),
            1 => Some(SpawnKind::Square),
            2 => Some(SpawnKind::Rectangle),
            3 => Some(SpawnKind::Circle),
            4 => Some(SpawnKind::HalfCircle),
            _ => None,
        }
    }
}

/// A fully formed shape description whose body is not yet registered.
#[derive(Debug, Clone)]
pub struct ShapeBlueprint {
    pub kind: ShapeKind,
    pub color: Color,
    pub desc: BodyDesc,
    pub material: ColliderMaterial,
    /// `(width, height)` of the flat plate whose analytic inertia replaces
    /// the engine-computed one once mass is known.
    pub plate_inertia: Option<(f32, f32)>,
}

/// Static text-block description, body not yet registered.
#[derive(Debug, Clone)]
pub struct TextBlueprint {
    pub text: String,
    pub font_size: f32,
    pub colors: Vec<Color>,
    pub pos: Vec2,
    pub desc: BodyDesc,
}

/// Build a blueprint for the given variant at a spawn point. Off-canvas
/// points are accepted as-is; the body simply starts off-screen or against
/// a wall.
pub fn shape_at(kind: SpawnKind, pos: Vec2, rng: &mut Rng) -> ShapeBlueprint {
    match kind {
        SpawnKind::Heart => heart_at(pos, rng),
        SpawnKind::Square => {
            let side = rng.range_f32(SIDE_MIN, SIDE_MAX);
            box_at(pos, side, side, rng)
        }
        SpawnKind::Rectangle => {
            let width = rng.range_f32(SIDE_MIN, SIDE_MAX);
            let height = rng.range_f32(SIDE_MIN, SIDE_MAX);
            box_at(pos, width, height, rng)
        }
        SpawnKind::Circle => circle_at(pos, rng),
        SpawnKind::HalfCircle => half_circle_at(pos, rng),
    }
}

fn heart_at(pos: Vec2, rng: &mut Rng) -> ShapeBlueprint {
    let width = rng.range_f32(HEART_SIZE_MIN, HEART_SIZE_MAX);
    let height = rng.range_f32(HEART_SIZE_MIN, HEART_SIZE_MAX);
    let angle = rng.range_f32(0.0, SPAWN_ANGLE_MAX);
    ShapeBlueprint {
        kind: ShapeKind::Heart { width, height },
        color: Color::random(rng),
        desc: BodyDesc::dynamic(ColliderDesc::ConvexPolygon {
            points: heart_vertices(width, height).to_vec(),
        })
        .with_position(pos)
        .with_rotation(angle)
        .with_linear_damping(AIR_FRICTION)
        .with_angular_damping(AIR_FRICTION),
        material: ColliderMaterial::default(),
        plate_inertia: Some((width, height)),
    }
}

fn box_at(pos: Vec2, width: f32, height: f32, rng: &mut Rng) -> ShapeBlueprint {
    let angle = rng.range_f32(0.0, SPAWN_ANGLE_MAX);
    ShapeBlueprint {
        kind: ShapeKind::Rectangle { width, height },
        color: Color::random(rng),
        desc: BodyDesc::dynamic(ColliderDesc::Cuboid {
            half_width: width / 2.0,
            half_height: height / 2.0,
        })
        .with_position(pos)
        .with_rotation(angle)
        .with_linear_damping(AIR_FRICTION)
        .with_angular_damping(AIR_FRICTION),
        material: ColliderMaterial::default(),
        plate_inertia: None,
    }
}

fn circle_at(pos: Vec2, rng: &mut Rng) -> ShapeBlueprint {
    let radius = rng.range_f32(RADIUS_MIN, RADIUS_MAX);
    ShapeBlueprint {
        kind: ShapeKind::Circle { radius },
        color: Color::random(rng),
        desc: BodyDesc::dynamic(ColliderDesc::Ball { radius })
            .with_position(pos)
            .with_linear_damping(AIR_FRICTION)
            .with_angular_damping(AIR_FRICTION),
        material: ColliderMaterial::default(),
        plate_inertia: None,
    }
}

fn half_circle_at(pos: Vec2, rng: &mut Rng) -> ShapeBlueprint {
    let radius = rng.range_f32(RADIUS_MIN, RADIUS_MAX);
    let angle = rng.range_f32(0.0, SPAWN_ANGLE_MAX);
    ShapeBlueprint {
        kind: ShapeKind::HalfCircle { radius },
        // The silhouette's box stands in for the dome shape
        desc: BodyDesc::dynamic(ColliderDesc::Cuboid {
            half_width: radius,
            half_height: radius / 2.0,
        })
        .with_position(pos)
        .with_rotation(angle)
        .with_linear_damping(AIR_FRICTION)
        .with_angular_damping(AIR_FRICTION),
        color: Color::random(rng),
        material: ColliderMaterial::default(),
        plate_inertia: None,
    }
}

/// Five-vertex polygon approximating the heart in local coordinates:
/// symmetric about the vertical axis, top corners lifted by the cleft
/// offset, a single point at the bottom.
pub fn heart_vertices(width: f32, height: f32) -> [Vec2; 5] {
    let cleft = height * TOP_CLEFT_FRACTION;
    [
        Vec2::new(-width / 2.0, -height / 2.0 + cleft),
        Vec2::new(-width / 2.0, height / 2.0),
        Vec2::new(0.0, height / 2.0 + cleft),
        Vec2::new(width / 2.0, height / 2.0),
        Vec2::new(width / 2.0, -height / 2.0 + cleft),
    ]
}

/// Thin-plate angular inertia: `(w² + h²) · m / 12`.
pub fn flat_plate_inertia(width: f32, height: f32, mass: f32) -> f32 {
    (width * width + height * height) * mass / 12.0
}

/// Static rectangular body loosely bounding the rendered text: one glyph
/// advance per character wide, one font size tall.
pub fn text_block(text: &str, font_size: f32, pos: Vec2, colors: Vec<Color>) -> TextBlueprint {
    let width = text.chars().count() as f32 * font_size * GLYPH_ADVANCE;
    TextBlueprint {
        text: text.to_string(),
        font_size,
        colors,
        pos,
        desc: BodyDesc::fixed(ColliderDesc::Cuboid {
            half_width: width / 2.0,
            half_height: font_size / 2.0,
        })
        .with_position(pos),
    }
}
