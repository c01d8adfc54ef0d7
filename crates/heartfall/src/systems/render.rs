//! Per-frame scene drawing.
//!
//! Each frame pulls authoritative transforms from the physics world into the
//! shapes, then traces every variant's outline in local coordinates, mapped
//! through the body's rotation and translation, and tessellates it into the
//! frame buffer. The text block lays out last, always on top.

use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;

use crate::components::shape::ShapeKind;
use crate::core::physics::PhysicsWorld;
use crate::core::scene::Scene;
use crate::systems::factory::TOP_CLEFT_FRACTION;
use crate::systems::text::{layout_glyphs, GlyphCommand, TextStyle};
use crate::systems::vector::VectorState;

/// Cubic-bezier control distance for a quarter-circle arc.
const ARC_KAPPA: f32 = 0.552_284_8;

/// One frame's draw output: filled triangles plus text glyph commands.
pub struct Frame {
    pub vectors: VectorState,
    pub glyphs: Vec<GlyphCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            vectors: VectorState::new(),
            glyphs: Vec::new(),
        }
    }

    /// Wipe the previous frame's output.
    pub fn clear(&mut self) {
        self.vectors.clear();
        self.glyphs.clear();
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the most recently settled position and orientation from the physics
/// world into every shape. The text body is static: its position syncs, its
/// rotation stays zero. Removed handles read back nothing and leave the
/// shape untouched.
pub fn sync_transforms(scene: &mut Scene, physics: &PhysicsWorld) {
    for shape in scene.shapes_mut() {
        if let Some((pos, rotation)) = physics.transform(&shape.body) {
            shape.pos = pos;
            shape.rotation = rotation;
        }
    }
    if let Some(block) = scene.text_mut() {
        if let Some((pos, _)) = physics.transform(&block.body) {
            block.pos = pos;
        }
    }
}

/// Draw the scene into the frame buffer: shapes in collection order, then
/// the text block (always on top).
pub fn draw_scene(scene: &Scene, style: &TextStyle, frame: &mut Frame) {
    frame.clear();

    for shape in scene.shapes() {
        match shape.kind {
            ShapeKind::Heart { width, height } => {
                let path = heart_path(width, height, shape.pos, shape.rotation);
                frame.vectors.fill_path(&path, shape.color);
            }
            ShapeKind::Rectangle { width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                let corners = [
                    to_world(Vec2::new(-hw, -hh), shape.pos, shape.rotation),
                    to_world(Vec2::new(hw, -hh), shape.pos, shape.rotation),
                    to_world(Vec2::new(hw, hh), shape.pos, shape.rotation),
                    to_world(Vec2::new(-hw, hh), shape.pos, shape.rotation),
                ];
                frame.vectors.fill_polygon(&corners, shape.color);
            }
            ShapeKind::Circle { radius } => {
                frame.vectors.fill_circle(shape.pos, radius, shape.color);
            }
            ShapeKind::HalfCircle { radius } => {
                let path = half_circle_path(radius, shape.pos, shape.rotation);
                frame.vectors.fill_path(&path, shape.color);
            }
        }
    }

    if let Some(block) = scene.text() {
        layout_glyphs(
            &block.text,
            block.pos,
            block.font_size,
            &block.colors,
            style,
            &mut frame.glyphs,
        );
    }
}

/// Rotate-then-translate a point from shape-local space into world space.
fn to_world(local: Vec2, pos: Vec2, rotation: f32) -> Vec2 {
    let (s, c) = rotation.sin_cos();
    Vec2::new(
        pos.x + local.x * c - local.y * s,
        pos.y + local.x * s + local.y * c,
    )
}

/// Closed heart outline: four cubic segments forming two symmetric lobes
/// that meet at the bottom point and the top cleft. Local coordinates are
/// centered at the origin, y growing downward.
fn heart_path(width: f32, height: f32, pos: Vec2, rotation: f32) -> Path {
    let cleft = height * TOP_CLEFT_FRACTION;
    let hw = width / 2.0;
    let mid = (height + cleft) / 2.0;
    let wp = |x: f32, y: f32| {
        let v = to_world(Vec2::new(x, y - height / 2.0), pos, rotation);
        point(v.x, v.y)
    };

    let mut builder = Path::builder();
    builder.begin(wp(0.0, cleft));
    builder.cubic_bezier_to(wp(0.0, 0.0), wp(-hw, 0.0), wp(-hw, cleft));
    builder.cubic_bezier_to(wp(-hw, mid), wp(0.0, mid), wp(0.0, height));
    builder.cubic_bezier_to(wp(0.0, mid), wp(hw, mid), wp(hw, cleft));
    builder.cubic_bezier_to(wp(hw, 0.0), wp(0.0, 0.0), wp(0.0, cleft));
    builder.close();
    builder.build()
}

/// Half-circle silhouette: two quarter-circle cubics forming the dome over a
/// flat chord, centered at the origin (the chord sits half a radius below).
fn half_circle_path(radius: f32, pos: Vec2, rotation: f32) -> Path {
    let hh = radius / 2.0;
    let k = ARC_KAPPA * radius;
    let wp = |x: f32, y: f32| {
        let v = to_world(Vec2::new(x, y), pos, rotation);
        point(v.x, v.y)
    };

    let mut builder = Path::builder();
    builder.begin(wp(-radius, hh));
    builder.cubic_bezier_to(wp(-radius, hh - k), wp(-k, -hh), wp(0.0, -hh));
    builder.cubic_bezier_to(wp(k, -hh), wp(radius, hh - k), wp(radius, hh));
    builder.close();
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Color;
    use crate::components::shape::{Shape, TextBlock};
    use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};
    use std::f32::consts::FRAC_PI_2;

    fn scene_with(kind: ShapeKind) -> (Scene, PhysicsWorld) {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 100.0));
        world.set_dt(1.0 / 60.0);
        let collider = match kind {
            ShapeKind::Heart { width, height } => ColliderDesc::ConvexPolygon {
                points: crate::systems::factory::heart_vertices(width, height).to_vec(),
            },
            ShapeKind::Rectangle { width, height } => ColliderDesc::Cuboid {
                half_width: width / 2.0,
                half_height: height / 2.0,
            },
            ShapeKind::Circle { radius } => ColliderDesc::Ball { radius },
            ShapeKind::HalfCircle { radius } => ColliderDesc::Cuboid {
                half_width: radius,
                half_height: radius / 2.0,
            },
        };
        let body = world.create_body(
            &BodyDesc::dynamic(collider).with_position(Vec2::new(200.0, 100.0)),
            ColliderMaterial::default(),
        );
        let mut scene = Scene::new();
        scene.push(Shape::new(kind, Color::RED, body).with_pos(Vec2::new(200.0, 100.0)));
        (scene, world)
    }

    #[test]
    fn to_world_rotates_then_translates() {
        let p = to_world(Vec2::new(1.0, 0.0), Vec2::new(10.0, 20.0), FRAC_PI_2);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 21.0).abs() < 1e-5);
    }

    #[test]
    fn every_variant_tessellates() {
        for kind in [
            ShapeKind::Heart {
                width: 120.0,
                height: 130.0,
            },
            ShapeKind::Rectangle {
                width: 100.0,
                height: 50.0,
            },
            ShapeKind::Circle { radius: 60.0 },
            ShapeKind::HalfCircle { radius: 60.0 },
        ] {
            let (scene, _world) = scene_with(kind);
            let mut frame = Frame::new();
            draw_scene(&scene, &TextStyle::default(), &mut frame);
            assert!(
                frame.vectors.vertex_count() > 0,
                "no vertices for {:?}",
                kind
            );
        }
    }

    #[test]
    fn sync_pulls_positions_from_the_world() {
        let (mut scene, mut world) = scene_with(ShapeKind::Circle { radius: 30.0 });
        let before = scene.shapes()[0].pos;
        for _ in 0..10 {
            world.step();
        }
        sync_transforms(&mut scene, &world);
        let after = scene.shapes()[0].pos;
        assert!(after.y > before.y, "shape should fall: {} -> {}", before.y, after.y);
    }

    #[test]
    fn sync_skips_removed_bodies() {
        let (mut scene, mut world) = scene_with(ShapeKind::Circle { radius: 30.0 });
        let body = scene.shapes()[0].body;
        world.remove_body(&body);
        world.step();
        sync_transforms(&mut scene, &world);
        // Last-known position survives the removal
        assert_eq!(scene.shapes()[0].pos, Vec2::new(200.0, 100.0));
    }

    #[test]
    fn text_block_draws_last_and_keeps_zero_rotation() {
        let (mut scene, mut world) = scene_with(ShapeKind::Heart {
            width: 110.0,
            height: 140.0,
        });
        let body = world.create_body(
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: 90.0,
                half_height: 50.0,
            })
            .with_position(Vec2::new(400.0, 350.0)),
            ColliderMaterial::default(),
        );
        scene.put_text(TextBlock {
            text: "abc".to_string(),
            font_size: 100.0,
            colors: vec![Color::WHITE],
            pos: Vec2::new(400.0, 350.0),
            body,
        });

        for _ in 0..5 {
            world.step();
        }
        sync_transforms(&mut scene, &world);
        assert_eq!(scene.text().unwrap().pos, Vec2::new(400.0, 350.0));

        let mut frame = Frame::new();
        draw_scene(&scene, &TextStyle::default(), &mut frame);
        assert!(frame.vectors.vertex_count() > 0);
        assert_eq!(frame.glyphs.len(), 3);
    }

    #[test]
    fn draw_rebuilds_from_scratch_each_frame() {
        let (scene, _world) = scene_with(ShapeKind::Circle { radius: 30.0 });
        let mut frame = Frame::new();
        draw_scene(&scene, &TextStyle::default(), &mut frame);
        let first = frame.vectors.vertex_count();
        draw_scene(&scene, &TextStyle::default(), &mut frame);
        assert_eq!(frame.vectors.vertex_count(), first);
    }
}
