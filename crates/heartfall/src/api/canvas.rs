//! The scene manager.
//!
//! `CanvasApp` owns the shape collection, the text slot, and the physics
//! world, and keeps body lifecycle tied to shape lifecycle: a body is
//! registered when its shape enters the scene and removed in the same
//! logical step its shape leaves.

use glam::Vec2;

use crate::components::color::Color;
use crate::components::shape::{Shape, TextBlock};
use crate::config::CanvasConfig;
use crate::core::physics::{
    BodyDesc, ColliderDesc, ColliderMaterial, PhysicsBody, PhysicsWorld,
};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::systems::factory::{self, ShapeBlueprint, SpawnKind};

pub struct CanvasApp {
    pub scene: Scene,
    pub physics: PhysicsWorld,
    config: CanvasConfig,
    rng: Rng,
    selected: SpawnKind,
    /// Floor, left wall, right wall, ceiling. Created once, never removed.
    boundary: [PhysicsBody; 4],
}

impl CanvasApp {
    pub fn new(config: CanvasConfig) -> Self {
        let mut physics = PhysicsWorld::new(Vec2::new(0.0, config.gravity_y));
        physics.set_dt(config.fixed_dt);
        let boundary = build_boundary(&mut physics, &config);
        log::info!(
            "canvas ready: {}x{}, gravity {}",
            config.width,
            config.height,
            config.gravity_y
        );
        Self {
            scene: Scene::new(),
            physics,
            rng: Rng::new(config.seed),
            selected: SpawnKind::Heart,
            boundary,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The variant the next click spawns.
    pub fn selected(&self) -> SpawnKind {
        self.selected
    }

    /// Spawn the selected variant at a click point. Points outside the
    /// canvas are accepted; the body starts off-screen or against a wall.
    pub fn spawn_at(&mut self, x: f32, y: f32) {
        if let Some(cap) = self.config.max_shapes {
            if self.scene.len() >= cap {
                log::debug!("shape cap {} reached, spawn dropped", cap);
                return;
            }
        }
        let blueprint = factory::shape_at(self.selected, Vec2::new(x, y), &mut self.rng);
        self.insert(blueprint);
    }

    /// Register the blueprint's body and append the shape. The flat-plate
    /// inertia override runs afterwards, once the engine has computed mass.
    fn insert(&mut self, blueprint: ShapeBlueprint) {
        let body = self.physics.create_body(&blueprint.desc, blueprint.material);
        if let Some((width, height)) = blueprint.plate_inertia {
            let mass = self.physics.mass(&body);
            self.physics
                .override_inertia(&body, factory::flat_plate_inertia(width, height, mass));
        }
        let shape = Shape::new(blueprint.kind, blueprint.color, body)
            .with_pos(blueprint.desc.position)
            .with_rotation(blueprint.desc.rotation);
        self.scene.push(shape);
    }

    /// Remove every shape and its body in one batched step. The text slot
    /// and the arena boundary survive. Calling it again is a no-op.
    pub fn clear_shapes(&mut self) {
        let removed = self.scene.drain_shapes();
        if removed.is_empty() {
            return;
        }
        self.physics
            .remove_bodies(removed.iter().map(|shape| shape.body));
        log::debug!("cleared {} shapes", removed.len());
    }

    /// Fresh random color for every non-text shape. No engine interaction.
    pub fn recolor_shapes(&mut self) {
        let rng = &mut self.rng;
        for shape in self.scene.shapes_mut() {
            shape.color = Color::random(rng);
        }
    }

    /// Fresh per-letter palette for the text block, one color per letter.
    pub fn recolor_text(&mut self) {
        let rng = &mut self.rng;
        if let Some(block) = self.scene.text_mut() {
            let count = block.char_count();
            block.colors = Color::random_batch(rng, count);
        }
    }

    /// Replace the text block. The old occupant is evicted and its body
    /// removed before the replacement exists, so two blocks are never alive
    /// at once. Blank input falls back to the configured default string.
    pub fn set_text(&mut self, input: &str) {
        let trimmed = input.trim();
        let text = if trimmed.is_empty() {
            self.config.default_text.clone()
        } else {
            trimmed.to_string()
        };

        if let Some(old) = self.scene.take_text() {
            self.physics.remove_body(&old.body);
        }

        let pos = Vec2::new(
            self.config.width / 2.0,
            self.config.height / 2.0 + self.config.font_size / 2.0,
        );
        let colors = Color::random_batch(&mut self.rng, text.chars().count());
        let blueprint = factory::text_block(&text, self.config.font_size, pos, colors);
        let body = self
            .physics
            .create_body(&blueprint.desc, ColliderMaterial::default());
        self.scene.put_text(TextBlock {
            text: blueprint.text,
            font_size: blueprint.font_size,
            colors: blueprint.colors,
            pos: blueprint.pos,
            body,
        });
    }

    /// Choose the variant subsequent clicks spawn. Unknown tags are dropped.
    pub fn select_variant(&mut self, tag: u32) {
        match SpawnKind::from_tag(tag) {
            Some(kind) => self.selected = kind,
            None => log::debug!("unknown shape variant tag {}, dropped", tag),
        }
    }

    /// Live bodies with the arena boundary excluded; equals the scene's
    /// shape count plus text-slot occupancy at every reachable state.
    pub fn live_body_count(&self) -> usize {
        self.physics.body_count() - self.boundary.len()
    }
}

/// Four static containment bodies centered on the canvas edges.
fn build_boundary(physics: &mut PhysicsWorld, config: &CanvasConfig) -> [PhysicsBody; 4] {
    let (w, h, t) = (config.width, config.height, config.wall_thickness);
    let wall = |hw: f32, hh: f32, x: f32, y: f32| {
        BodyDesc::fixed(ColliderDesc::Cuboid {
            half_width: hw,
            half_height: hh,
        })
        .with_position(Vec2::new(x, y))
    };
    let material = ColliderMaterial::default();
    [
        physics.create_body(&wall(w / 2.0, t / 2.0, w / 2.0, h), material), // floor
        physics.create_body(&wall(t / 2.0, h / 2.0, 0.0, h / 2.0), material), // left
        physics.create_body(&wall(t / 2.0, h / 2.0, w, h / 2.0), material), // right
        physics.create_body(&wall(w / 2.0, t / 2.0, w / 2.0, 0.0), material), // ceiling
    ]
}
