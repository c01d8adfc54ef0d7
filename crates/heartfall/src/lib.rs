pub mod api;
pub mod components;
pub mod config;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::canvas::CanvasApp;
pub use crate::api::runner::FrameRunner;
pub use crate::components::color::Color;
pub use crate::components::shape::{Shape, ShapeKind, TextBlock};
pub use crate::config::CanvasConfig;
pub use crate::core::physics::{
    BodyDesc, BodyType, ColliderDesc, ColliderMaterial, PhysicsBody, PhysicsWorld,
};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::{FixedTimestep, IntervalTimer};
pub use crate::input::queue::{CanvasEvent, InputQueue};
pub use crate::systems::factory::{
    flat_plate_inertia, heart_vertices, ShapeBlueprint, SpawnKind, TextBlueprint,
};
pub use crate::systems::render::{draw_scene, sync_transforms, Frame};
pub use crate::systems::text::{layout_glyphs, GlyphCommand, TextStyle};
pub use crate::systems::vector::{VectorState, VectorVertex};
