use crate::components::shape::{Shape, TextBlock};

/// Ordered shape storage plus the singleton text slot.
///
/// Insertion order is draw order (later shapes draw on top); the text block
/// is held in its own slot rather than the shape vector, and always draws
/// last. Designed for small-to-medium shape counts (hundreds, not millions).
pub struct Scene {
    shapes: Vec<Shape>,
    text: Option<TextBlock>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a scene with a specific shape capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            text: None,
        }
    }

    /// Append a shape to the collection.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// All shapes, in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterate over all shapes mutably.
    pub fn shapes_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// Empty the collection, handing the removed shapes to the caller so
    /// their bodies can be released in the same logical step.
    pub fn drain_shapes(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.shapes)
    }

    /// The text slot occupant, if any.
    pub fn text(&self) -> Option<&TextBlock> {
        self.text.as_ref()
    }

    pub fn text_mut(&mut self) -> Option<&mut TextBlock> {
        self.text.as_mut()
    }

    /// Evict the text slot, handing the occupant to the caller.
    pub fn take_text(&mut self) -> Option<TextBlock> {
        self.text.take()
    }

    /// Occupy the text slot. Callers evict the previous occupant (and remove
    /// its body) first; see `take_text`.
    pub fn put_text(&mut self, block: TextBlock) {
        self.text = Some(block);
    }

    /// Number of shapes, text slot excluded.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the shape collection is empty (the slot may still be occupied).
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes plus text-slot occupancy; matches the live body count with the
    /// arena boundary excluded.
    pub fn total_len(&self) -> usize {
        self.shapes.len() + self.text.is_some() as usize
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::color::Color;
    use crate::components::shape::ShapeKind;
    use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial, PhysicsWorld};
    use glam::Vec2;

    fn make_shape(world: &mut PhysicsWorld) -> Shape {
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 }),
            ColliderMaterial::default(),
        );
        Shape::new(ShapeKind::Circle { radius: 10.0 }, Color::WHITE, body)
    }

    fn make_text(world: &mut PhysicsWorld) -> TextBlock {
        let body = world.create_body(
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: 60.0,
                half_height: 50.0,
            }),
            ColliderMaterial::default(),
        );
        TextBlock {
            text: "hi".to_string(),
            font_size: 100.0,
            colors: vec![Color::WHITE, Color::BLACK],
            pos: Vec2::new(400.0, 350.0),
            body,
        }
    }

    #[test]
    fn push_and_len() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let mut scene = Scene::new();
        scene.push(make_shape(&mut world));
        scene.push(make_shape(&mut world));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.total_len(), 2);
    }

    #[test]
    fn drain_empties_collection() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let mut scene = Scene::new();
        scene.push(make_shape(&mut world));
        scene.push(make_shape(&mut world));
        let drained = scene.drain_shapes();
        assert_eq!(drained.len(), 2);
        assert!(scene.is_empty());
        assert!(scene.drain_shapes().is_empty());
    }

    #[test]
    fn text_slot_take_and_put() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let mut scene = Scene::new();
        assert!(scene.text().is_none());
        assert!(scene.take_text().is_none());

        scene.put_text(make_text(&mut world));
        assert_eq!(scene.total_len(), 1);
        assert_eq!(scene.len(), 0);

        let taken = scene.take_text().unwrap();
        assert_eq!(taken.text, "hi");
        assert!(scene.text().is_none());
        assert_eq!(scene.total_len(), 0);
    }

    #[test]
    fn drain_leaves_text_slot_alone() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let mut scene = Scene::new();
        scene.push(make_shape(&mut world));
        scene.put_text(make_text(&mut world));
        scene.drain_shapes();
        assert!(scene.text().is_some());
        assert_eq!(scene.total_len(), 1);
    }
}
