//! UI trigger events.
//!
//! The host pushes events as the user interacts; the frame runner drains the
//! queue at the top of every tick, so each trigger executes synchronously
//! between frames, never mid-frame.

/// Discrete triggers the canvas toy understands.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Canvas click in canvas-local pixels: spawn the selected variant there.
    PointerDown { x: f32, y: f32 },
    /// Remove every shape except the text block.
    ClearShapes,
    /// Re-roll the color of every non-text shape.
    RecolorShapes,
    /// Re-roll the text block's per-letter palette.
    RecolorText,
    /// Replace the text block. Blank input falls back to the default string.
    SubmitText(String),
    /// Start or stop the periodic recolor animation.
    ToggleAnimation,
    /// Choose which variant subsequent clicks spawn.
    SelectVariant(u32),
}

/// A queue of trigger events, drained once per frame.
pub struct InputQueue {
    events: Vec<CanvasEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new event (called from the host's UI wiring).
    pub fn push(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(CanvasEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(CanvasEvent::ClearShapes);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn submit_text_carries_its_string() {
        let mut q = InputQueue::new();
        q.push(CanvasEvent::SubmitText("hello".to_string()));
        let events = q.drain();
        assert_eq!(events[0], CanvasEvent::SubmitText("hello".to_string()));
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(CanvasEvent::SelectVariant(3));
        q.push(CanvasEvent::PointerDown { x: 1.0, y: 2.0 });
        q.push(CanvasEvent::RecolorShapes);
        let events = q.drain();
        assert_eq!(events[0], CanvasEvent::SelectVariant(3));
        assert_eq!(events[2], CanvasEvent::RecolorShapes);
    }
}
