//! Host-driven frame loop.
//!
//! The host calls `tick` once per display refresh; the runner never
//! reschedules itself. Stopping is an explicit external call — the `running`
//! flag is checked at loop entry and nothing else ends the loop.

use crate::api::canvas::CanvasApp;
use crate::config::CanvasConfig;
use crate::core::time::{FixedTimestep, IntervalTimer};
use crate::input::queue::{CanvasEvent, InputQueue};
use crate::systems::render::{draw_scene, sync_transforms, Frame};
use crate::systems::text::TextStyle;

pub struct FrameRunner {
    app: CanvasApp,
    input: InputQueue,
    frame: Frame,
    style: TextStyle,
    timestep: FixedTimestep,
    animation: IntervalTimer,
    running: bool,
}

impl FrameRunner {
    pub fn new(config: CanvasConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let animation = IntervalTimer::new(config.recolor_interval);
        Self {
            app: CanvasApp::new(config),
            input: InputQueue::new(),
            frame: Frame::new(),
            style: TextStyle::default(),
            timestep,
            animation,
            running: true,
        }
    }

    /// Push a trigger event; it executes at the top of the next tick.
    pub fn push_input(&mut self, event: CanvasEvent) {
        self.input.push(event);
    }

    pub fn app(&self) -> &CanvasApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut CanvasApp {
        &mut self.app
    }

    /// The latest frame's draw output.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn animation_running(&self) -> bool {
        self.animation.is_running()
    }

    /// One frame: drain triggers, fire the recolor animation, advance the
    /// simulation, sync transforms, rebuild the draw buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }

        for event in self.input.drain() {
            self.dispatch(event);
        }

        for _ in 0..self.animation.advance(dt) {
            self.app.recolor_shapes();
            self.app.recolor_text();
        }

        for _ in 0..self.timestep.accumulate(dt) {
            self.app.physics.step();
        }

        sync_transforms(&mut self.app.scene, &self.app.physics);
        draw_scene(&self.app.scene, &self.style, &mut self.frame);
    }

    fn dispatch(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown { x, y } => self.app.spawn_at(x, y),
            CanvasEvent::ClearShapes => self.app.clear_shapes(),
            CanvasEvent::RecolorShapes => self.app.recolor_shapes(),
            CanvasEvent::RecolorText => self.app.recolor_text(),
            CanvasEvent::SubmitText(text) => self.app.set_text(&text),
            CanvasEvent::ToggleAnimation => self.animation.toggle(),
            CanvasEvent::SelectVariant(tag) => self.app.select_variant(tag),
        }
    }
}
