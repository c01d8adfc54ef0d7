/// Fixed timestep accumulator.
/// Ensures the simulation steps at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Wall-clock interval timer driving the periodic recolor animation.
///
/// While toggled on, it accumulates frame time and reports how many whole
/// periods elapsed since the last call; while off it reports zero and holds
/// no residue.
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Flip the timer on or off. Turning it on starts a fresh period.
    pub fn toggle(&mut self) {
        self.running = !self.running;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Add frame time; returns the number of periods that completed.
    /// Always zero while stopped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;
        let fires = (self.elapsed / self.period) as u32;
        self.elapsed -= fires as f32 * self.period;
        fires
    }
}
