/// Fixed timestep accumulator.
///
/// The simulation applies gravity as a flat per-step increment, so game
/// logic must tick at a consistent rate regardless of render frame time.
/// Feed real frame deltas in, run the returned number of whole fixed steps.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        assert!(dt > 0.0, "fixed timestep must be positive: {dt}");
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps
    /// to run. Capped at 10 steps per frame to prevent a spiral of death.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        assert!(frame_dt >= 0.0, "negative frame delta: {frame_dt}");
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
