//! Frame-cycling sprite animation.
//!
//! The core never touches images; it cycles through renderer-defined frame
//! ids on a timer and reports which one is active.

/// A looping sequence of sprite frame ids advanced on a fixed cadence.
///
/// Each dynamic body owns its own instances, so multiple bodies animate out
/// of phase.
#[derive(Debug, Clone)]
pub struct FrameAnimation {
    frames: Vec<u32>,
    current: usize,
    elapsed: f32,
    frame_duration: f32,
}

impl FrameAnimation {
    /// Create an animation over the given frame ids.
    /// Panics on an empty frame list or non-positive frame duration.
    pub fn new(frames: Vec<u32>, frame_duration: f32) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        assert!(
            frame_duration > 0.0,
            "frame duration must be positive: {frame_duration}"
        );
        Self {
            frames,
            current: 0,
            elapsed: 0.0,
            frame_duration,
        }
    }

    /// Rewind to frame 0. Called whenever movement stops or reverses so the
    /// cycle restarts cleanly instead of resuming mid-stride.
    pub fn reset(&mut self) {
        self.current = 0;
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds. Returns true if the frame changed.
    ///
    /// At most one frame advances per call even for a large `dt`; there is
    /// no catch-up loop. Under heavy frame-time spikes the animation lags
    /// rather than skipping frames; accepted behavior, not a bug.
    pub fn advance(&mut self, dt: f32) -> bool {
        debug_assert!(dt >= 0.0, "negative animation delta");
        self.elapsed += dt;
        if self.elapsed >= self.frame_duration {
            self.elapsed = 0.0;
            self.current = (self.current + 1) % self.frames.len();
            return true;
        }
        false
    }

    /// The active frame id.
    pub fn frame_id(&self) -> u32 {
        self.frames[self.current]
    }

    /// The resting frame, shown when a grounded body is not moving.
    pub fn idle_frame_id(&self) -> u32 {
        self.frames[0]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
