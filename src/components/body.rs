//! Shared moving-body state and per-frame integration.
//!
//! Player and enemy are the same body plus a velocity policy (input-driven
//! vs auto-walk): a fat struct with behavior functions, not a class
//! hierarchy.

use glam::Vec2;

use crate::components::probes::ProbeSet;
use crate::core::rect::Rect;

/// Downward acceleration, expressed as velocity gained **per update call**
/// rather than per second. This assumes a fixed timestep; `World::advance`
/// is the stepping layer that makes it well-defined.
pub const GRAVITY: f32 = 20.0;

/// Terminal fall speed in pixels/second.
pub const MAX_FALL_SPEED: f32 = 400.0;

/// Vertical motion classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalState {
    OnGround,
    Jumping,
    Falling,
}

/// Horizontal facing, exported so the renderer can mirror sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// A dynamic body: bounding box, velocity, vertical state, facing and the
/// four collision probes derived from the box.
#[derive(Debug, Clone)]
pub struct Body {
    /// Current bounding box.
    pub rect: Rect,
    /// Velocity in pixels/second.
    pub vel: Vec2,
    pub vertical: VerticalState,
    pub facing: Facing,
    /// Collision probes, refreshed from `rect` on every integration step and
    /// after every collision correction.
    pub probes: ProbeSet,
    /// Y at the end of the previous frame; classifies motion direction.
    prev_y: f32,
}

impl Body {
    /// Create a body at rest. Bodies spawn airborne (`Falling`) and settle
    /// onto the map on first downward contact.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            vertical: VerticalState::Falling,
            facing: Facing::Right,
            probes: ProbeSet::for_rect(&rect),
            prev_y: rect.y,
        }
    }

    /// Integrate one step. `vel.x` must already be set by the caller's
    /// velocity policy.
    ///
    /// The order here is load-bearing: position moves on the *previous*
    /// gravity sample, then gravity is applied for the next step. That
    /// one-frame lag shapes the jump arc and must not be reordered.
    pub fn integrate(&mut self, dt: f32) {
        assert!(dt >= 0.0, "negative frame delta: {dt}");

        self.rect.x += self.vel.x * dt;
        self.rect.y += self.vel.y * dt;

        self.vel.y += GRAVITY;
        if self.vel.y >= MAX_FALL_SPEED {
            self.vel.y = MAX_FALL_SPEED;
        }

        if self.vertical != VerticalState::OnGround {
            if self.rect.y > self.prev_y {
                self.vertical = VerticalState::Falling;
            } else if self.rect.y < self.prev_y {
                self.vertical = VerticalState::Jumping;
            }
        }

        self.refresh_probes();
        self.prev_y = self.rect.y;
    }

    /// Recompute the four probes from the current rect. Must run after any
    /// position change so no collision test ever sees stale probes.
    pub fn refresh_probes(&mut self) {
        self.probes = ProbeSet::for_rect(&self.rect);
    }

    /// Settle: stop vertical motion and mark the body grounded. The caller
    /// snaps the rect first.
    pub fn set_on_ground(&mut self) {
        self.vel.y = 0.0;
        self.vertical = VerticalState::OnGround;
    }
}
