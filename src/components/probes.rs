//! Directional collision probes.
//!
//! Four narrow rectangles hugging the edges of a body's bounding box. A
//! probe overlapping an obstacle tells the resolver *which side* made
//! contact without the opposite side false-triggering.

use crate::core::rect::Rect;

/// Side probe size (left/right): tall and thin, vertically centered.
pub const SIDE_PROBE_W: f32 = 6.0;
pub const SIDE_PROBE_H: f32 = 20.0;

/// Cap probe size (up/down): wide and flat, horizontally centered.
pub const CAP_PROBE_W: f32 = 12.0;
pub const CAP_PROBE_H: f32 = 6.0;

/// The four probes of a moving body. Owned values, recomputed from the body
/// rect every frame, never aliased into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSet {
    pub left: Rect,
    pub right: Rect,
    pub up: Rect,
    pub down: Rect,
}

impl ProbeSet {
    /// Compute all four probes for a body bounding box.
    ///
    /// Probe sizes are fixed constants independent of the body size; only
    /// their placement follows the rect.
    pub fn for_rect(rect: &Rect) -> Self {
        let center = rect.center();
        Self {
            left: Rect::new(
                rect.left(),
                center.y - SIDE_PROBE_H * 0.5,
                SIDE_PROBE_W,
                SIDE_PROBE_H,
            ),
            right: Rect::new(
                rect.right() - SIDE_PROBE_W,
                center.y - SIDE_PROBE_H * 0.5,
                SIDE_PROBE_W,
                SIDE_PROBE_H,
            ),
            up: Rect::new(center.x - CAP_PROBE_W * 0.5, rect.top(), CAP_PROBE_W, CAP_PROBE_H),
            down: Rect::new(
                center.x - CAP_PROBE_W * 0.5,
                rect.bottom() - CAP_PROBE_H,
                CAP_PROBE_W,
                CAP_PROBE_H,
            ),
        }
    }
}
