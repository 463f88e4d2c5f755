//! One-shot pickup. No physics, just a static rect, a spin animation and a
//! terminal `collected` flag.

use crate::components::animation::FrameAnimation;
use crate::core::rect::Rect;

/// Frame-id table for the coin's spin cycle.
#[derive(Debug, Clone)]
pub struct CoinSprites {
    pub frames: Vec<u32>,
    pub frame_duration: f32,
}

impl Default for CoinSprites {
    fn default() -> Self {
        Self {
            frames: vec![20, 21, 22, 23],
            frame_duration: 0.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub rect: Rect,
    /// Terminal: once collected a coin never reappears.
    pub collected: bool,
    spin: FrameAnimation,
}

impl Coin {
    pub fn new(rect: Rect, sprites: CoinSprites) -> Self {
        Self {
            rect,
            collected: false,
            spin: FrameAnimation::new(sprites.frames, sprites.frame_duration),
        }
    }

    /// Advance the spin animation. Runs every frame regardless of collection
    /// state; collected coins are simply never drawn or tested.
    pub fn update(&mut self, dt: f32) {
        self.spin.advance(dt);
    }

    pub fn collect(&mut self) {
        self.collected = true;
    }

    pub fn frame_id(&self) -> u32 {
        self.spin.frame_id()
    }
}
