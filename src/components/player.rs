//! Input-driven body specialization: walk/run, double jump, pose selection.

use crate::api::types::WorldEvent;
use crate::components::animation::FrameAnimation;
use crate::components::body::{Body, Facing, VerticalState};
use crate::core::rect::Rect;
use crate::input::state::InputState;

/// Double-jump budget.
pub const MAX_JUMPS: u32 = 2;

/// Walk animation cadence multiplier while running. The run cycle plays
/// faster than the walk cycle by this fixed ratio.
pub const RUN_ANIM_SCALE: f32 = 1.0 / 0.62;

/// Default tuning, in pixels/second.
pub const WALK_SPEED: f32 = 250.0;
pub const RUN_SPEED: f32 = 400.0;
pub const JUMP_SPEED: f32 = 400.0;

/// Frame-id table for the player's poses. The renderer owns the actual
/// images; the core only ever reports ids out of this table.
#[derive(Debug, Clone)]
pub struct PlayerSprites {
    pub walk_right: Vec<u32>,
    pub walk_left: Vec<u32>,
    pub jump: u32,
    pub jump_running: u32,
    pub falling: u32,
    /// Seconds per walk frame.
    pub walk_frame_duration: f32,
}

impl Default for PlayerSprites {
    fn default() -> Self {
        Self {
            walk_right: vec![0, 1],
            walk_left: vec![2, 3],
            jump: 4,
            jump_running: 5,
            falling: 6,
            walk_frame_duration: 0.15,
        }
    }
}

/// The player: a `Body` plus jump budget, run/idle flags and a pair of walk
/// animations (one per facing, independently phased).
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub running: bool,
    pub idle: bool,
    jumps_used: u32,
    walk_right: FrameAnimation,
    walk_left: FrameAnimation,
    jump_frame: u32,
    jump_running_frame: u32,
    falling_frame: u32,
}

impl Player {
    pub fn new(rect: Rect, sprites: PlayerSprites) -> Self {
        Self {
            body: Body::new(rect),
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            jump_speed: JUMP_SPEED,
            running: false,
            idle: true,
            jumps_used: 0,
            walk_right: FrameAnimation::new(sprites.walk_right, sprites.walk_frame_duration),
            walk_left: FrameAnimation::new(sprites.walk_left, sprites.walk_frame_duration),
            jump_frame: sprites.jump,
            jump_running_frame: sprites.jump_running,
            falling_frame: sprites.falling,
        }
    }

    pub fn with_speeds(mut self, walk: f32, run: f32, jump: f32) -> Self {
        self.walk_speed = walk;
        self.run_speed = run;
        self.jump_speed = jump;
        self
    }

    /// Jumps consumed since the player last touched ground. Always in
    /// `0..=MAX_JUMPS`.
    pub fn jumps_used(&self) -> u32 {
        self.jumps_used
    }

    /// Apply one frame of input and integrate.
    pub fn update(&mut self, dt: f32, input: &InputState, events: &mut Vec<WorldEvent>) {
        let speed = if input.run {
            self.running = true;
            self.run_speed
        } else {
            self.running = false;
            self.walk_speed
        };
        let anim_scale = if self.running { RUN_ANIM_SCALE } else { 1.0 };

        if input.left {
            self.body.vel.x = -speed;
            self.idle = false;
            self.body.facing = Facing::Left;
            self.walk_right.reset();
            self.walk_left.advance(dt * anim_scale);
        } else if input.right {
            self.body.vel.x = speed;
            self.idle = false;
            self.body.facing = Facing::Right;
            self.walk_left.reset();
            self.walk_right.advance(dt * anim_scale);
        } else {
            self.body.vel.x = 0.0;
            self.idle = true;
            // Stopping rewinds both cycles so walking resumes from the
            // first stride instead of mid-cycle.
            self.walk_right.reset();
            self.walk_left.reset();
        }

        if input.jump_pressed && self.jumps_used < MAX_JUMPS {
            self.jump(false, events);
        }

        self.body.integrate(dt);
    }

    /// Apply a jump impulse. With `reset_budget` the jump counter is zeroed
    /// first, so a stomp bounce always grants a fresh double-jump budget.
    pub fn jump(&mut self, reset_budget: bool, events: &mut Vec<WorldEvent>) {
        if reset_budget {
            self.jumps_used = 0;
        }
        self.body.vel.y = -self.jump_speed;
        self.jumps_used += 1;
        self.body.vertical = VerticalState::Jumping;
        self.walk_right.reset();
        self.walk_left.reset();
        events.push(WorldEvent::Jumped);
        log::trace!("player jump, budget {}/{}", self.jumps_used, MAX_JUMPS);
    }

    /// Settle onto ground: stop falling and restore the jump budget. The
    /// budget resets exactly on this transition and nowhere else.
    pub fn set_on_ground(&mut self) {
        self.body.set_on_ground();
        self.jumps_used = 0;
    }

    /// Frame id for the renderer, chosen from vertical state, run flag and
    /// walk phase. Facing is exported separately on `body.facing`.
    pub fn frame_id(&self) -> u32 {
        match self.body.vertical {
            VerticalState::Jumping => {
                if self.running {
                    self.jump_running_frame
                } else {
                    self.jump_frame
                }
            }
            VerticalState::Falling => self.falling_frame,
            VerticalState::OnGround => {
                let anim = match self.body.facing {
                    Facing::Left => &self.walk_left,
                    Facing::Right => &self.walk_right,
                };
                if self.idle {
                    anim.idle_frame_id()
                } else {
                    anim.frame_id()
                }
            }
        }
    }
}
