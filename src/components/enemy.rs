//! Auto-walk body specialization.
//!
//! Enemies have no horizontal input: they walk in their facing direction at
//! a fixed speed, and only a wall bump (via collision resolution) ever
//! flips them around.

use crate::components::animation::FrameAnimation;
use crate::components::body::{Body, Facing};
use crate::core::rect::Rect;

/// Default patrol speed in pixels/second.
pub const ENEMY_WALK_SPEED: f32 = 100.0;

/// Frame-id table for the enemy's walk cycles.
#[derive(Debug, Clone)]
pub struct EnemySprites {
    pub walk_right: Vec<u32>,
    pub walk_left: Vec<u32>,
    pub walk_frame_duration: f32,
}

impl Default for EnemySprites {
    fn default() -> Self {
        Self {
            walk_right: vec![10, 11],
            walk_left: vec![12, 13],
            walk_frame_duration: 0.15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub walk_speed: f32,
    /// Terminal: a dead enemy never updates, draws or collides again.
    pub dead: bool,
    walk_right: FrameAnimation,
    walk_left: FrameAnimation,
}

impl Enemy {
    pub fn new(rect: Rect, walk_speed: f32, sprites: EnemySprites) -> Self {
        let mut body = Body::new(rect);
        body.facing = Facing::Left;
        Self {
            body,
            walk_speed,
            dead: false,
            walk_right: FrameAnimation::new(sprites.walk_right, sprites.walk_frame_duration),
            walk_left: FrameAnimation::new(sprites.walk_left, sprites.walk_frame_duration),
        }
    }

    /// Auto-walk one frame: velocity from facing alone, then integrate.
    pub fn update(&mut self, dt: f32) {
        if self.dead {
            return;
        }
        match self.body.facing {
            Facing::Left => {
                self.body.vel.x = -self.walk_speed;
                self.walk_right.reset();
                self.walk_left.advance(dt);
            }
            Facing::Right => {
                self.body.vel.x = self.walk_speed;
                self.walk_left.reset();
                self.walk_right.advance(dt);
            }
        }
        self.body.integrate(dt);
    }

    /// Flip facing. Invoked only by collision resolution on a wall bump,
    /// never by a timer or AI decision.
    pub fn turn(&mut self) {
        self.body.facing = self.body.facing.flipped();
    }

    /// Terminal kill. Velocity sign on the next frame follows from facing,
    /// so nothing else needs clearing.
    pub fn kill(&mut self) {
        self.dead = true;
    }

    pub fn bounding_box(&self) -> Rect {
        self.body.rect
    }

    pub fn frame_id(&self) -> u32 {
        match self.body.facing {
            Facing::Left => self.walk_left.frame_id(),
            Facing::Right => self.walk_right.frame_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn enemy() -> Enemy {
        Enemy::new(
            Rect::new(100.0, 0.0, 32.0, 32.0),
            ENEMY_WALK_SPEED,
            EnemySprites::default(),
        )
    }

    #[test]
    fn walks_in_facing_direction() {
        let mut e = enemy();
        e.update(DT);
        assert_eq!(e.body.vel.x, -ENEMY_WALK_SPEED);

        e.turn();
        e.update(DT);
        assert_eq!(e.body.vel.x, ENEMY_WALK_SPEED);
    }

    #[test]
    fn turn_flips_facing_only() {
        let mut e = enemy();
        assert_eq!(e.body.facing, Facing::Left);
        e.turn();
        assert_eq!(e.body.facing, Facing::Right);
        e.turn();
        assert_eq!(e.body.facing, Facing::Left);
    }

    #[test]
    fn dead_enemy_stops_updating() {
        let mut e = enemy();
        e.kill();
        let before = e.body.rect;
        let vel_before = e.body.vel;
        e.update(DT);
        assert_eq!(e.body.rect, before);
        assert_eq!(e.body.vel, vel_before);
        assert!(e.dead);
    }

    #[test]
    fn walk_animation_follows_facing() {
        let sprites = EnemySprites::default();
        let mut e = enemy();
        // Advance past one frame duration while walking left.
        for _ in 0..12 {
            e.update(DT);
        }
        assert_eq!(e.frame_id(), sprites.walk_left[1]);

        // Turning restarts the opposite cycle from its first frame.
        e.turn();
        e.update(DT);
        assert_eq!(e.frame_id(), sprites.walk_right[0]);
    }
}
