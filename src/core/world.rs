//! World step orchestration.
//!
//! Single-threaded, cooperative: one step runs to completion before the
//! next frame's input is sampled. All bodies and probes are owned here and
//! mutated exclusively during the step; the block list is read-only. Given
//! identical input and delta sequences, trajectories are bit-identical;
//! there is no randomness anywhere in the core.

use crate::api::types::WorldEvent;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::core::rect::Rect;
use crate::core::time::FixedTimestep;
use crate::input::state::InputState;
use crate::systems::collision::{
    resolve_enemy_blocks, resolve_player_blocks, resolve_player_coins, resolve_player_enemy,
};

/// Default simulation tick rate.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// The simulation world: one player, dynamic enemies and coins, and the
/// static obstacle list for the level.
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    /// Static obstacles, immutable for the duration of the level.
    pub blocks: Vec<Rect>,
    events: Vec<WorldEvent>,
    timestep: FixedTimestep,
}

impl World {
    pub fn new(player: Player, blocks: Vec<Rect>) -> Self {
        Self {
            player,
            enemies: Vec::new(),
            coins: Vec::new(),
            blocks,
            events: Vec::new(),
            timestep: FixedTimestep::new(DEFAULT_DT),
        }
    }

    pub fn with_timestep(mut self, dt: f32) -> Self {
        self.timestep = FixedTimestep::new(dt);
        self
    }

    pub fn spawn_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn spawn_coin(&mut self, coin: Coin) {
        self.coins.push(coin);
    }

    /// Run one simulation tick. The ordering contract:
    ///
    /// 1. player input + integration
    /// 2. coin animations
    /// 3. enemy integration
    /// 4. player vs blocks
    /// 5. player vs coins
    /// 6. enemies vs blocks
    /// 7. player vs enemies
    ///
    /// Dead enemies are skipped everywhere; an enemy stomped this frame
    /// must not be walkable-into next frame.
    pub fn step(&mut self, dt: f32, input: &InputState) {
        assert!(dt >= 0.0, "negative frame delta: {dt}");

        self.player.update(dt, input, &mut self.events);

        for coin in &mut self.coins {
            coin.update(dt);
        }

        for enemy in &mut self.enemies {
            if !enemy.dead {
                enemy.update(dt);
            }
        }

        resolve_player_blocks(&mut self.player, &self.blocks);

        resolve_player_coins(&self.player.body.rect, &mut self.coins, &mut self.events);

        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if !enemy.dead && resolve_enemy_blocks(enemy, &self.blocks) {
                self.events.push(WorldEvent::EnemyTurned { index });
                log::trace!("enemy {index} wall bounce");
            }
        }

        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if enemy.dead {
                continue;
            }
            if resolve_player_enemy(&mut self.player, enemy, &mut self.events) {
                self.events.push(WorldEvent::EnemyKilled { index });
                log::debug!("enemy {index} stomped");
            }
        }
    }

    /// Feed a variable render-frame delta; runs zero or more fixed ticks.
    /// Returns the number of ticks run.
    ///
    /// The edge-triggered jump press fires on the first tick only, so a
    /// long frame cannot spend the whole double-jump budget at once.
    pub fn advance(&mut self, frame_dt: f32, input: &InputState) -> u32 {
        let steps = self.timestep.accumulate(frame_dt);
        let mut tick_input = *input;
        for _ in 0..steps {
            self.step(self.timestep.dt(), &tick_input);
            tick_input.jump_pressed = false;
        }
        steps
    }

    /// Interpolation alpha for rendering between ticks.
    pub fn render_alpha(&self) -> f32 {
        self.timestep.alpha()
    }

    /// One-shot events queued since the last drain. The embedder (audio,
    /// FX) takes them once per frame.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at queued events without draining.
    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }

    /// Live (non-dead) enemy count, handy for win conditions upstream.
    pub fn live_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| !e.dead).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::VerticalState;
    use crate::components::coin::CoinSprites;
    use crate::components::enemy::EnemySprites;
    use crate::components::player::{PlayerSprites, JUMP_SPEED};

    const DT: f32 = 1.0 / 60.0;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Rect::new(x, y, 32.0, 32.0), PlayerSprites::default())
    }

    fn floor() -> Vec<Rect> {
        // A wide floor strip at y = 100.
        (0..10).map(|i| Rect::new(i as f32 * 32.0, 100.0, 32.0, 32.0)).collect()
    }

    #[test]
    fn falling_body_settles_exactly_on_the_floor() {
        // End-to-end: block at (0,100,32,32), body from (0,0,32,32),
        // stepping at 1/60 until the down probe first overlaps.
        let mut world = World::new(player_at(0.0, 0.0), vec![Rect::new(0.0, 100.0, 32.0, 32.0)]);
        let input = InputState::default();

        for _ in 0..600 {
            world.step(DT, &input);
            if world.player.body.vertical == VerticalState::OnGround {
                break;
            }
        }

        assert_eq!(world.player.body.rect.y, 68.0); // 100 - 32, exact
        assert_eq!(world.player.body.vertical, VerticalState::OnGround);
        assert_eq!(world.player.body.vel.y, 0.0);
    }

    #[test]
    fn deterministic_trajectories() {
        let inputs = [
            InputState { right: true, ..Default::default() },
            InputState { right: true, run: true, ..Default::default() },
            InputState { jump_pressed: true, ..Default::default() },
            InputState::default(),
        ];

        let run = || {
            let mut world = World::new(player_at(16.0, 0.0), floor());
            world.spawn_enemy(Enemy::new(
                Rect::new(200.0, 0.0, 32.0, 32.0),
                100.0,
                EnemySprites::default(),
            ));
            for i in 0..240 {
                world.step(DT, &inputs[i % inputs.len()]);
            }
            (
                world.player.body.rect,
                world.enemies[0].body.rect,
                world.player.body.vel,
            )
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn stomp_chain_through_a_full_step() {
        let mut world = World::new(player_at(100.0, 20.0), floor());
        world.spawn_enemy(Enemy::new(
            Rect::new(100.0, 68.0, 32.0, 32.0), // patrolling on the floor
            0.0,                                // hold still for the test
            EnemySprites::default(),
        ));
        let input = InputState::default();

        // Fall until the stomp lands.
        let mut stomped = false;
        for _ in 0..600 {
            world.step(DT, &input);
            if world.enemies[0].dead {
                stomped = true;
                break;
            }
        }

        assert!(stomped);
        assert_eq!(world.player.body.vel.y, -JUMP_SPEED);
        assert_eq!(world.player.jumps_used(), 1);
        assert_eq!(world.live_enemies(), 0);
        let events = world.drain_events();
        assert!(events.contains(&WorldEvent::EnemyKilled { index: 0 }));
        assert!(events.contains(&WorldEvent::Jumped));
    }

    #[test]
    fn dead_enemy_is_skipped_by_later_passes() {
        let mut world = World::new(player_at(100.0, 20.0), floor());
        world.spawn_enemy(Enemy::new(
            Rect::new(100.0, 68.0, 32.0, 32.0),
            0.0,
            EnemySprites::default(),
        ));
        let input = InputState::default();

        for _ in 0..600 {
            world.step(DT, &input);
            if world.enemies[0].dead {
                break;
            }
        }
        assert!(world.enemies[0].dead);
        let corpse = world.enemies[0].body.rect;

        // Keep stepping: the corpse must not move, and walking through its
        // position must not collide.
        let walk = InputState { left: true, ..Default::default() };
        for _ in 0..120 {
            world.step(DT, &walk);
        }
        assert_eq!(world.enemies[0].body.rect, corpse);
        let events = world.drain_events();
        assert_eq!(
            events.iter().filter(|e| matches!(e, WorldEvent::EnemyKilled { .. })).count(),
            1
        );
    }

    #[test]
    fn coin_collection_emits_one_event() {
        let mut world = World::new(player_at(0.0, 60.0), vec![Rect::new(0.0, 100.0, 320.0, 32.0)]);
        world.spawn_coin(Coin::new(Rect::new(4.0, 80.0, 16.0, 16.0), CoinSprites::default()));
        let input = InputState::default();

        for _ in 0..120 {
            world.step(DT, &input);
        }

        assert!(world.coins[0].collected);
        let events = world.drain_events();
        assert_eq!(
            events.iter().filter(|e| matches!(e, WorldEvent::CoinCollected { .. })).count(),
            1
        );
    }

    #[test]
    fn enemy_patrols_between_walls() {
        // Floor plus two walls; the enemy must bounce back and forth and
        // never escape the corridor.
        let mut blocks = floor();
        blocks.push(Rect::new(-32.0, 0.0, 32.0, 132.0));
        blocks.push(Rect::new(320.0, 0.0, 32.0, 132.0));
        // Player spawns past the right wall and falls out of play; the
        // corridor belongs to the enemy.
        let mut world = World::new(player_at(400.0, 0.0), blocks);
        world.spawn_enemy(Enemy::new(
            Rect::new(150.0, 68.0, 32.0, 32.0),
            100.0,
            EnemySprites::default(),
        ));
        let input = InputState::default();

        let mut turns = 0;
        for _ in 0..3000 {
            world.step(DT, &input);
            turns += world
                .drain_events()
                .iter()
                .filter(|e| matches!(e, WorldEvent::EnemyTurned { .. }))
                .count();
            let r = &world.enemies[0].body.rect;
            assert!(r.left() >= 0.0 - 1.0 && r.right() <= 320.0 + 1.0);
        }
        assert!(turns >= 2, "enemy should have bounced at least twice, got {turns}");
    }

    #[test]
    fn advance_runs_whole_ticks_and_fires_jump_once() {
        let mut world = World::new(player_at(0.0, 68.0), vec![Rect::new(0.0, 100.0, 64.0, 32.0)]);
        // Settle first.
        world.step(DT, &InputState::default());
        world.step(DT, &InputState::default());
        world.drain_events();

        // A long frame worth several ticks with jump held: one jump only.
        let input = InputState { jump_pressed: true, ..Default::default() };
        let steps = world.advance(4.5 * DT, &input);
        assert_eq!(steps, 4);
        let jumps = world
            .drain_events()
            .iter()
            .filter(|e| **e == WorldEvent::Jumped)
            .count();
        assert_eq!(jumps, 1);
    }
}
