//! Static level description.
//!
//! The already-parsed entity list an external map loader produces: obstacle
//! rects plus player/coin/enemy spawn rects. The map *text* format and its
//! parser live outside the core; this is just the typed handoff, JSON-backed
//! so tools can emit it directly.

use serde::{Deserialize, Serialize};

use crate::components::coin::{Coin, CoinSprites};
use crate::components::enemy::{Enemy, EnemySprites, ENEMY_WALK_SPEED};
use crate::components::player::{Player, PlayerSprites};
use crate::core::rect::Rect;
use crate::core::world::World;

/// Enemy spawn: bounding box plus patrol speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub rect: Rect,
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
}

fn default_walk_speed() -> f32 {
    ENEMY_WALK_SPEED
}

/// A complete level: one player spawn, static blocks, pickups, enemies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub player: Rect,
    pub blocks: Vec<Rect>,
    #[serde(default)]
    pub coins: Vec<Rect>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
}

/// Why a level description was rejected.
#[derive(Debug)]
pub enum LevelError {
    Parse(serde_json::Error),
    /// A rect with zero or negative area. `what` names the list it came
    /// from, `index` its position there.
    DegenerateRect {
        what: &'static str,
        index: usize,
    },
    NegativeWalkSpeed {
        index: usize,
    },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Parse(e) => write!(f, "level parse error: {e}"),
            LevelError::DegenerateRect { what, index } => {
                write!(f, "degenerate {what} rect at index {index}")
            }
            LevelError::NegativeWalkSpeed { index } => {
                write!(f, "negative walk speed for enemy {index}")
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl LevelData {
    /// Parse and validate a JSON level description.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: LevelData = serde_json::from_str(json).map_err(LevelError::Parse)?;
        level.validate()?;
        Ok(level)
    }

    /// Reject degenerate geometry. Level data crosses the program boundary,
    /// so unlike in-code construction this reports instead of panicking.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.player.is_degenerate() {
            return Err(LevelError::DegenerateRect { what: "player", index: 0 });
        }
        for (index, rect) in self.blocks.iter().enumerate() {
            if rect.is_degenerate() {
                return Err(LevelError::DegenerateRect { what: "block", index });
            }
        }
        for (index, rect) in self.coins.iter().enumerate() {
            if rect.is_degenerate() {
                return Err(LevelError::DegenerateRect { what: "coin", index });
            }
        }
        for (index, spawn) in self.enemies.iter().enumerate() {
            if spawn.rect.is_degenerate() {
                return Err(LevelError::DegenerateRect { what: "enemy", index });
            }
            if spawn.walk_speed < 0.0 {
                return Err(LevelError::NegativeWalkSpeed { index });
            }
        }
        Ok(())
    }

    /// Build a ready world with the default sprite tables. The renderer maps
    /// the resulting frame ids onto its own atlas.
    pub fn build(&self) -> Result<World, LevelError> {
        self.build_with_sprites(PlayerSprites::default(), EnemySprites::default(), CoinSprites::default())
    }

    /// Build a ready world with explicit sprite tables.
    pub fn build_with_sprites(
        &self,
        player_sprites: PlayerSprites,
        enemy_sprites: EnemySprites,
        coin_sprites: CoinSprites,
    ) -> Result<World, LevelError> {
        self.validate()?;
        let player = Player::new(self.player, player_sprites);
        let mut world = World::new(player, self.blocks.clone());
        for spawn in &self.enemies {
            world.spawn_enemy(Enemy::new(spawn.rect, spawn.walk_speed, enemy_sprites.clone()));
        }
        for rect in &self.coins {
            world.spawn_coin(Coin::new(*rect, coin_sprites.clone()));
        }
        log::debug!(
            "level built: {} blocks, {} coins, {} enemies",
            self.blocks.len(),
            self.coins.len(),
            self.enemies.len()
        );
        Ok(world)
    }
}
