//! Side-scrolling platformer simulation core.
//!
//! Entity motion integration, directional probe collision against a static
//! tile grid, and the small state machines behind character animation and
//! movement (ground/jump/fall, walk/run, facing). Rendering, assets, audio
//! playback and camera framing live in the embedder; the core consumes a
//! per-frame input snapshot plus a time delta and exports rectangles, frame
//! ids and one-shot events.
//!
//! Deterministic by construction: no randomness, no threads, single
//! ownership of all mutable state inside [`World`].

pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::types::WorldEvent;
pub use components::animation::FrameAnimation;
pub use components::body::{Body, Facing, VerticalState, GRAVITY, MAX_FALL_SPEED};
pub use components::coin::{Coin, CoinSprites};
pub use components::enemy::{Enemy, EnemySprites, ENEMY_WALK_SPEED};
pub use components::player::{Player, PlayerSprites, MAX_JUMPS};
pub use components::probes::ProbeSet;
pub use crate::core::level::{EnemySpawn, LevelData, LevelError};
pub use crate::core::rect::Rect;
pub use crate::core::time::FixedTimestep;
pub use crate::core::world::{World, DEFAULT_DT};
pub use input::state::InputState;
pub use systems::collision::{probe_contact, Contact};
