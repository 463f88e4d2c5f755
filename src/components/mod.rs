pub mod animation;
pub mod body;
pub mod coin;
pub mod enemy;
pub mod player;
pub mod probes;
