pub mod level;
pub mod rect;
pub mod time;
pub mod world;
