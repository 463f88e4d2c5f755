/// One-shot signals emitted during a world step.
///
/// The simulation core mutates no audio/FX state itself; it queues these for
/// the embedder to drain once per frame and react to (play a sound, spawn a
/// particle burst). Indices refer to the world's enemy/coin lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// The player left the ground (input jump or stomp bounce).
    Jumped,
    /// A coin was picked up. Fires exactly once per coin.
    CoinCollected { index: usize },
    /// An enemy was stomped. Fires exactly once per enemy.
    EnemyKilled { index: usize },
    /// An enemy bounced off a wall and reversed direction.
    EnemyTurned { index: usize },
}
