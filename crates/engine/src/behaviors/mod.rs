//! Task bodies: everything that moves or blinks on screen.
//!
//! Each behavior is a small state machine implementing
//! [`Task<World>`](crate::core::Task). Animated behaviors follow the same
//! protocol: erase what they drew last turn, update, draw again.

pub mod debug;
pub mod explosion;
pub mod fire;
pub mod gameover;
pub mod garbage;
pub mod ship;
pub mod stars;

pub use debug::{ObstacleOverlay, StatsOverlay};
pub use explosion::{explosion_frames, Explosion};
pub use fire::Fire;
pub use gameover::GameOver;
pub use garbage::{FlyGarbage, GarbageSpawner};
pub use ship::{AnimateSpaceship, MoveShip};
pub use stars::Blink;
