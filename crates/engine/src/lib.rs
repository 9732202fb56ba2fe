//! Game engine module.
//!
//! Binds the core scheduler to a concrete [`World`] and provides every
//! behavior that runs in it:
//!
//! - [`world`]: the shared state tasks mutate (canvas, obstacles, ship, input)
//! - [`behaviors`]: stars, ship, projectiles, garbage, explosions, overlays
//! - [`session`]: one game, built from a [`GameConfig`] and a sprite library
//! - [`config`]: environment-driven settings

pub mod behaviors;
pub mod config;
pub mod session;
pub mod world;

pub use space_garbage_core as core;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;

pub use config::GameConfig;
pub use session::Session;
pub use world::{GameScheduler, GameSpawner, ShipState, Stats, World};
