//! Core simulation module - pure, deterministic, and testable
//!
//! Holds everything the game loop needs that does not touch a terminal:
//!
//! - [`scheduler`]: cooperative task scheduler and the [`Delay`] tick counter
//! - [`collision`]: corner-containment rectangle test
//! - [`obstacles`]: identity-keyed registry of falling garbage and hit markers
//! - [`physics`]: ship speed accumulation
//! - [`sprite`]: immutable text sprites and the on-disk sprite library
//! - [`rng`]: seedable LCG so sessions can be replayed
//!
//! # Example
//!
//! ```
//! use space_garbage_core::{has_collision, ObstacleRegistry, Rect};
//!
//! let mut registry = ObstacleRegistry::new();
//! let id = registry.add(0, 10, 3, 4);
//!
//! // A projectile cell inside the sprite.
//! assert_eq!(registry.find_hit(&Rect::point(2, 12)), Some(id));
//! assert!(has_collision(&Rect::new(0, 0, 2, 2), &Rect::new(1, 1, 2, 2)));
//! ```

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rng;
pub mod scheduler;
pub mod sprite;

pub use space_garbage_types as types;

pub use collision::{has_collision, to_cell, Rect};
pub use obstacles::{Obstacle, ObstacleId, ObstacleRegistry};
pub use physics::{update_speed, SpeedModel};
pub use rng::SimpleRng;
pub use scheduler::{Delay, Scheduler, Spawner, Step, Task, TaskId};
pub use sprite::{load_dir, Sprite, SpriteError, SpriteLibrary, SpriteMap};
