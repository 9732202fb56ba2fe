//! Terminal input module.
//!
//! Key presses flow through three small pieces:
//! - [`map`] turns `crossterm` key events into abstract [`Key`](crate::types::Key)s
//! - [`queue`] buffers them between ticks (the game's input source)
//! - [`controls`] drains the source once per tick into a [`Controls`] snapshot

pub mod controls;
pub mod map;
pub mod queue;

pub use space_garbage_types as types;

pub use controls::{read_controls, Controls, InputSource};
pub use map::{map_key_event, should_quit};
pub use queue::KeyQueue;
