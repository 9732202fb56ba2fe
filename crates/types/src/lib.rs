//! Core types module - shared constants and small value types
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the simulation core, the terminal layer and the input layer alike.
//!
//! # Timing
//!
//! The game runs on a fixed tick. Behaviors never look at wall-clock time:
//! every delay is expressed as a number of ticks.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Default wall-clock sleep between scheduler passes |
//! | `SHIP_FRAME_TICKS` | 2 | Ticks each ship animation frame is shown |
//! | `GARBAGE_SPAWN_MAX_TICKS` | 30 | Upper bound of the pause between garbage spawns |
//!
//! # Examples
//!
//! ```
//! use space_garbage_types::{Direction, Key};
//!
//! assert_eq!(Direction::Negative.as_i8(), -1);
//! assert_eq!(Direction::Positive.as_f64(), 1.0);
//! assert_eq!(Key::Fire.as_str(), "fire");
//! ```

/// Default wall-clock sleep between two ticks (100ms)
pub const TICK_MS: u64 = 100;

/// Default number of background stars
pub const STARS: usize = 400;

/// Symbols a star is drawn with
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Ship displacement multiplier applied to the speed every tick
pub const STEP_DELTA: f64 = 1.6;

/// Ticks each ship animation frame stays current
pub const SHIP_FRAME_TICKS: u32 = 2;

/// Default fall speed of garbage (rows per tick)
pub const GARBAGE_SPEED: f64 = 0.5;

/// Upper bound (inclusive) of the random pause between two garbage spawns
pub const GARBAGE_SPAWN_MAX_TICKS: u32 = 30;

/// Default projectile displacement per tick
pub const FIRE_ROW_DELTA: f64 = -0.9;
pub const FIRE_COL_DELTA: f64 = 0.0;

/// Star blink schedule (ticks per phase)
pub const BLINK_DIM_TICKS: u32 = 20;
pub const BLINK_NORMAL_TICKS: u32 = 3;
pub const BLINK_BOLD_TICKS: u32 = 5;
pub const BLINK_PAUSE_MAX_TICKS: u32 = 50;
pub const BLINK_OFFSET_MAX_TICKS: u32 = 10;

/// Speed physics defaults
pub const SPEED_LIMIT: f64 = 2.0;
pub const SPEED_FADING: f64 = 0.8;

/// Maximum number of key presses buffered between two ticks
pub const KEY_QUEUE_CAPACITY: usize = 64;


/// One axis of player intent.
///
/// Rows grow downwards and columns grow to the right, so `Negative` on the
/// row axis means "up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Direction {
    pub fn as_i8(&self) -> i8 {
        match self {
            Direction::Negative => -1,
            Direction::Zero => 0,
            Direction::Positive => 1,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.as_i8() as f64
    }

    pub fn is_zero(&self) -> bool {
        *self == Direction::Zero
    }
}

/// Abstract key codes understood by the game.
///
/// Terminal-specific events are mapped into these by the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Lowercase name, used in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Fire => "fire",
        }
    }
}
