//! Stars module - background blinking

use crate::core::{Delay, Step, Task};
use crate::term::{put_glyph, CellStyle};
use crate::types::{
    BLINK_BOLD_TICKS, BLINK_DIM_TICKS, BLINK_NORMAL_TICKS, BLINK_PAUSE_MAX_TICKS,
};
use crate::world::{GameSpawner, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dim,
    Normal,
    Bold,
    NormalAgain,
    Pause,
}

/// A background star cycling dim, normal, bold, normal, then a random pause.
///
/// Never finishes on its own.
#[derive(Debug, Clone)]
pub struct Blink {
    row: i32,
    col: i32,
    symbol: char,
    phase: Phase,
    delay: Delay,
}

impl Blink {
    /// `offset` ticks pass before the first dim frame, so stars created
    /// together do not pulse in unison.
    pub fn new(row: i32, col: i32, symbol: char, offset: u32) -> Self {
        Self {
            row,
            col,
            symbol,
            phase: Phase::Dim,
            delay: Delay::ticks(offset),
        }
    }
}

impl Task<World> for Blink {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        loop {
            if self.delay.poll() {
                return Step::Pending;
            }

            let (style, ticks, next) = match self.phase {
                Phase::Dim => (Some(CellStyle::dim()), BLINK_DIM_TICKS, Phase::Normal),
                Phase::Normal => (Some(CellStyle::normal()), BLINK_NORMAL_TICKS, Phase::Bold),
                Phase::Bold => (Some(CellStyle::bold()), BLINK_BOLD_TICKS, Phase::NormalAgain),
                Phase::NormalAgain => (Some(CellStyle::normal()), BLINK_NORMAL_TICKS, Phase::Pause),
                Phase::Pause => (
                    None,
                    world.rng.range_inclusive(1, BLINK_PAUSE_MAX_TICKS),
                    Phase::Dim,
                ),
            };

            if let Some(style) = style {
                put_glyph(&mut world.canvas, self.row, self.col, self.symbol, style);
            }
            self.phase = next;

            if self.delay.wait(ticks) {
                return Step::Pending;
            }
        }
    }

    fn name(&self) -> &'static str {
        "blink"
    }
}
