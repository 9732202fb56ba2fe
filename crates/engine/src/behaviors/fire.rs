//! Fire module - projectiles from muzzle flash to hit or exit

use log::debug;

use crate::core::{to_cell, Rect, Step, Task};
use crate::term::{put_glyph, Canvas, CellStyle};
use crate::types::{FIRE_COL_DELTA, FIRE_ROW_DELTA};
use crate::world::{GameSpawner, World};

/// Muzzle flash glyphs, one per tick before the shot leaves.
const FLASH: [char; 3] = ['*', 'O', ' '];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flash(usize),
    Flight,
}

/// A projectile: short muzzle flash, then straight flight until it leaves the
/// screen or hits an obstacle.
#[derive(Debug, Clone)]
pub struct Fire {
    row: f64,
    col: f64,
    row_delta: f64,
    col_delta: f64,
    phase: Phase,
    drawn: Option<(i32, i32)>,
}

impl Fire {
    /// Shot going straight up at the default speed.
    pub fn new(row: f64, col: f64) -> Self {
        Self::with_delta(row, col, FIRE_ROW_DELTA, FIRE_COL_DELTA)
    }

    pub fn with_delta(row: f64, col: f64, row_delta: f64, col_delta: f64) -> Self {
        Self {
            row,
            col,
            row_delta,
            col_delta,
            phase: Phase::Flash(0),
            drawn: None,
        }
    }

    fn symbol(&self) -> char {
        if self.col_delta != 0.0 {
            '-'
        } else {
            '|'
        }
    }
}

impl Task<World> for Fire {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        let style = CellStyle::normal();

        if let Phase::Flash(n) = self.phase {
            put_glyph(&mut world.canvas, to_cell(self.row), to_cell(self.col), FLASH[n], style);
            self.phase = if n + 1 < FLASH.len() {
                Phase::Flash(n + 1)
            } else {
                world.canvas.bell();
                Phase::Flight
            };
            return Step::Pending;
        }

        if let Some((r, c)) = self.drawn.take() {
            put_glyph(&mut world.canvas, r, c, ' ', style);
        }

        self.row += self.row_delta;
        self.col += self.col_delta;

        let (rows, cols) = world.canvas.extent();
        let (max_row, max_col) = (rows as f64 - 1.0, cols as f64 - 1.0);
        if !(0.0 < self.row && self.row < max_row && 0.0 < self.col && self.col < max_col) {
            return Step::Done;
        }

        let (r, c) = (to_cell(self.row), to_cell(self.col));
        if let Some(id) = world.obstacles.find_hit(&Rect::point(r, c)) {
            debug!("projectile hit obstacle {} at ({}, {})", id.get(), r, c);
            world.obstacles.mark_hit(id);
            return Step::Done;
        }

        put_glyph(&mut world.canvas, r, c, self.symbol(), style);
        self.drawn = Some((r, c));
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "fire"
    }
}
