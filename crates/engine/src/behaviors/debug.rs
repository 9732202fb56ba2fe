//! Debug overlays, enabled with `SPACE_GARBAGE_DEBUG`.

use crate::core::{Sprite, Step, Task};
use crate::term::{draw_frame, put_text, Canvas, CellStyle};
use crate::types::STEP_DELTA;
use crate::world::{GameSpawner, World};

/// Outlines every obstacle's collision box.
#[derive(Debug, Clone, Default)]
pub struct ObstacleOverlay {
    drawn: Vec<(i32, i32, Sprite)>,
}

impl ObstacleOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<World> for ObstacleOverlay {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        for (row, col, frame) in self.drawn.drain(..) {
            draw_frame(&mut world.canvas, row as f64, col as f64, &frame, true);
        }

        for obstacle in world.obstacles.all() {
            let bbox = obstacle.bounding_box();
            let frame = Sprite::new(&obstacle.bounding_box_frame());
            self.drawn.push((bbox.row, bbox.col, frame));
        }
        for (row, col, frame) in &self.drawn {
            draw_frame(&mut world.canvas, *row as f64, *col as f64, frame, false);
        }
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "show_obstacles"
    }
}

/// Ship telemetry in the top-left corner and the task count in the top-right.
#[derive(Debug, Clone, Default)]
pub struct StatsOverlay;

impl StatsOverlay {
    pub fn new() -> Self {
        Self
    }

    /// Lines shown in the top-left corner, one per row starting at row 1.
    pub fn ship_lines(world: &World) -> [String; 8] {
        let ship = &world.ship;
        [
            format!("row speed: {:.3}", ship.row_speed),
            format!("col speed: {:.3}", ship.col_speed),
            String::new(),
            format!("row delta: {:.3}", STEP_DELTA * ship.row_speed),
            format!("col delta: {:.3}", STEP_DELTA * ship.col_speed),
            String::new(),
            format!("row current: {:.3}", ship.row),
            format!("col current: {:.3}", ship.col),
        ]
    }
}

// Wide enough that a shorter value fully overwrites a longer one.
const FIELD_WIDTH: usize = 24;

impl Task<World> for StatsOverlay {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        let style = CellStyle::normal();
        for (i, line) in Self::ship_lines(world).iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let padded = format!("{:<width$}", line, width = FIELD_WIDTH);
            put_text(&mut world.canvas, 1 + i as i32, 1, &padded, style);
        }

        let (_, cols) = world.canvas.extent();
        let tasks = format!("tasks: {:<5}", world.stats.tasks);
        let col = cols as i32 - tasks.chars().count() as i32 - 1;
        put_text(&mut world.canvas, 0, col, &tasks, style);
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "stats_overlay"
    }
}
