//! Garbage module - falling obstacles and the spawner that keeps them coming

use std::rc::Rc;

use log::debug;

use crate::behaviors::Explosion;
use crate::core::{to_cell, Delay, ObstacleId, Sprite, Step, Task};
use crate::term::{draw_frame, Canvas};
use crate::types::{GARBAGE_SPAWN_MAX_TICKS, GARBAGE_SPEED};
use crate::world::{GameSpawner, World};

/// One piece of garbage falling straight down from the top edge.
///
/// Registers an obstacle on its first turn and always deregisters it
/// before finishing.
#[derive(Debug, Clone)]
pub struct FlyGarbage {
    sprite: Rc<Sprite>,
    row: f64,
    col: i32,
    speed: f64,
    obstacle: Option<ObstacleId>,
    drawn: bool,
}

impl FlyGarbage {
    pub fn new(col: i32, sprite: Rc<Sprite>) -> Self {
        Self::with_speed(col, sprite, GARBAGE_SPEED)
    }

    pub fn with_speed(col: i32, sprite: Rc<Sprite>, speed: f64) -> Self {
        Self {
            sprite,
            row: 0.0,
            col,
            speed,
            obstacle: None,
            drawn: false,
        }
    }

    /// Cell the explosion is centered on: one up and one left of the
    /// sprite's middle cell.
    pub fn center(&self) -> (i32, i32) {
        let (rows, cols) = self.sprite.size();
        (
            to_cell(self.row) + rows as i32 / 2 - 1,
            self.col + cols as i32 / 2 - 1,
        )
    }

    fn register(&mut self, world: &mut World) -> ObstacleId {
        let (_, cols) = world.canvas.extent();
        self.col = self.col.clamp(0, (cols as i32 - 1).max(0));
        let (rows, cols) = self.sprite.size();
        world
            .obstacles
            .add(to_cell(self.row), self.col, rows as i32, cols as i32)
    }
}

impl Task<World> for FlyGarbage {
    fn step(&mut self, world: &mut World, spawner: &mut GameSpawner) -> Step {
        let id = match self.obstacle {
            Some(id) => id,
            None => {
                let id = self.register(world);
                self.obstacle = Some(id);
                id
            }
        };

        if self.drawn {
            draw_frame(&mut world.canvas, self.row, self.col as f64, &self.sprite, true);
            self.drawn = false;
            self.row += self.speed;
        }

        let (rows, _) = world.canvas.extent();
        if self.row >= rows as f64 {
            world.obstacles.remove(id);
            return Step::Done;
        }

        if world.obstacles.take_hit(id) {
            world.obstacles.remove(id);
            let (row, col) = self.center();
            debug!("garbage {} destroyed, exploding at ({}, {})", id.get(), row, col);
            spawner.spawn(Explosion::new(row, col));
            return Step::Done;
        }

        draw_frame(&mut world.canvas, self.row, self.col as f64, &self.sprite, false);
        self.drawn = true;
        if let Some(obstacle) = world.obstacles.get_mut(id) {
            obstacle.row = to_cell(self.row);
        }
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "fly_garbage"
    }
}

/// Keeps the orbit full: spawns a random piece of garbage at a random column,
/// waits a random number of ticks, repeats forever.
#[derive(Debug, Clone)]
pub struct GarbageSpawner {
    garbage: Vec<Rc<Sprite>>,
    delay: Delay,
}

impl GarbageSpawner {
    pub fn new(garbage: Vec<Rc<Sprite>>) -> Self {
        Self {
            garbage,
            delay: Delay::default(),
        }
    }
}

impl Task<World> for GarbageSpawner {
    fn step(&mut self, world: &mut World, spawner: &mut GameSpawner) -> Step {
        loop {
            if self.delay.poll() {
                return Step::Pending;
            }

            let Some(sprite) = world.rng.choose(&self.garbage).cloned() else {
                return Step::Done;
            };
            let (_, cols) = world.canvas.extent();
            let max_col = (cols as usize).saturating_sub(sprite.cols()) as u32;
            let col = world.rng.range_inclusive(0, max_col) as i32;
            spawner.spawn(FlyGarbage::new(col, sprite));

            let pause = world.rng.range_inclusive(1, GARBAGE_SPAWN_MAX_TICKS);
            if self.delay.wait(pause) {
                return Step::Pending;
            }
        }
    }

    fn name(&self) -> &'static str {
        "fill_orbit_with_garbage"
    }
}
