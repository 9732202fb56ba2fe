//! Ship module - animation frames and player-driven movement

use std::rc::Rc;

use log::info;

use crate::behaviors::{Fire, GameOver};
use crate::core::{to_cell, Delay, Rect, SpeedModel, Sprite, Step, Task};
use crate::input::read_controls;
use crate::term::{draw_frame, Canvas};
use crate::types::{SHIP_FRAME_TICKS, STEP_DELTA};
use crate::world::{GameSpawner, World};

/// Cycles the ship frames, publishing the current one in the world.
#[derive(Debug, Clone)]
pub struct AnimateSpaceship {
    frames: Vec<Rc<Sprite>>,
    index: usize,
    delay: Delay,
}

impl AnimateSpaceship {
    pub fn new(frames: Vec<Rc<Sprite>>) -> Self {
        Self {
            frames,
            index: 0,
            delay: Delay::default(),
        }
    }
}

impl Task<World> for AnimateSpaceship {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        if self.delay.poll() {
            return Step::Pending;
        }
        if self.frames.is_empty() {
            return Step::Done;
        }

        world.ship.frame = Some(Rc::clone(&self.frames[self.index]));
        self.index = (self.index + 1) % self.frames.len();
        self.delay.wait(SHIP_FRAME_TICKS);
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "animate_spaceship"
    }
}

/// New coordinate after moving by `delta`, kept inside `[0, max - size]`.
pub fn clamp_position(max: u16, size: usize, current: f64, delta: f64) -> f64 {
    let limit = max as f64 - size as f64;
    (current + delta).min(limit).max(0.0)
}

#[derive(Debug, Clone)]
struct Drawn {
    row: f64,
    col: f64,
    frame: Rc<Sprite>,
}

/// Player control: input, speed, clamping, firing and the crash check.
#[derive(Debug, Clone, Default)]
pub struct MoveShip {
    model: SpeedModel,
    drawn: Option<Drawn>,
}

impl MoveShip {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task<World> for MoveShip {
    fn step(&mut self, world: &mut World, spawner: &mut GameSpawner) -> Step {
        if let Some(prev) = self.drawn.take() {
            draw_frame(&mut world.canvas, prev.row, prev.col, &prev.frame, true);
        }

        let Some(frame) = world.ship.frame.clone() else {
            return Step::Pending;
        };
        let (frame_rows, frame_cols) = frame.size();

        let hull = Rect::new(
            to_cell(world.ship.row),
            to_cell(world.ship.col),
            frame_rows as i32,
            frame_cols as i32,
        );
        if world.obstacles.any_collision(&hull) {
            info!(
                "ship destroyed at ({:.1}, {:.1})",
                world.ship.row, world.ship.col
            );
            world.ship.alive = false;
            spawner.spawn(GameOver::new(Rc::clone(&world.sprites.gameover)));
            return Step::Done;
        }

        let controls = read_controls(&mut world.input);
        if controls.fire {
            spawner.spawn(Fire::new(
                world.ship.row,
                world.ship.col + frame_cols as f64 / 2.0,
            ));
        }

        let (row_speed, col_speed) = self.model.update(
            world.ship.row_speed,
            world.ship.col_speed,
            controls.rows,
            controls.cols,
        );
        world.ship.row_speed = row_speed;
        world.ship.col_speed = col_speed;

        let (max_rows, max_cols) = world.canvas.extent();
        let ship = &mut world.ship;
        ship.row = clamp_position(max_rows, frame_rows, ship.row, STEP_DELTA * row_speed);
        ship.col = clamp_position(max_cols, frame_cols, ship.col, STEP_DELTA * col_speed);

        draw_frame(&mut world.canvas, world.ship.row, world.ship.col, &frame, false);
        self.drawn = Some(Drawn {
            row: world.ship.row,
            col: world.ship.col,
            frame,
        });
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "move_ship"
    }
}
