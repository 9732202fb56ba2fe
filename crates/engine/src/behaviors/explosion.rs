//! Explosion module - one-shot debris animation

use log::trace;

use crate::core::{Sprite, Step, Task};
use crate::term::{draw_frame, Canvas};
use crate::world::{GameSpawner, World};

const EXPLOSION_FRAMES: [&str; 4] = [
    r"           (_)
       (  (   (  (
      () (  (  )
        ( )  ()",
    r"           (_)
       (  (   (
         (  (  )
          )  (",
    r"            (
          (   (
         (     (
          )  (",
    r"            (
              (
            (",
];

/// The explosion animation frames.
pub fn explosion_frames() -> Vec<Sprite> {
    EXPLOSION_FRAMES.iter().map(|t| Sprite::new(t)).collect()
}

/// Plays the explosion frames once around a center cell.
///
/// Each frame is shown for one tick and erased on the next.
#[derive(Debug, Clone)]
pub struct Explosion {
    frames: Vec<Sprite>,
    corner_row: f64,
    corner_col: f64,
    center: (i32, i32),
    index: usize,
    drawn: bool,
}

impl Explosion {
    pub fn new(center_row: i32, center_col: i32) -> Self {
        let frames = explosion_frames();
        let (rows, cols) = frames.first().map(Sprite::size).unwrap_or((0, 0));
        Self {
            corner_row: center_row as f64 - rows as f64 / 2.0,
            corner_col: center_col as f64 - cols as f64 / 2.0,
            center: (center_row, center_col),
            frames,
            index: 0,
            drawn: false,
        }
    }
}

impl Task<World> for Explosion {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        if self.drawn {
            let frame = &self.frames[self.index];
            draw_frame(&mut world.canvas, self.corner_row, self.corner_col, frame, true);
            self.drawn = false;
            self.index += 1;
            return Step::Pending;
        }

        let Some(frame) = self.frames.get(self.index) else {
            trace!("explosion at {:?} finished", self.center);
            return Step::Done;
        };
        if self.index == 0 {
            world.canvas.bell();
        }
        draw_frame(&mut world.canvas, self.corner_row, self.corner_col, frame, false);
        self.drawn = true;
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "explode"
    }
}
