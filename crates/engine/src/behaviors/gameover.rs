//! Game over module - the final banner

use std::rc::Rc;

use crate::core::{Sprite, Step, Task};
use crate::term::{draw_frame, Canvas};
use crate::world::{GameSpawner, World};

/// The terminal state: the game-over banner, redrawn centered every tick.
#[derive(Debug, Clone)]
pub struct GameOver {
    banner: Rc<Sprite>,
}

impl GameOver {
    pub fn new(banner: Rc<Sprite>) -> Self {
        Self { banner }
    }

    /// Top-left corner that centers the banner on a `rows` x `cols` canvas.
    pub fn position(&self, rows: u16, cols: u16) -> (i32, i32) {
        let row = rows as i32 / 2 - self.banner.rows() as i32 / 2;
        let col = cols as i32 / 2 - self.banner.first_line_width() as i32 / 2;
        (row, col)
    }
}

impl Task<World> for GameOver {
    fn step(&mut self, world: &mut World, _spawner: &mut GameSpawner) -> Step {
        let (rows, cols) = world.canvas.extent();
        let (row, col) = self.position(rows, cols);
        draw_frame(&mut world.canvas, row as f64, col as f64, &self.banner, false);
        Step::Pending
    }

    fn name(&self) -> &'static str {
        "show_gameover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_centered_on_first_line() {
        let over = GameOver::new(Rc::new(Sprite::new("GAME\nOVER!!")));
        assert_eq!(over.position(20, 40), (9, 18));
    }
}
