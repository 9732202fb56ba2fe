//! Shared state every behavior works on.

use std::rc::Rc;

use crate::core::{ObstacleRegistry, Scheduler, SimpleRng, Spawner, Sprite, SpriteLibrary};
use crate::input::KeyQueue;
use crate::term::FrameBuffer;

/// The scheduler specialised to the game world.
pub type GameScheduler = Scheduler<World>;
/// Spawn handle passed to every game task.
pub type GameSpawner = Spawner<World>;

/// The one ship of a session.
#[derive(Debug, Clone)]
pub struct ShipState {
    /// Frame published by the animation task; `None` until its first turn.
    pub frame: Option<Rc<Sprite>>,
    pub row: f64,
    pub col: f64,
    pub row_speed: f64,
    pub col_speed: f64,
    pub alive: bool,
}

impl ShipState {
    pub fn new(row: f64, col: f64) -> Self {
        Self {
            frame: None,
            row,
            col,
            row_speed: 0.0,
            col_speed: 0.0,
            alive: true,
        }
    }
}

/// Counters the debug overlay displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Live tasks at the start of the current tick.
    pub tasks: usize,
    pub ticks: u64,
}

/// Everything tasks share. Mutated only from inside a task's turn.
pub struct World {
    pub canvas: FrameBuffer,
    pub obstacles: ObstacleRegistry,
    pub ship: ShipState,
    pub input: KeyQueue,
    pub sprites: Rc<SpriteLibrary>,
    pub rng: SimpleRng,
    pub stats: Stats,
}

impl World {
    /// Empty world on a `rows` x `cols` canvas, ship at the center.
    pub fn new(sprites: Rc<SpriteLibrary>, rows: u16, cols: u16, seed: u32) -> Self {
        Self {
            canvas: FrameBuffer::new(cols, rows),
            obstacles: ObstacleRegistry::new(),
            ship: ShipState::new((rows / 2) as f64, (cols / 2) as f64),
            input: KeyQueue::new(),
            sprites,
            rng: SimpleRng::new(seed),
            stats: Stats::default(),
        }
    }
}
