//! One game from start to game over: the world plus its scheduler.

use std::rc::Rc;

use log::{debug, info};

use crate::behaviors::{
    AnimateSpaceship, Blink, GarbageSpawner, MoveShip, ObstacleOverlay, StatsOverlay,
};
use crate::config::GameConfig;
use crate::core::{SpriteLibrary, Task, TaskId};
use crate::term::FrameBuffer;
use crate::types::{Key, BLINK_OFFSET_MAX_TICKS, STAR_SYMBOLS};
use crate::world::{GameScheduler, World};

pub struct Session {
    scheduler: GameScheduler,
    world: World,
}

impl Session {
    /// A full game: stars, the garbage spawner, the ship, and the debug
    /// overlays when `config.debug` is set.
    pub fn new(
        config: &GameConfig,
        sprites: SpriteLibrary,
        rows: u16,
        cols: u16,
        seed: u32,
    ) -> Self {
        let mut session = Self::bare(sprites, rows, cols, seed);

        for _ in 0..config.stars {
            let world = &mut session.world;
            let row = world.rng.next_range(rows as u32) as i32;
            let col = world.rng.next_range(cols as u32) as i32;
            let symbol = world.rng.choose(&STAR_SYMBOLS).copied().unwrap_or('*');
            let offset = world.rng.range_inclusive(1, BLINK_OFFSET_MAX_TICKS);
            session.spawn(Blink::new(row, col, symbol, offset));
        }

        let garbage = session.world.sprites.garbage_list();
        session.spawn(GarbageSpawner::new(garbage));
        session.spawn_ship();

        if config.debug {
            session.spawn(ObstacleOverlay::new());
            session.spawn(StatsOverlay::new());
        }

        info!(
            "session started: {}x{} canvas, {} tasks, seed {}",
            rows,
            cols,
            session.task_count(),
            seed
        );
        session
    }

    /// An empty world with no tasks.
    pub fn bare(sprites: SpriteLibrary, rows: u16, cols: u16, seed: u32) -> Self {
        Self {
            scheduler: GameScheduler::new(),
            world: World::new(Rc::new(sprites), rows, cols, seed),
        }
    }

    pub fn spawn(&mut self, task: impl Task<World> + 'static) -> TaskId {
        self.scheduler.spawn(task)
    }

    /// Ship animation followed by ship movement, in that order so the
    /// frame is published before the first move.
    pub fn spawn_ship(&mut self) {
        let frames = self.world.sprites.ship.clone();
        self.spawn(AnimateSpaceship::new(frames));
        self.spawn(MoveShip::new());
    }

    /// Run one scheduler pass.
    pub fn tick(&mut self) {
        self.world.stats.tasks = self.scheduler.len();
        self.world.stats.ticks = self.scheduler.ticks();
        let alive = self.world.ship.alive;

        self.scheduler.tick(&mut self.world);

        if alive && !self.world.ship.alive {
            info!("game over after {} ticks", self.scheduler.ticks());
        }
        debug!(
            "tick {}: {} tasks, {} obstacles",
            self.scheduler.ticks(),
            self.scheduler.len(),
            self.world.obstacles.len()
        );
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn canvas_mut(&mut self) -> &mut FrameBuffer {
        &mut self.world.canvas
    }

    /// Queue a key for the ship. Returns `false` when the queue is full.
    pub fn push_key(&mut self, key: Key) -> bool {
        self.world.input.push(key)
    }

    pub fn task_count(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_game_over(&self) -> bool {
        !self.world.ship.alive
    }
}
