//! Obstacle registry: the falling garbage every collision check runs against.

use std::collections::HashSet;

use crate::collision::{has_collision, Rect};

/// Identity of a registered obstacle. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u64);

impl ObstacleId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// One falling hazard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    id: ObstacleId,
    pub row: i32,
    pub col: i32,
    rows: i32,
    cols: i32,
}

impl Obstacle {
    pub fn id(&self) -> ObstacleId {
        self.id
    }

    /// (rows, cols), fixed at creation.
    pub fn size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Exact rectangle covered by the sprite.
    pub fn rect(&self) -> Rect {
        Rect::new(self.row, self.col, self.rows, self.cols)
    }

    /// Collision rectangle: the sprite grown by one cell on every side.
    ///
    /// Obstacles move up to a cell per tick, the margin keeps fast objects
    /// from slipping between two checks.
    pub fn bounding_box(&self) -> Rect {
        self.rect().padded(1)
    }

    /// Collision test against the padded bounding box.
    pub fn has_collision(&self, other: &Rect) -> bool {
        has_collision(&self.bounding_box(), other)
    }

    /// Outline of the bounding box as sprite text, for the debug overlay.
    ///
    /// The outline sits on the border cells of [`Obstacle::bounding_box`]:
    /// corners are blank, horizontal edges are `-`, vertical edges `|`.
    pub fn bounding_box_frame(&self) -> String {
        let inner = self.cols.max(0) as usize;
        let horizontal = format!(" {} ", "-".repeat(inner));
        let side = format!("|{}|", " ".repeat(inner));
        let mut out = String::with_capacity((inner + 3) * (self.rows.max(0) as usize + 2));
        out.push_str(&horizontal);
        for _ in 0..self.rows.max(0) {
            out.push('\n');
            out.push_str(&side);
        }
        out.push('\n');
        out.push_str(&horizontal);
        out
    }
}

/// Identity-keyed set of live obstacles plus pending hit markers.
#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    hits: HashSet<ObstacleId>,
    next_id: u64,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new obstacle and return its identity.
    pub fn add(&mut self, row: i32, col: i32, rows: i32, cols: i32) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            row,
            col,
            rows,
            cols,
        });
        id
    }

    /// Deregister an obstacle. Any unconsumed hit marker goes with it.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.hits.remove(&id);
        let idx = self.obstacles.iter().position(|o| o.id == id)?;
        Some(self.obstacles.swap_remove(idx))
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }

    /// Every live obstacle. Order is unspecified.
    pub fn all(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    /// Record a projectile hit. Ignored for unknown obstacles.
    pub fn mark_hit(&mut self, id: ObstacleId) {
        if self.contains(id) {
            self.hits.insert(id);
        }
    }

    /// Consume the hit marker of `id`. Returns `true` at most once per hit.
    pub fn take_hit(&mut self, id: ObstacleId) -> bool {
        self.hits.remove(&id)
    }

    /// First obstacle whose exact rectangle collides with `rect`.
    pub fn find_hit(&self, rect: &Rect) -> Option<ObstacleId> {
        self.obstacles
            .iter()
            .find(|o| has_collision(&o.rect(), rect))
            .map(Obstacle::id)
    }

    /// Whether any padded bounding box collides with `rect`.
    pub fn any_collision(&self, rect: &Rect) -> bool {
        self.obstacles.iter().any(|o| o.has_collision(rect))
    }
}
