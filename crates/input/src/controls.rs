//! Per-tick controls snapshot.

use crate::types::{Direction, Key};

/// Non-blocking source of key presses.
pub trait InputSource {
    /// Next pending key, or `None` when nothing is queued.
    fn poll_key(&mut self) -> Option<Key>;
}

/// What the player asked for during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub rows: Direction,
    pub cols: Direction,
    pub fire: bool,
}

/// Drain every pending key.
///
/// The last direction pressed on each axis wins; fire is set if it was
/// pressed at all.
pub fn read_controls<S: InputSource + ?Sized>(source: &mut S) -> Controls {
    let mut controls = Controls::default();

    while let Some(key) = source.poll_key() {
        match key {
            Key::Up => controls.rows = Direction::Negative,
            Key::Down => controls.rows = Direction::Positive,
            Key::Left => controls.cols = Direction::Negative,
            Key::Right => controls.cols = Direction::Positive,
            Key::Fire => controls.fire = true,
        }
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::KeyQueue;

    #[test]
    fn empty_source_is_idle() {
        let mut q = KeyQueue::new();
        assert_eq!(read_controls(&mut q), Controls::default());
    }

    #[test]
    fn last_direction_per_axis_wins() {
        let mut q = KeyQueue::new();
        q.extend([Key::Up, Key::Left, Key::Down, Key::Fire, Key::Right, Key::Left]);

        let c = read_controls(&mut q);
        assert_eq!(c.rows, Direction::Positive);
        assert_eq!(c.cols, Direction::Negative);
        assert!(c.fire);
        assert!(q.is_empty());
    }

    #[test]
    fn drained_source_yields_idle_next_tick() {
        let mut q = KeyQueue::new();
        q.push(Key::Fire);
        assert!(read_controls(&mut q).fire);
        assert!(!read_controls(&mut q).fire);
    }
}
