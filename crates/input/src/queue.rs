//! Bounded key buffer filled by the terminal pump and drained by the ship.

use arrayvec::ArrayVec;

use crate::controls::InputSource;
use crate::types::{Key, KEY_QUEUE_CAPACITY};

/// FIFO of pending key presses.
///
/// Presses beyond the capacity are dropped: nothing drains the queue once the
/// ship is gone, and holding a key must not grow memory without bound.
#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    keys: ArrayVec<Key, KEY_QUEUE_CAPACITY>,
    dropped: u64,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key. Returns `false` when the queue was full.
    pub fn push(&mut self, key: Key) -> bool {
        if self.keys.try_push(key).is_err() {
            self.dropped += 1;
            return false;
        }
        true
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Presses lost to a full queue so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Extend<Key> for KeyQueue {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl InputSource for KeyQueue {
    fn poll_key(&mut self) -> Option<Key> {
        if self.keys.is_empty() {
            return None;
        }
        Some(self.keys.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_come_out_in_order() {
        let mut q = KeyQueue::new();
        q.extend([Key::Up, Key::Fire, Key::Left]);
        assert_eq!(q.poll_key(), Some(Key::Up));
        assert_eq!(q.poll_key(), Some(Key::Fire));
        assert_eq!(q.poll_key(), Some(Key::Left));
        assert_eq!(q.poll_key(), None);
    }

    #[test]
    fn overflow_is_dropped() {
        let mut q = KeyQueue::new();
        for _ in 0..KEY_QUEUE_CAPACITY {
            assert!(q.push(Key::Down));
        }
        assert!(!q.push(Key::Up));
        assert_eq!(q.len(), KEY_QUEUE_CAPACITY);
        assert_eq!(q.dropped(), 1);
    }
}
