//! Time Source
//!
//! Millisecond timestamps for the scheduler and the long-press tracker.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic-enough millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Virtual clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::new(10);
        let other = clock.clone();

        clock.advance(5);
        assert_eq!(other.now_ms(), 15);

        other.set(100);
        assert_eq!(clock.now_ms(), 100);
    }
}
