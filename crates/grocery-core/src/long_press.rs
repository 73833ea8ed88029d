//! Long-Press Tracking
//!
//! DOM-free press state machine. The host forwards press events with the
//! current time, sets a timer for the deadline returned by `press_start`,
//! and calls `poll` when that timer fires.

use crate::config::DEFAULT_LONG_PRESS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressPhase {
    Idle,
    Pressed { since_ms: u64 },
    /// Callback already ran for the current press
    Fired,
}

/// Fires `on_long_press` once per press held for at least `threshold_ms`
pub struct LongPressTracker<F: FnMut()> {
    on_long_press: F,
    threshold_ms: u64,
    phase: PressPhase,
}

impl<F: FnMut()> LongPressTracker<F> {
    pub fn new(on_long_press: F, threshold_ms: u64) -> Self {
        Self {
            on_long_press,
            threshold_ms,
            phase: PressPhase::Idle,
        }
    }

    pub fn with_default_threshold(on_long_press: F) -> Self {
        Self::new(on_long_press, DEFAULT_LONG_PRESS_MS)
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    /// Arm for a new press. Returns the deadline to set a timer for, or
    /// `None` if a press is already in progress.
    pub fn press_start(&mut self, now_ms: u64) -> Option<u64> {
        match self.phase {
            PressPhase::Idle => {
                self.phase = PressPhase::Pressed { since_ms: now_ms };
                Some(now_ms.saturating_add(self.threshold_ms))
            }
            PressPhase::Pressed { .. } | PressPhase::Fired => None,
        }
    }

    /// Release. Returns true if this press already fired, which lets the
    /// host swallow the click that follows.
    pub fn press_end(&mut self) -> bool {
        let fired = self.phase == PressPhase::Fired;
        self.phase = PressPhase::Idle;
        fired
    }

    /// Pointer left the surface or the touch was cancelled
    pub fn press_cancel(&mut self) {
        self.phase = PressPhase::Idle;
    }

    /// Component is going away; any pending deadline is void
    pub fn teardown(&mut self) {
        self.phase = PressPhase::Idle;
    }

    /// Timer callback. Runs `on_long_press` if the current press has been
    /// held past the threshold and has not fired yet. Stale timers from an
    /// earlier press see either `Idle` or a later `since_ms` and do nothing.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let PressPhase::Pressed { since_ms } = self.phase else {
            return false;
        };
        if now_ms.saturating_sub(since_ms) < self.threshold_ms {
            return false;
        }

        self.phase = PressPhase::Fired;
        (self.on_long_press)();
        true
    }

    pub fn is_pressed(&self) -> bool {
        !matches!(self.phase, PressPhase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_tracker(threshold_ms: u64) -> (LongPressTracker<impl FnMut()>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let tracker = LongPressTracker::new(move || counter.set(counter.get() + 1), threshold_ms);
        (tracker, count)
    }

    #[test]
    fn test_short_press_never_fires() {
        let (mut tracker, count) = counting_tracker(500);

        assert_eq!(tracker.press_start(1_000), Some(1_500));
        assert!(!tracker.poll(1_499));
        tracker.press_end();
        assert!(!tracker.poll(1_500));
        assert!(!tracker.poll(5_000));

        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_held_press_fires_exactly_once_without_press_end() {
        let (mut tracker, count) = counting_tracker(500);

        tracker.press_start(0);
        assert!(tracker.poll(500));
        assert!(!tracker.poll(600));
        assert!(!tracker.poll(10_000));

        assert_eq!(count.get(), 1);
        assert!(tracker.is_pressed());
    }

    #[test]
    fn test_repeated_press_start_does_not_rearm() {
        let (mut tracker, count) = counting_tracker(300);

        assert_eq!(tracker.press_start(0), Some(300));
        assert_eq!(tracker.press_start(100), None);
        assert_eq!(tracker.press_start(200), None);

        // Deadline still measured from the first press-start
        assert!(tracker.poll(300));
        assert_eq!(tracker.press_start(400), None);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_press_end_reports_whether_press_fired() {
        let (mut tracker, _) = counting_tracker(300);

        tracker.press_start(0);
        assert!(!tracker.press_end());

        tracker.press_start(1_000);
        tracker.poll(1_300);
        assert!(tracker.press_end());
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_cancel_disarms() {
        let (mut tracker, count) = counting_tracker(300);

        tracker.press_start(0);
        tracker.press_cancel();
        assert!(!tracker.poll(300));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_stale_timer_ignored_on_next_press() {
        let (mut tracker, count) = counting_tracker(300);

        tracker.press_start(0);
        tracker.press_end();
        tracker.press_start(200);

        // Timer armed by the first press fires at 300
        assert!(!tracker.poll(300));
        assert!(tracker.poll(500));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_rearms_after_completed_press() {
        let (mut tracker, count) = counting_tracker(300);

        tracker.press_start(0);
        tracker.poll(300);
        tracker.press_end();

        assert_eq!(tracker.press_start(1_000), Some(1_300));
        tracker.poll(1_300);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_teardown_voids_pending_deadline() {
        let (mut tracker, count) = counting_tracker(300);

        tracker.press_start(0);
        tracker.teardown();
        assert!(!tracker.poll(1_000));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_default_threshold() {
        let tracker = LongPressTracker::with_default_threshold(|| {});
        assert_eq!(tracker.threshold_ms(), 300);
    }
}
