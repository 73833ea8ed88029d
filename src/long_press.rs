//! Long-Press Handlers
//!
//! Binds `grocery_core::LongPressTracker` to mouse and touch events.
//! Pending timers are `gloo_timers` timeouts, which cancel on drop, so
//! releasing the press or unmounting the component disarms them.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use grocery_core::{Clock, LongPressTracker};

use crate::browser::BrowserClock;

type Tracker = LongPressTracker<Box<dyn FnMut()>>;

/// Per-element long-press state
#[derive(Clone, Copy)]
pub struct LongPress {
    tracker: StoredValue<Tracker, LocalStorage>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

/// Create long-press state that calls `on_long_press` once per press held
/// for `threshold_ms`. Cleans itself up when the owning component unmounts.
pub fn use_long_press(on_long_press: impl FnMut() + 'static, threshold_ms: u64) -> LongPress {
    let long_press = LongPress {
        tracker: StoredValue::new_local(LongPressTracker::new(
            Box::new(on_long_press) as Box<dyn FnMut()>,
            threshold_ms,
        )),
        timer: StoredValue::new_local(None),
    };

    on_cleanup(move || {
        long_press.timer.try_update_value(|timer| *timer = None);
        long_press.tracker.try_update_value(|tracker| tracker.teardown());
    });

    long_press
}

impl LongPress {
    /// Arm unless a press is already in progress
    pub fn start(self) {
        let now = BrowserClock.now_ms();
        let Some(deadline) = self.tracker.try_update_value(|t| t.press_start(now)).flatten() else {
            return;
        };

        let delay = u32::try_from(deadline.saturating_sub(now)).unwrap_or(u32::MAX);
        let timer = Timeout::new(delay, move || {
            let now = BrowserClock.now_ms().max(deadline);
            self.tracker.try_update_value(|t| t.poll(now));
        });
        self.timer.try_update_value(|slot| *slot = Some(timer));
    }

    /// Press released. Returns true when the press already fired, so the
    /// click that follows the release can be swallowed.
    pub fn end(self) -> bool {
        self.timer.try_update_value(|timer| *timer = None);
        self.tracker
            .try_update_value(|t| t.press_end())
            .unwrap_or(false)
    }

    /// Pointer left the element or the touch was cancelled
    pub fn cancel(self) {
        self.timer.try_update_value(|timer| *timer = None);
        self.tracker.try_update_value(|t| t.press_cancel());
    }
}

/// mousedown handler: primary button only
pub fn make_on_mousedown(long_press: LongPress) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            long_press.start();
        }
    }
}

pub fn make_on_touchstart(long_press: LongPress) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| long_press.start()
}

pub fn make_on_mouseleave(long_press: LongPress) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| long_press.cancel()
}

pub fn make_on_touchcancel(long_press: LongPress) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |_ev: web_sys::TouchEvent| long_press.cancel()
}
