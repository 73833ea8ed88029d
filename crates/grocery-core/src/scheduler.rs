//! Deferred Sort Scheduler
//!
//! A queue of `(fire_at, seq) -> Action` entries. Every schedule call adds
//! its own entry; nothing is coalesced or cancelled since the sort it
//! carries is idempotent.

use std::collections::BTreeMap;

use crate::action::Action;

/// Handle describing one queued task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Absolute time the task becomes due
    pub fire_at_ms: u64,
    /// Delay it was scheduled with
    pub delay_ms: u64,
}

/// Time-ordered task queue, FIFO among equal fire times
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: BTreeMap<(u64, u64), Action>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, action: Action) -> ScheduledTask {
        let fire_at_ms = now_ms.saturating_add(delay_ms);
        self.tasks.insert((fire_at_ms, self.next_seq), action);
        self.next_seq += 1;
        ScheduledTask { fire_at_ms, delay_ms }
    }

    pub fn schedule_sort(&mut self, now_ms: u64, delay_ms: u64) -> ScheduledTask {
        self.schedule(now_ms, delay_ms, Action::SortCompletedBelowUncompleted)
    }

    /// Take the earliest task whose fire time is at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Action> {
        let (&(fire_at_ms, _), _) = self.tasks.first_key_value()?;
        if fire_at_ms > now_ms {
            return None;
        }
        self.tasks.pop_first().map(|(_, action)| action)
    }

    pub fn next_fire_at(&self) -> Option<u64> {
        self.tasks.keys().next().map(|&(fire_at_ms, _)| fire_at_ms)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
