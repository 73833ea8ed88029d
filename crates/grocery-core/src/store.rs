//! Grocery Store
//!
//! Owns the list, its storage and the pending-task queue. All mutation goes
//! through `dispatch`; deferred actions are drained by `run_due` /
//! `run_until`, one at a time, exactly like user actions.

use crate::action::{Action, Effect};
use crate::clock::Clock;
use crate::config::GroceryConfig;
use crate::model::{Grocery, GroceryState};
use crate::persistence;
use crate::reducer::reduce;
use crate::scheduler::{ScheduledTask, Scheduler};
use crate::storage::KeyValueStore;

pub struct GroceryStore<S: KeyValueStore, C: Clock> {
    state: GroceryState,
    storage: S,
    clock: C,
    scheduler: Scheduler,
    config: GroceryConfig,
}

impl<S: KeyValueStore, C: Clock> GroceryStore<S, C> {
    /// Load the list from `storage` (empty on any failure)
    pub fn open(storage: S, clock: C, config: GroceryConfig) -> Self {
        let state = persistence::load(&storage, &config.storage_key);
        Self::with_initial_state(state, storage, clock, config)
    }

    /// Start from a given state without reading storage. The state goes
    /// through the same id and duplicate cleanup as a load.
    pub fn with_initial_state(state: GroceryState, storage: S, clock: C, config: GroceryConfig) -> Self {
        Self {
            state: GroceryState::from_records(state.groceries),
            storage,
            clock,
            scheduler: Scheduler::new(),
            config,
        }
    }

    /// Apply one action. Saves when the list changed and returns the tasks
    /// the transition scheduled, so the host can arm real timers for them.
    pub fn dispatch(&mut self, action: Action) -> Vec<ScheduledTask> {
        log::debug!("[store] dispatch {:?}", action);
        let transition = reduce(&self.state, action);

        if transition.state != self.state {
            self.state = transition.state;
            persistence::save(&self.storage, &self.config.storage_key, &self.state);
        }

        let now_ms = self.clock.now_ms();
        transition
            .effects
            .into_iter()
            .map(|effect| match effect {
                Effect::ScheduleSort => self.scheduler.schedule_sort(now_ms, self.config.sort_delay_ms),
            })
            .collect()
    }

    /// Dispatch every task due by the clock's current time
    pub fn run_due(&mut self) -> usize {
        let now_ms = self.clock.now_ms();
        self.run_until(now_ms)
    }

    /// Dispatch every task due by `at_ms` or by the current time, whichever
    /// is later. Timer callbacks pass their task's fire time so a timer that
    /// wakes a millisecond early still runs its task.
    pub fn run_until(&mut self, at_ms: u64) -> usize {
        let now_ms = at_ms.max(self.clock.now_ms());
        let mut ran = 0;
        while let Some(action) = self.scheduler.pop_due(now_ms) {
            // Deferred actions only ever produce sorts, which schedule nothing
            let scheduled = self.dispatch(action);
            debug_assert!(scheduled.is_empty());
            ran += 1;
        }
        ran
    }

    pub fn state(&self) -> &GroceryState {
        &self.state
    }

    pub fn groceries(&self) -> &[Grocery] {
        &self.state.groceries
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn next_fire_at(&self) -> Option<u64> {
        self.scheduler.next_fire_at()
    }

    pub fn config(&self) -> &GroceryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStore;

    fn store() -> (GroceryStore<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let storage = MemoryStore::new();
        let clock = ManualClock::new(0);
        let store = GroceryStore::open(storage.clone(), clock.clone(), GroceryConfig::default());
        (store, storage, clock)
    }

    #[test]
    fn test_toggle_schedules_sort_at_configured_delay() {
        let (mut store, _, clock) = store();
        store.dispatch(Action::add("Gulrot"));
        clock.set(1_000);

        let scheduled = store.dispatch(Action::toggle("gulrot"));

        assert_eq!(scheduled, vec![ScheduledTask { fire_at_ms: 3_000, delay_ms: 2_000 }]);
        assert_eq!(store.pending_tasks(), 1);
        assert_eq!(store.next_fire_at(), Some(3_000));
    }

    #[test]
    fn test_run_until_uses_later_of_given_time_and_clock() {
        let (mut store, _, clock) = store();
        store.dispatch(Action::add("Gulrot"));
        store.dispatch(Action::toggle("Gulrot"));
        clock.set(1_999);

        assert_eq!(store.run_due(), 0);
        assert_eq!(store.run_until(2_000), 1);
        assert_eq!(store.pending_tasks(), 0);
    }

    #[test]
    fn test_noop_transition_does_not_write() {
        let (mut store, storage, _) = store();
        store.dispatch(Action::add("Melk"));
        assert_eq!(storage.write_count(), 1);

        store.dispatch(Action::toggle("Egg"));
        store.dispatch(Action::Delete(42));
        store.dispatch(Action::SortCompletedBelowUncompleted);

        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_open_does_not_write_back() {
        let storage = MemoryStore::with_item("groceries", r#"[{"id":1,"text":"Melk","completed":false}]"#);
        let store = GroceryStore::open(storage.clone(), ManualClock::default(), GroceryConfig::default());

        assert_eq!(store.state().texts(), vec!["Melk"]);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_injected_state_gets_unique_ids() {
        let state = GroceryState::new(vec![
            Grocery::new(0, "Melk"),
            Grocery::new(1, "Egg"),
            Grocery::new(1, "Brød"),
        ]);
        let store = GroceryStore::with_initial_state(
            state,
            MemoryStore::new(),
            ManualClock::default(),
            GroceryConfig::default(),
        );

        let ids: Vec<u32> = store.groceries().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
