//! Application Context
//!
//! Shared state provided via Leptos Context API. Owns the core store and
//! mirrors its list into the reactive `AppStore` after every transition.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use grocery_core::{Action, GroceryStore, ScheduledTask};

use crate::browser::{BrowserClock, BrowserStorage};
use crate::store::{AppState, AppStateStoreFields, AppStore};

pub type CoreStore = GroceryStore<BrowserStorage, BrowserClock>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct GroceryContext {
    /// Reducer, scheduler and persistence
    core: StoredValue<CoreStore>,
    /// What the view renders from
    pub state: AppStore,
}

impl GroceryContext {
    pub fn new(core: CoreStore) -> Self {
        let state = AppStore::new(AppState {
            groceries: core.groceries().to_vec(),
            delete_mode: false,
        });
        Self {
            core: StoredValue::new(core),
            state,
        }
    }

    /// Run an action through the core, then re-render and arm a timer for
    /// each task the transition scheduled
    pub fn dispatch(&self, action: Action) {
        let scheduled = self
            .core
            .try_update_value(|core| core.dispatch(action))
            .unwrap_or_default();
        self.refresh();
        for task in scheduled {
            self.arm(task);
        }
    }

    /// Fire-and-forget timer that drains the queue once `task` is due
    fn arm(&self, task: ScheduledTask) {
        let ctx = *self;
        let delay = u32::try_from(task.delay_ms).unwrap_or(u32::MAX);
        Timeout::new(delay, move || {
            let ran = ctx
                .core
                .try_update_value(|core| core.run_until(task.fire_at_ms))
                .unwrap_or(0);
            if ran > 0 {
                web_sys::console::log_1(&format!("[APP] Ran {} deferred task(s)", ran).into());
                ctx.refresh();
            }
        })
        .forget();
    }

    fn refresh(&self) {
        if let Some(groceries) = self.core.try_with_value(|core| core.groceries().to_vec()) {
            *self.state.groceries().write() = groceries;
        }
    }

    pub fn long_press_ms(&self) -> u64 {
        self.core.with_value(|core| core.config().long_press_ms)
    }

    pub fn delete_mode(&self) -> bool {
        self.state.delete_mode().get()
    }

    /// Show or hide the delete buttons
    pub fn toggle_delete_mode(&self) {
        let binding = self.state.delete_mode();
        let mut delete_mode = binding.write();
        *delete_mode = !*delete_mode;
    }
}

/// Get the grocery context
pub fn use_grocery_context() -> GroceryContext {
    expect_context::<GroceryContext>()
}
