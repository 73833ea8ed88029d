//! Grocery List Core
//!
//! Layered the same way the rest of the app is:
//! - model / action: data types and the closed action set
//! - reducer: pure (state, action) -> (state, effects)
//! - scheduler / clock: the deferred-sort task queue and its time source
//! - long_press: press gesture tracking, independent of any DOM
//! - storage / persistence: key-value contract and the JSON record
//! - store: owns all of the above and runs transitions
//!
//! Nothing here touches the browser, so it is tested natively.

mod action;
mod clock;
mod config;
mod error;
mod long_press;
mod model;
mod persistence;
mod reducer;
mod scheduler;
mod storage;
mod store;

pub use action::{Action, Effect};
pub use clock::{Clock, ManualClock};
pub use config::{
    GroceryConfig, DEFAULT_LONG_PRESS_MS, DELETE_MODE_LONG_PRESS_MS, SORT_DELAY_MS, STORAGE_KEY,
};
pub use error::{PersistError, PersistResult, StorageError};
pub use long_press::LongPressTracker;
pub use model::{Grocery, GroceryState};
pub use persistence::{load, save, try_load, try_save};
pub use reducer::{reduce, Transition};
pub use scheduler::{ScheduledTask, Scheduler};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::GroceryStore;
