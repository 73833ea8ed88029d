//! Persistence
//!
//! The grocery list lives under a single key as a JSON array. `load` and
//! `save` never fail outward: a missing or broken record reads as an empty
//! list and a failed write is dropped. Both log a warning so the loss is at
//! least visible in the console.

use crate::error::{PersistError, PersistResult};
use crate::model::{Grocery, GroceryState};
use crate::storage::KeyValueStore;

/// Read and decode the list. A missing key is an empty list, not an error.
pub fn try_load(store: &impl KeyValueStore, key: &str) -> PersistResult<GroceryState> {
    let Some(json) = store.get_item(key)? else {
        return Ok(GroceryState::default());
    };
    let records: Vec<Grocery> = serde_json::from_str(&json).map_err(PersistError::Malformed)?;
    Ok(GroceryState::from_records(records))
}

/// Encode and write the list
pub fn try_save(store: &impl KeyValueStore, key: &str, state: &GroceryState) -> PersistResult<()> {
    let json = serde_json::to_string(&state.groceries).map_err(PersistError::Encode)?;
    store.set_item(key, &json)?;
    Ok(())
}

/// Fail-soft load: any error yields an empty list
pub fn load(store: &impl KeyValueStore, key: &str) -> GroceryState {
    match try_load(store, key) {
        Ok(state) => {
            log::debug!("[persist] loaded {} groceries from '{}'", state.len(), key);
            state
        }
        Err(e) => {
            log::warn!("[persist] could not load '{}', starting empty: {}", key, e);
            GroceryState::default()
        }
    }
}

/// Fail-soft save: any error drops the write
pub fn save(store: &impl KeyValueStore, key: &str, state: &GroceryState) {
    if let Err(e) = try_save(store, key, state) {
        log::warn!("[persist] could not save '{}', change not persisted: {}", key, e);
    }
}
