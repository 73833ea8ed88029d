//! Browser Bindings
//!
//! `window.localStorage` as a [`KeyValueStore`] and `Date.now()` as a [`Clock`].

use grocery_core::{Clock, KeyValueStore, StorageError};

/// localStorage, looked up on every call so a store that appears or
/// disappears mid-session is handled like any other failure
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// Wall clock in milliseconds since the epoch
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
