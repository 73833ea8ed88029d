//! Configuration
//!
//! Defaults match the shipped app; a host may override fields from JSON.

use serde::Deserialize;

/// localStorage key holding the serialized list
pub const STORAGE_KEY: &str = "groceries";

/// Delay between a completion toggle and the re-sort it triggers
pub const SORT_DELAY_MS: u64 = 2 * 1000;

/// Long-press threshold when none is given
pub const DEFAULT_LONG_PRESS_MS: u64 = 300;

/// Long-press threshold for entering delete mode
pub const DELETE_MODE_LONG_PRESS_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroceryConfig {
    pub storage_key: String,
    pub sort_delay_ms: u64,
    pub long_press_ms: u64,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            sort_delay_ms: SORT_DELAY_MS,
            long_press_ms: DELETE_MODE_LONG_PRESS_MS,
        }
    }
}

impl GroceryConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GroceryConfig::default();
        assert_eq!(config.storage_key, "groceries");
        assert_eq!(config.sort_delay_ms, 2000);
        assert_eq!(config.long_press_ms, 500);
    }

    #[test]
    fn test_partial_override() {
        let config = GroceryConfig::from_json(r#"{"sort_delay_ms": 10}"#).unwrap();
        assert_eq!(config.sort_delay_ms, 10);
        assert_eq!(config.storage_key, STORAGE_KEY);
    }
}
