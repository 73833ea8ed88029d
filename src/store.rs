//! Reactive View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is a
//! read-model of the core store plus UI-only flags; it is never mutated
//! except through `GroceryContext`.

use reactive_stores::Store;
use grocery_core::Grocery;

/// What the components render from
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Groceries in display order
    pub groceries: Vec<Grocery>,
    /// Delete buttons shown (flipped by long-press)
    pub delete_mode: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
