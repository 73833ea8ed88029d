//! Grocery List App
//!
//! Builds the core store over localStorage and provides it to the components.

use leptos::prelude::*;

use grocery_core::{GroceryConfig, GroceryState, GroceryStore};

use crate::browser::{BrowserClock, BrowserStorage};
use crate::components::{GroceryForm, GroceryList};
use crate::context::GroceryContext;

#[component]
pub fn App(
    /// Start from this list instead of reading localStorage
    #[prop(optional)]
    initial_state: Option<GroceryState>,
) -> impl IntoView {
    let config = GroceryConfig::default();
    let core = match initial_state {
        Some(state) => GroceryStore::with_initial_state(state, BrowserStorage, BrowserClock, config),
        None => GroceryStore::open(BrowserStorage, BrowserClock, config),
    };
    web_sys::console::log_1(&format!("[APP] Loaded {} groceries", core.groceries().len()).into());

    provide_context(GroceryContext::new(core));

    view! {
        <div class="app-layout">
            <GroceryForm />
            <main class="main-content">
                <GroceryList />
            </main>
        </div>
    }
}
