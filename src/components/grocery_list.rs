//! Grocery List Component
//!
//! Renders the groceries in store order, plus a way out of delete mode.

use leptos::prelude::*;

use crate::components::GroceryRow;
use crate::context::use_grocery_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn GroceryList() -> impl IntoView {
    let ctx = use_grocery_context();

    let list_class = move || {
        if ctx.delete_mode() { "grocery-list delete-mode" } else { "grocery-list" }
    };

    view! {
        <ul class=list_class>
            <For
                each=move || ctx.state.groceries().get()
                // Every rendered field is in the key so a change re-renders the row
                key=|grocery| (grocery.id, grocery.text.clone(), grocery.completed)
                children=move |grocery| view! { <GroceryRow grocery=grocery /> }
            />
        </ul>

        <Show when=move || ctx.delete_mode()>
            <button class="done-btn" on:click=move |_| ctx.toggle_delete_mode()>
                "Ferdig"
            </button>
        </Show>

        <p class="grocery-count">{move || format!("{} matvarer", ctx.state.groceries().get().len())}</p>
    }
}
