//! Delete Button Component
//!
//! Shown on each row while delete mode is on.

use leptos::prelude::*;

/// × button that deletes without confirmation.
///
/// Stops press events from reaching the row, so pressing it neither toggles
/// the grocery nor starts a long-press.
#[component]
pub fn DeleteButton(#[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="delete-btn"
            aria-label="delete"
            on:mousedown=|ev: web_sys::MouseEvent| ev.stop_propagation()
            on:touchstart=|ev: web_sys::TouchEvent| ev.stop_propagation()
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "×"
        </button>
    }
}
