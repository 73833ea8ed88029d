//! Grocery Row Component
//!
//! One list entry. Click toggles completion; long-press flips delete mode.

use leptos::prelude::*;

use grocery_core::{Action, Grocery};

use crate::components::DeleteButton;
use crate::context::use_grocery_context;
use crate::long_press::{
    make_on_mousedown, make_on_mouseleave, make_on_touchcancel, make_on_touchstart, use_long_press,
};

#[component]
pub fn GroceryRow(grocery: Grocery) -> impl IntoView {
    let ctx = use_grocery_context();

    let Grocery { id, text, completed } = grocery;
    let toggle_text = text.clone();

    let long_press = use_long_press(move || ctx.toggle_delete_mode(), ctx.long_press_ms());

    // The click that ends a long-press should not also toggle the row
    let swallow_click = StoredValue::new(false);
    let on_release = move || {
        if long_press.end() {
            swallow_click.set_value(true);
        }
    };

    view! {
        <li
            class=if completed { "grocery-row completed" } else { "grocery-row" }
            data-testid="grocery"
            on:mousedown=make_on_mousedown(long_press)
            on:mouseup=move |_| on_release()
            on:mouseleave=make_on_mouseleave(long_press)
            on:touchstart=make_on_touchstart(long_press)
            on:touchend=move |_| on_release()
            on:touchcancel=make_on_touchcancel(long_press)
            on:click=move |_| {
                if swallow_click.get_value() {
                    swallow_click.set_value(false);
                    return;
                }
                ctx.dispatch(Action::Toggle(toggle_text.clone()));
            }
        >
            // Display only; the row handles the click
            <input
                type="checkbox"
                tabindex="-1"
                prop:checked=completed
                on:click=|ev: web_sys::MouseEvent| ev.prevent_default()
            />
            <span class="grocery-text">{text}</span>

            <Show when=move || ctx.delete_mode()>
                <DeleteButton on_delete=move |_: ()| ctx.dispatch(Action::Delete(id)) />
            </Show>
        </li>
    }
}
