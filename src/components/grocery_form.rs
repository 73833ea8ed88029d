//! Grocery Form Component
//!
//! Text input with an autocomplete dropdown of groceries already on the list.
//! Submitting adds the typed text; picking a suggestion adds it immediately.

use leptos::prelude::*;

use grocery_core::Action;

use crate::context::use_grocery_context;
use crate::store::AppStateStoreFields;
use crate::suggest::suggestions;

#[component]
pub fn GroceryForm() -> impl IntoView {
    let ctx = use_grocery_context();

    let (input_value, set_input_value) = signal(String::new());
    let (dropdown_open, set_dropdown_open) = signal(false);
    let (selected_idx, set_selected_idx) = signal::<Option<usize>>(None);

    let current_suggestions = move || {
        if !dropdown_open.get() {
            return vec![];
        }
        let groceries = ctx.state.groceries().get();
        suggestions(&input_value.get(), groceries.iter().map(|g| g.text.as_str()))
    };

    // Nothing to suggest on an empty list
    let open_dropdown = move || {
        if !ctx.state.groceries().get_untracked().is_empty() {
            set_dropdown_open.set(true);
        }
    };

    let close_dropdown = move || {
        set_dropdown_open.set(false);
        set_selected_idx.set(None);
    };

    let add = move |text: String| {
        ctx.dispatch(Action::Add(text));
        set_input_value.set(String::new());
        close_dropdown();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        add(input_value.get());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = current_suggestions();

        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                open_dropdown();
                let next = match selected_idx.get() {
                    Some(sel) if sel + 1 < sugg.len() => Some(sel + 1),
                    Some(sel) => Some(sel),
                    None if !sugg.is_empty() => Some(0),
                    None => None,
                };
                set_selected_idx.set(next);
            }
            "ArrowUp" => {
                ev.prevent_default();
                if let Some(sel) = selected_idx.get() {
                    set_selected_idx.set(sel.checked_sub(1));
                }
            }
            "Enter" => {
                // Highlighted suggestion wins over the typed text
                if let Some(name) = selected_idx.get().and_then(|sel| sugg.get(sel).cloned()) {
                    ev.prevent_default();
                    add(name);
                }
            }
            "Escape" => close_dropdown(),
            _ => {}
        }
    };

    view! {
        <form class="grocery-form" on:submit=on_submit>
            <label for="new-grocery">"Ny matvare.."</label>
            <input
                id="new-grocery"
                type="text"
                autocomplete="off"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    set_input_value.set(event_target_value(&ev));
                    set_selected_idx.set(None);
                    open_dropdown();
                }
                on:focus=move |_| open_dropdown()
                on:click=move |_| open_dropdown()
                on:blur=move |_| close_dropdown()
                on:keydown=on_keydown
            />

            {move || {
                let sugg = current_suggestions();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="autocomplete-list" role="listbox">
                            {sugg.into_iter().enumerate().map(|(i, name)| {
                                let name_for_pick = name.clone();
                                let is_selected = selected == Some(i);
                                view! {
                                    <button
                                        type="button"
                                        role="option"
                                        class=if is_selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                        // mousedown so the input's blur does not close the list first
                                        on:mousedown=move |ev: web_sys::MouseEvent| {
                                            ev.prevent_default();
                                            add(name_for_pick.clone());
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </form>
    }
}
