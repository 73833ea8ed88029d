//! Grocery Reducer
//!
//! Pure transition function. The deferred sort that follows a toggle is
//! returned as an [`Effect`] instead of being scheduled here, so every
//! transition can be checked without timers.

use crate::action::{Action, Effect};
use crate::model::{Grocery, GroceryState};

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GroceryState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn state(state: GroceryState) -> Self {
        Self { state, effects: Vec::new() }
    }

    fn with_effect(state: GroceryState, effect: Effect) -> Self {
        Self { state, effects: vec![effect] }
    }
}

/// Apply `action` to `state`, returning the next state and requested effects
pub fn reduce(state: &GroceryState, action: Action) -> Transition {
    match action {
        Action::Add(text) => Transition::state(add(state, &text)),
        Action::Toggle(text) => match toggle(state, &text) {
            Some(next) => Transition::with_effect(next, Effect::ScheduleSort),
            None => Transition::state(state.clone()),
        },
        Action::Delete(id) => Transition::state(delete(state, id)),
        Action::SortCompletedBelowUncompleted => Transition::state(sort_completed_below(state)),
    }
}

/// Trim, drop any case-insensitive match, prepend as uncompleted.
///
/// A re-add keeps the first-entered casing and id of the replaced entry.
/// Whitespace-only input yields an entry with empty text.
fn add(state: &GroceryState, text: &str) -> GroceryState {
    let to_be_added = text.trim();

    let (existing, others): (Vec<&Grocery>, Vec<&Grocery>) = state
        .groceries
        .iter()
        .partition(|g| g.matches_text(to_be_added));

    let grocery = match existing.first() {
        Some(old) => Grocery::new(old.id, old.text.clone()),
        None => Grocery::new(state.next_id(), to_be_added),
    };

    let mut groceries = Vec::with_capacity(others.len() + 1);
    groceries.push(grocery);
    groceries.extend(others.into_iter().cloned());
    GroceryState::new(groceries)
}

/// Flip the first case-insensitive match. `None` when nothing matches.
fn toggle(state: &GroceryState, text: &str) -> Option<GroceryState> {
    let index = state.groceries.iter().position(|g| g.matches_text(text))?;

    let mut groceries = state.groceries.clone();
    groceries[index].completed = !groceries[index].completed;
    Some(GroceryState::new(groceries))
}

/// Remove the first entry with `id`; unchanged copy when absent
fn delete(state: &GroceryState, id: u32) -> GroceryState {
    let mut groceries = state.groceries.clone();
    if let Some(index) = groceries.iter().position(|g| g.id == id) {
        groceries.remove(index);
    }
    GroceryState::new(groceries)
}

/// Stable partition: uncompleted first, then completed
fn sort_completed_below(state: &GroceryState) -> GroceryState {
    let (uncompleted, completed): (Vec<Grocery>, Vec<Grocery>) = state
        .groceries
        .iter()
        .cloned()
        .partition(|g| !g.completed);

    let mut groceries = uncompleted;
    groceries.extend(completed);
    GroceryState::new(groceries)
}
