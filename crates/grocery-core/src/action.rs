//! Actions and Effects
//!
//! Everything that can change the list goes through one of these.

/// A grocery list mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add (or re-add) a grocery by text
    Add(String),
    /// Flip the completed flag of the grocery with this text (case-insensitive)
    Toggle(String),
    /// Remove the grocery with this id
    Delete(u32),
    /// Move completed groceries below uncompleted ones, keeping relative order
    SortCompletedBelowUncompleted,
}

impl Action {
    pub fn add(text: impl Into<String>) -> Self {
        Action::Add(text.into())
    }

    pub fn toggle(text: impl Into<String>) -> Self {
        Action::Toggle(text.into())
    }
}

/// Side effect requested by a transition, performed by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `SortCompletedBelowUncompleted` after the configured delay
    ScheduleSort,
}
