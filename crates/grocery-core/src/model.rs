//! Grocery Model
//!
//! The list entry and the list state, plus the persisted JSON shape.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single grocery list entry
///
/// Persisted as `{ "id": 1, "text": "Gulrot", "completed": false }`.
/// Older records used `isCompleted` and carried no id; both still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grocery {
    /// Stable identifier, assigned when the grocery is first added
    #[serde(default)]
    pub id: u32,
    /// Trimmed text, casing as first entered
    pub text: String,
    /// Completion status
    #[serde(alias = "isCompleted")]
    pub completed: bool,
}

impl Grocery {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Case-insensitive text comparison used for de-duplication and lookup
    pub fn matches_text(&self, text: &str) -> bool {
        self.text.to_lowercase() == text.to_lowercase()
    }
}

/// The whole list, newest first until the next sort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroceryState {
    pub groceries: Vec<Grocery>,
}

impl GroceryState {
    /// Wrap groceries as-is. Ids are expected to be non-zero and unique;
    /// use [`GroceryState::from_records`] for data that may not be.
    pub fn new(groceries: Vec<Grocery>) -> Self {
        Self { groceries }
    }

    /// Build a state from untrusted records (storage, hand-edited JSON,
    /// injected test state).
    ///
    /// A later case-insensitive duplicate of an earlier entry is dropped.
    /// Ids that are missing (0) or already taken get fresh unused ones.
    pub fn from_records(records: Vec<Grocery>) -> Self {
        let mut kept: Vec<Grocery> = Vec::with_capacity(records.len());
        for grocery in records {
            if kept.iter().any(|g| g.matches_text(&grocery.text)) {
                log::debug!("[load] dropping duplicate grocery {:?}", grocery.text);
                continue;
            }
            kept.push(grocery);
        }

        // First holder of a valid id keeps it
        let mut taken = HashSet::with_capacity(kept.len());
        let needs_id: Vec<bool> = kept
            .iter()
            .map(|g| g.id == 0 || !taken.insert(g.id))
            .collect();

        for (grocery, needs_id) in kept.iter_mut().zip(needs_id) {
            if needs_id {
                grocery.id = unused_id(&taken);
                taken.insert(grocery.id);
            }
        }

        Self { groceries: kept }
    }

    /// Next unused id: max + 1, or the lowest free id once max is `u32::MAX`
    pub fn next_id(&self) -> u32 {
        let taken: HashSet<u32> = self.groceries.iter().map(|g| g.id).collect();
        unused_id(&taken)
    }

    pub fn find_by_text(&self, text: &str) -> Option<&Grocery> {
        self.groceries.iter().find(|g| g.matches_text(text))
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Grocery> {
        self.groceries.iter().find(|g| g.id == id)
    }

    /// Texts in display order
    pub fn texts(&self) -> Vec<&str> {
        self.groceries.iter().map(|g| g.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groceries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groceries.is_empty()
    }
}

/// An id (starting at 1) not in `taken`. Prefers max + 1 so ids keep
/// growing; falls back to the lowest gap when max + 1 would overflow.
fn unused_id(taken: &HashSet<u32>) -> u32 {
    let after_max = taken
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .checked_add(1);

    after_max.unwrap_or_else(|| {
        // A list never holds u32::MAX entries, so a gap always exists
        (1..=u32::MAX)
            .find(|id| !taken.contains(id))
            .unwrap_or(u32::MAX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_text_ignores_case() {
        let grocery = Grocery::new(1, "Gulrot");
        assert!(grocery.matches_text("gulrot"));
        assert!(grocery.matches_text("GULROT"));
        assert!(!grocery.matches_text("gulrot "));
    }

    #[test]
    fn test_matches_text_non_ascii() {
        let grocery = Grocery::new(1, "Østers");
        assert!(grocery.matches_text("østers"));
    }

    #[test]
    fn test_next_id() {
        assert_eq!(GroceryState::default().next_id(), 1);
        let state = GroceryState::new(vec![Grocery::new(4, "a"), Grocery::new(2, "b")]);
        assert_eq!(state.next_id(), 5);
    }

    #[test]
    fn test_from_records_assigns_missing_and_duplicate_ids() {
        let state = GroceryState::from_records(vec![
            Grocery::new(0, "Melk"),
            Grocery::new(3, "Egg"),
            Grocery::new(3, "Brød"),
        ]);

        let ids: Vec<u32> = state.groceries.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![4, 3, 5]);
    }

    #[test]
    fn test_from_records_with_max_id_does_not_overflow() {
        let records: Vec<Grocery> = serde_json::from_str(
            r#"[{"id":4294967295,"text":"Melk","completed":false},{"text":"Egg","isCompleted":true}]"#,
        )
        .unwrap();

        let state = GroceryState::from_records(records);

        let ids: Vec<u32> = state.groceries.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![u32::MAX, 1]);
        assert_eq!(state.next_id(), 2);
    }

    #[test]
    fn test_next_id_fills_gap_after_max() {
        let state = GroceryState::new(vec![
            Grocery::new(u32::MAX, "a"),
            Grocery::new(1, "b"),
            Grocery::new(3, "c"),
        ]);
        assert_eq!(state.next_id(), 2);
    }

    #[test]
    fn test_from_records_drops_case_insensitive_duplicates() {
        let state = GroceryState::from_records(vec![
            Grocery::new(1, "Gulrot"),
            Grocery::new(2, "gulrot"),
            Grocery::new(3, "Brokkoli"),
        ]);

        assert_eq!(state.texts(), vec!["Gulrot", "Brokkoli"]);
    }

    #[test]
    fn test_deserialize_legacy_is_completed_field() {
        let json = r#"[{"text":"Gulrot","isCompleted":true}]"#;
        let records: Vec<Grocery> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].text, "Gulrot");
        assert!(records[0].completed);
    }

    #[test]
    fn test_serialize_uses_canonical_field_names() {
        let json = serde_json::to_string(&Grocery::new(7, "Egg")).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"Egg","completed":false}"#);
    }
}
