//! Autocomplete Suggestions
//!
//! Picks existing grocery names to offer while typing.

/// Max suggestions shown in the dropdown
pub const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive substring match
pub fn matches_query(query: &str, name: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Names matching the (trimmed) input, in list order. Empty input offers
/// everything; an exact case-insensitive match is left out since submitting
/// the input already re-adds it.
pub fn suggestions<'a>(input: &str, names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let query = input.trim();
    names
        .into_iter()
        .filter(|name| matches_query(query, name))
        .filter(|name| query.is_empty() || name.to_lowercase() != query.to_lowercase())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}
