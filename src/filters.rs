//! Client-side filter predicates shared by the list views.
//!
//! Filters run over the full in-memory list on every render and never
//! trigger a refetch.

/// Case-insensitive substring match. An empty term matches everything.
pub fn matches_term(haystack: &str, term: &str) -> bool {
	haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Exact ISO-prefix match against a raw date string. An empty filter
/// matches everything.
pub fn matches_date_prefix(date: &str, filter: &str) -> bool {
	filter.is_empty() || date.starts_with(filter)
}
