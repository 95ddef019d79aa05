//! Filter state for routine lookups.
//!
//! A [`FilterState`] holds seven independent predicates: one free-text query
//! and one exact-match selector per [`Field`]. An unset predicate is a
//! wildcard. The state is a plain value; callers build or mutate it and pass
//! it to the query engine on every recomputation.

use serde::{Deserialize, Serialize};

use crate::field::Field;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against all fields.
    text: Option<String>,
    /// Exact-match selectors indexed by [`Field::index`].
    selectors: [Option<String>; 6],
}

/// Empty input means "no filter", matching the "All" entry of an option list.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query. An empty string clears it.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the selector for `field`. An empty string clears it.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = non_empty(text.into());
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.selectors[field.index()] = non_empty(value.into());
    }

    /// Apply an optional selector; `None` clears the field.
    pub fn set_opt(&mut self, field: Field, value: Option<String>) {
        self.selectors[field.index()] = value.and_then(non_empty);
    }

    pub fn clear(&mut self, field: Field) {
        self.selectors[field.index()] = None;
    }

    /// Return every predicate to the wildcard state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn selector(&self, field: Field) -> Option<&str> {
        self.selectors[field.index()].as_deref()
    }

    /// Active selectors in [`Field::ALL`] order.
    pub fn selectors(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.selector(field).map(|value| (field, value)))
    }

    /// Number of predicates currently set (0..=7).
    pub fn active_count(&self) -> usize {
        usize::from(self.text.is_some()) + self.selectors.iter().flatten().count()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_inactive() {
        let state = FilterState::new();
        assert!(!state.is_active());
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.text(), None);
    }

    #[test]
    fn empty_values_clear_predicates() {
        let mut state = FilterState::new()
            .with_text("cse")
            .with(Field::Room, "305");
        assert_eq!(state.active_count(), 2);

        state.set_text("");
        state.set(Field::Room, "");
        assert!(!state.is_active());
    }

    #[test]
    fn whitespace_text_is_a_real_query() {
        let state = FilterState::new().with_text(" ");
        assert_eq!(state.text(), Some(" "));
        assert!(state.is_active());
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = FilterState::new()
            .with_text("x")
            .with(Field::Day, "Sunday")
            .with(Field::Teacher, "ABC");
        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn selectors_iterate_in_field_order() {
        let state = FilterState::new()
            .with(Field::Room, "305")
            .with(Field::Day, "Sunday");
        let active: Vec<_> = state.selectors().collect();
        assert_eq!(active, vec![(Field::Day, "Sunday"), (Field::Room, "305")]);
    }

    #[test]
    fn set_opt_none_clears() {
        let mut state = FilterState::new().with(Field::CourseCode, "CSE101");
        state.set_opt(Field::CourseCode, None);
        assert_eq!(state.selector(Field::CourseCode), None);
        state.set_opt(Field::CourseCode, Some(String::new()));
        assert!(!state.is_active());
    }
}
