//! Query engine: match rows against a filter state and order the result.

use tracing::debug;

use routine_model::{FilterState, QueryStatus, Row};

use crate::ordering::sort_rows;

/// Ordered lookup result borrowing from the source rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    status: QueryStatus,
    rows: Vec<&'a Row>,
}

impl<'a> QueryResult<'a> {
    fn inactive() -> Self {
        Self {
            status: QueryStatus::Inactive,
            rows: Vec::new(),
        }
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn rows(&self) -> &[&'a Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pre-lowered free-text needle plus borrowed selectors.
struct Matcher<'f> {
    needle: Option<String>,
    filters: &'f FilterState,
}

impl<'f> Matcher<'f> {
    fn new(filters: &'f FilterState) -> Self {
        Self {
            needle: filters.text().map(str::to_lowercase),
            filters,
        }
    }

    fn matches(&self, row: &Row) -> bool {
        if let Some(needle) = &self.needle
            && !row.search_text().contains(needle.as_str())
        {
            return false;
        }
        self.filters
            .selectors()
            .all(|(field, value)| row.get(field) == value)
    }
}

/// True when `row` satisfies every active predicate of `filters`.
///
/// An inactive state matches every row; [`query`] handles that case
/// separately.
pub fn matches(row: &Row, filters: &FilterState) -> bool {
    Matcher::new(filters).matches(row)
}

/// Filter `rows` by `filters` and sort the matches.
///
/// With no predicate set the result is [`QueryStatus::Inactive`] and holds
/// no rows, however many rows exist.
pub fn query<'a>(rows: &'a [Row], filters: &FilterState) -> QueryResult<'a> {
    if !filters.is_active() {
        debug!(rows = rows.len(), "no active filters");
        return QueryResult::inactive();
    }

    let matcher = Matcher::new(filters);
    let mut matched: Vec<&Row> = rows.iter().filter(|row| matcher.matches(row)).collect();
    sort_rows(&mut matched);

    let status = QueryStatus::from_match_count(true, matched.len());
    debug!(
        rows = rows.len(),
        predicates = filters.active_count(),
        matched = matched.len(),
        "query evaluated"
    );
    QueryResult {
        status,
        rows: matched,
    }
}
