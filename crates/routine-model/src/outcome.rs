use serde::{Deserialize, Serialize};
use std::fmt;

/// What a lookup produced, as seen by whoever renders it.
///
/// `Inactive` and `Empty` both carry no rows but mean different things:
/// nothing was asked for versus nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum QueryStatus {
    /// No predicate set; nothing should be shown.
    Inactive,
    /// Predicates set, zero matches.
    Empty,
    /// Predicates set, `n >= 1` matches.
    Found(usize),
}

impl QueryStatus {
    pub fn from_match_count(active: bool, count: usize) -> Self {
        match (active, count) {
            (false, _) => QueryStatus::Inactive,
            (true, 0) => QueryStatus::Empty,
            (true, n) => QueryStatus::Found(n),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            QueryStatus::Found(n) => *n,
            QueryStatus::Inactive | QueryStatus::Empty => 0,
        }
    }

    /// Status line shown above the results.
    pub fn message(&self) -> String {
        match self {
            QueryStatus::Inactive => "Select a filter or type a search to see classes.".to_string(),
            QueryStatus::Empty => "No classes found.".to_string(),
            QueryStatus::Found(1) => "1 class found.".to_string(),
            QueryStatus::Found(n) => format!("{n} classes found."),
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// One selectable entry of a field's option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOption {
    /// The "no filter" choice; always listed first.
    All,
    Value(String),
}

impl FilterOption {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &str {
        match self {
            FilterOption::All => Self::ALL_LABEL,
            FilterOption::Value(value) => value,
        }
    }

    /// Selector value to store in a filter state; `All` maps to the empty
    /// string, which clears the predicate.
    pub fn selector_value(&self) -> &str {
        match self {
            FilterOption::All => "",
            FilterOption::Value(value) => value,
        }
    }

    /// Prefix a domain with the `All` entry.
    pub fn list(domain: &[String]) -> Vec<FilterOption> {
        std::iter::once(FilterOption::All)
            .chain(domain.iter().cloned().map(FilterOption::Value))
            .collect()
    }
}
