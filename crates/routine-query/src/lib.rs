//! Filter-and-sort engine for class routines.
//!
//! Two pure functions over an immutable row collection:
//!
//! - [`extract_domain`] / [`DomainSets`]: distinct values per field, used to
//!   populate filter options once per dataset load
//! - [`query`]: rows matching every active predicate, sorted by day, slot
//!   number and course code
//!
//! # Example
//!
//! ```
//! use routine_model::{Field, FilterState, QueryStatus, Row};
//! use routine_query::query;
//!
//! let rows = vec![
//!     Row::from_fields([(Field::Day, "Monday"), (Field::CourseCode, "CSE101")]),
//!     Row::from_fields([(Field::Day, "Sunday"), (Field::CourseCode, "CSE101")]),
//! ];
//! let filters = FilterState::new().with(Field::CourseCode, "CSE101");
//! let result = query(&rows, &filters);
//!
//! assert_eq!(result.status(), QueryStatus::Found(2));
//! assert_eq!(result.rows()[0].day, "Sunday");
//! ```

mod domain;
mod engine;
mod ordering;

// === Domains ===
pub use domain::{DomainSets, extract_domain};

// === Query ===
pub use engine::{QueryResult, matches, query};

// === Ordering ===
pub use ordering::{
    UNKNOWN_DAY_RANK, UNRANKED_SLOT, compare_rows, slot_rank, sort_rows, weekday_rank,
};
