//! Data model for class routine lookups.
//!
//! - [`Row`]: one scheduled class with six free-text fields
//! - [`Field`]: identity, header label and short key of each column
//! - [`FilterState`]: the seven optional lookup predicates
//! - [`QueryStatus`] / [`FilterOption`]: what renderers receive

pub mod error;
pub mod field;
pub mod filter;
pub mod outcome;
pub mod row;

pub use error::{ModelError, Result};
pub use field::Field;
pub use filter::FilterState;
pub use outcome::{FilterOption, QueryStatus};
pub use row::Row;
