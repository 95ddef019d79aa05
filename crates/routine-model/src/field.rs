//! The six fixed columns of a class routine.
//!
//! The routine spreadsheet uses human-readable headers ("Time Slot",
//! "Semester & Section", ...). [`Field`] gives each column a stable identity,
//! a short key for command-line use, and the canonical header label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A routine column.
///
/// Declaration order is the order fields are joined for free-text search and
/// the order columns are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Day,
    TimeSlot,
    CourseCode,
    Teacher,
    SemesterSection,
    Room,
}

impl Field {
    /// All fields in join/display order.
    pub const ALL: [Field; 6] = [
        Field::Day,
        Field::TimeSlot,
        Field::CourseCode,
        Field::Teacher,
        Field::SemesterSection,
        Field::Room,
    ];

    /// Header text as it appears in the source spreadsheet.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Day => "Day",
            Field::TimeSlot => "Time Slot",
            Field::CourseCode => "Course Code",
            Field::Teacher => "Teacher",
            Field::SemesterSection => "Semester & Section",
            Field::Room => "Room",
        }
    }

    /// Short name used for command-line flags and option listings.
    pub const fn key(&self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::TimeSlot => "slot",
            Field::CourseCode => "course",
            Field::Teacher => "teacher",
            Field::SemesterSection => "section",
            Field::Room => "room",
        }
    }

    /// Position of this field in [`Field::ALL`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Collapse runs of whitespace and lowercase, so "Time  slot" == "time slot".
fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    for (idx, part) in trimmed.split_whitespace().enumerate() {
        if idx > 0 {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized.to_lowercase()
}

impl FromStr for Field {
    type Err = ModelError;

    /// Parse either the short key (`slot`) or the header label (`Time Slot`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_name(s);
        Field::ALL
            .into_iter()
            .find(|field| {
                normalized == field.key() || normalized == field.label().to_lowercase()
            })
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
