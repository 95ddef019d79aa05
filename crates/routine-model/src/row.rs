use serde::{Deserialize, Serialize};

use crate::field::Field;

/// One scheduled class.
///
/// Every value is free-form text and may be empty. Rows carry no identity
/// beyond their values; identical rows are legal and kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Time Slot")]
    pub time_slot: String,
    #[serde(rename = "Course Code")]
    pub course_code: String,
    #[serde(rename = "Teacher")]
    pub teacher: String,
    #[serde(rename = "Semester & Section")]
    pub semester_section: String,
    #[serde(rename = "Room")]
    pub room: String,
}

impl Row {
    /// Build a row from `(field, value)` pairs. Unlisted fields stay empty;
    /// a repeated field keeps the last value.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (Field, S)>,
        S: Into<String>,
    {
        let mut row = Row::default();
        for (field, value) in fields {
            row.set(field, value);
        }
        row
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::TimeSlot => &self.time_slot,
            Field::CourseCode => &self.course_code,
            Field::Teacher => &self.teacher,
            Field::SemesterSection => &self.semester_section,
            Field::Room => &self.room,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Day => &mut self.day,
            Field::TimeSlot => &mut self.time_slot,
            Field::CourseCode => &mut self.course_code,
            Field::Teacher => &mut self.teacher,
            Field::SemesterSection => &mut self.semester_section,
            Field::Room => &mut self.room,
        };
        *slot = value.into();
    }

    /// Values in [`Field::ALL`] order.
    pub fn values(&self) -> [&str; 6] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Lowercased, single-space-joined values used for free-text search.
    ///
    /// Adjacent values are only separated by one space, so a needle may
    /// straddle two fields.
    pub fn search_text(&self) -> String {
        self.values().join(" ").to_lowercase()
    }
}
