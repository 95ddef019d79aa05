//! Option domains: the distinct values each field takes in a dataset.

use std::collections::HashSet;

use tracing::debug;

use routine_model::{Field, FilterOption, Row};

use crate::ordering::{slot_rank, weekday_rank};

/// Distinct non-empty values of `field`, in the field's display order.
///
/// Day values follow the weekday table and time slots their slot number;
/// both keep first-occurrence order among equal ranks. Other fields sort
/// by plain string comparison.
pub fn extract_domain(rows: &[Row], field: Field) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = Vec::new();
    for row in rows {
        let value = row.get(field);
        if value.is_empty() || !seen.insert(value) {
            continue;
        }
        values.push(value.to_string());
    }

    match field {
        Field::Day => values.sort_by_key(|value| weekday_rank(value.as_str())),
        Field::TimeSlot => values.sort_by_key(|value| slot_rank(value.as_str())),
        Field::CourseCode | Field::Teacher | Field::SemesterSection | Field::Room => {
            values.sort();
        }
    }
    values
}

/// Option domains for all six fields, computed once per dataset load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSets {
    domains: [Vec<String>; 6],
}

impl DomainSets {
    pub fn from_rows(rows: &[Row]) -> Self {
        let domains = Field::ALL.map(|field| extract_domain(rows, field));
        debug!(
            rows = rows.len(),
            days = domains[Field::Day.index()].len(),
            slots = domains[Field::TimeSlot.index()].len(),
            courses = domains[Field::CourseCode.index()].len(),
            "domain sets built"
        );
        Self { domains }
    }

    pub fn get(&self, field: Field) -> &[String] {
        &self.domains[field.index()]
    }

    /// Selectable options for `field`, starting with [`FilterOption::All`].
    pub fn options(&self, field: Field) -> Vec<FilterOption> {
        FilterOption::list(self.get(field))
    }

    pub fn contains(&self, field: Field, value: &str) -> bool {
        self.get(field).iter().any(|known| known == value)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms(values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .map(|room| Row::from_fields([(Field::Room, *room)]))
            .collect()
    }

    #[test]
    fn drops_empty_and_duplicates() {
        let rows = rooms(&["101", "", "101", "204"]);
        assert_eq!(extract_domain(&rows, Field::Room), vec!["101", "204"]);
    }

    #[test]
    fn plain_fields_sort_ordinally() {
        let rows = rooms(&["b12", "B12", "a3", "10", "9"]);
        assert_eq!(
            extract_domain(&rows, Field::Room),
            vec!["10", "9", "B12", "a3", "b12"]
        );
    }

    #[test]
    fn days_follow_the_week() {
        let rows: Vec<Row> = ["Wednesday", "Holiday", "Sunday", "Monday", "Extra", "Sunday"]
            .iter()
            .map(|day| Row::from_fields([(Field::Day, *day)]))
            .collect();
        assert_eq!(
            extract_domain(&rows, Field::Day),
            vec!["Sunday", "Monday", "Wednesday", "Holiday", "Extra"]
        );
    }

    #[test]
    fn slots_sort_numerically_with_unranked_last() {
        let rows: Vec<Row> = ["Slot 10", "Lab", "Slot 2", "slot 1", "Break"]
            .iter()
            .map(|slot| Row::from_fields([(Field::TimeSlot, *slot)]))
            .collect();
        assert_eq!(
            extract_domain(&rows, Field::TimeSlot),
            vec!["slot 1", "Slot 2", "Slot 10", "Lab", "Break"]
        );
    }

    #[test]
    fn empty_rows_give_empty_domains() {
        let sets = DomainSets::from_rows(&[]);
        assert!(sets.is_empty());
        assert_eq!(sets.options(Field::Day), vec![FilterOption::All]);
    }

    #[test]
    fn domain_sets_cover_every_field() {
        let rows = vec![Row::from_fields([
            (Field::Day, "Sunday"),
            (Field::CourseCode, "CSE101"),
            (Field::Room, "305"),
        ])];
        let sets = DomainSets::from_rows(&rows);
        assert_eq!(sets.get(Field::CourseCode), ["CSE101".to_string()]);
        assert!(sets.contains(Field::Room, "305"));
        assert!(!sets.contains(Field::Room, "306"));
        assert!(sets.get(Field::Teacher).is_empty());
    }
}
