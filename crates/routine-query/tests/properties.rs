//! Property tests for the query engine and domain extraction.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use proptest::prelude::*;

use routine_model::{Field, FilterState, QueryStatus, Row};
use routine_query::{compare_rows, extract_domain, matches, query, sort_rows};

const DAYS: &[&str] = &["Sunday", "Monday", "Tuesday", "Wednesday", "Saturday", "Makeup", ""];
const SLOTS: &[&str] = &["Slot 1", "Slot 2", "Slot 10", "slot 3 (lab)", "TBA", ""];
const COURSES: &[&str] = &["CSE101", "CSE102", "EEE201", "cse101", ""];
const TEACHERS: &[&str] = &["AB", "CD", "Dr. Karim", ""];
const SECTIONS: &[&str] = &["1st A", "3rd B", ""];
const ROOMS: &[&str] = &["101", "204", "305", ""];
const NEEDLES: &[&str] = &["cse", "SLOT 1", "101", "sunday", "karim", "a", "zzz"];

fn pick(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(values).prop_map(str::to_string)
}

fn arb_row() -> impl Strategy<Value = Row> {
    (
        pick(DAYS),
        pick(SLOTS),
        pick(COURSES),
        pick(TEACHERS),
        pick(SECTIONS),
        pick(ROOMS),
    )
        .prop_map(|(day, time_slot, course_code, teacher, semester_section, room)| Row {
            day,
            time_slot,
            course_code,
            teacher,
            semester_section,
            room,
        })
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(arb_row(), 0..40)
}

fn arb_filters() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(pick(NEEDLES)),
        prop::option::of(pick(DAYS)),
        prop::option::of(pick(SLOTS)),
        prop::option::of(pick(COURSES)),
        prop::option::of(pick(TEACHERS)),
        prop::option::of(pick(SECTIONS)),
        prop::option::of(pick(ROOMS)),
    )
        .prop_map(|(text, day, slot, course, teacher, section, room)| {
            let mut filters = FilterState::new();
            if let Some(text) = text {
                filters.set_text(text);
            }
            filters.set_opt(Field::Day, day);
            filters.set_opt(Field::TimeSlot, slot);
            filters.set_opt(Field::CourseCode, course);
            filters.set_opt(Field::Teacher, teacher);
            filters.set_opt(Field::SemesterSection, section);
            filters.set_opt(Field::Room, room);
            filters
        })
}

/// Index of `row` within `rows`, by address.
fn position_of(rows: &[Row], row: &Row) -> Option<usize> {
    rows.iter().position(|candidate| std::ptr::eq(candidate, row))
}

proptest! {
    #[test]
    fn no_predicates_is_inactive(rows in arb_rows()) {
        let result = query(&rows, &FilterState::new());
        prop_assert_eq!(result.status(), QueryStatus::Inactive);
        prop_assert!(result.is_empty());
    }

    #[test]
    fn results_are_exactly_the_matching_input_rows(rows in arb_rows(), filters in arb_filters()) {
        let result = query(&rows, &filters);
        if !filters.is_active() {
            prop_assert_eq!(result.status(), QueryStatus::Inactive);
            return Ok(());
        }

        let mut seen = BTreeSet::new();
        for row in result.rows() {
            let idx = position_of(&rows, row);
            prop_assert!(idx.is_some(), "row not borrowed from input");
            prop_assert!(seen.insert(idx), "row returned twice");
            prop_assert!(matches(row, &filters));
        }
        let expected = rows.iter().filter(|row| matches(row, &filters)).count();
        prop_assert_eq!(result.len(), expected);
        prop_assert_eq!(result.status(), QueryStatus::from_match_count(true, expected));
    }

    #[test]
    fn results_are_sorted_and_stable(rows in arb_rows(), filters in arb_filters()) {
        let result = query(&rows, &filters);
        for pair in result.rows().windows(2) {
            let order = compare_rows(pair[0], pair[1]);
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(position_of(&rows, pair[0]) < position_of(&rows, pair[1]));
            }
        }
    }

    #[test]
    fn sorting_is_idempotent(rows in arb_rows(), filters in arb_filters()) {
        let result = query(&rows, &filters);
        let mut resorted = result.rows().to_vec();
        sort_rows(&mut resorted);
        prop_assert!(
            resorted
                .iter()
                .zip(result.rows())
                .all(|(a, b)| std::ptr::eq(*a, *b))
        );
    }

    #[test]
    fn domains_hold_exactly_the_present_values(rows in arb_rows()) {
        for field in Field::ALL {
            let domain = extract_domain(&rows, field);
            let unique: BTreeSet<&str> = domain.iter().map(String::as_str).collect();
            prop_assert_eq!(unique.len(), domain.len());

            let present: BTreeSet<&str> = rows
                .iter()
                .map(|row| row.get(field))
                .filter(|value| !value.is_empty())
                .collect();
            prop_assert_eq!(unique, present);
        }
    }
}
