//! Tests for routine-model types.

use routine_model::{Field, FilterState, QueryStatus, Row};

#[test]
fn row_uses_header_labels_on_the_wire() {
    let row = Row::from_fields([
        (Field::Day, "Sunday"),
        (Field::TimeSlot, "Slot 1 (08:30-10:00)"),
        (Field::SemesterSection, "3rd A"),
    ]);
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json["Day"], "Sunday");
    assert_eq!(json["Time Slot"], "Slot 1 (08:30-10:00)");
    assert_eq!(json["Semester & Section"], "3rd A");
    assert_eq!(json["Room"], "");
}

#[test]
fn row_missing_keys_default_to_empty() {
    let row: Row = serde_json::from_str(r#"{"Day":"Monday","Room":"306"}"#).expect("parse row");
    assert_eq!(row.day, "Monday");
    assert_eq!(row.room, "306");
    assert_eq!(row.get(Field::Teacher), "");
    assert_eq!(row.get(Field::CourseCode), "");
}

#[test]
fn status_serializes_with_count() {
    let json = serde_json::to_string(&QueryStatus::Found(3)).expect("serialize status");
    assert_eq!(json, r#"{"state":"found","count":3}"#);
    let inactive = serde_json::to_string(&QueryStatus::Inactive).expect("serialize status");
    assert_eq!(inactive, r#"{"state":"inactive"}"#);
}

#[test]
fn filter_state_counts_each_dimension() {
    let mut state = FilterState::new().with_text("cse");
    for field in Field::ALL {
        state.set(field, "x");
    }
    assert_eq!(state.active_count(), 7);
    state.clear(Field::Room);
    assert_eq!(state.active_count(), 6);
}
