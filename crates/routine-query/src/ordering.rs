//! Ordering primitives shared by the domain extractor and the query engine.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use routine_model::Row;

/// Rank for day strings outside the weekday table.
pub const UNKNOWN_DAY_RANK: u8 = 99;

/// Rank for time slots without a "slot N" marker. Larger than any real slot.
pub const UNRANKED_SLOT: u64 = u64::MAX;

/// Week starts on Sunday.
const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// "slot", optional separators, then the first run of ASCII digits.
static SLOT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)slot\W*([0-9]+)").expect("Invalid slot regex"));

/// Weekday rank: Sunday=1 ... Saturday=7, anything else [`UNKNOWN_DAY_RANK`].
///
/// Matching ignores case and surrounding whitespace. This leniency is for
/// ordering only; day selectors in a filter state still compare exactly.
pub fn weekday_rank(day: &str) -> u8 {
    let normalized = day.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .position(|name| *name == normalized)
        .map_or(UNKNOWN_DAY_RANK, |idx| idx as u8 + 1)
}

/// Number following the first "slot" marker, or [`UNRANKED_SLOT`].
pub fn slot_rank(time_slot: &str) -> u64 {
    SLOT_NUMBER_REGEX
        .captures(time_slot)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(UNRANKED_SLOT)
}

/// Result order: day rank, then slot rank, then course code.
pub fn compare_rows(a: &Row, b: &Row) -> Ordering {
    weekday_rank(&a.day)
        .cmp(&weekday_rank(&b.day))
        .then_with(|| slot_rank(&a.time_slot).cmp(&slot_rank(&b.time_slot)))
        .then_with(|| a.course_code.cmp(&b.course_code))
}

/// Stable sort; rows equal on every key keep their input order.
pub fn sort_rows(rows: &mut [&Row]) {
    rows.sort_by(|a, b| compare_rows(a, b));
}
