//! Unit tests for the item history query.

use super::history_query::{item_history, latest_attachment};
use crate::observations::Observation;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn observation(
    item_name: &str,
    date: (i32, u32, u32),
    value: Decimal,
    attachment_id: Option<&str>,
) -> Observation {
    Observation {
        item_name: item_name.to_string(),
        observed_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        value,
        attachment_id: attachment_id.map(str::to_string),
    }
}

#[test]
fn test_history_filters_and_sorts_by_date() {
    let log = vec![
        observation("Watch", (2024, 6, 1), dec!(150), None),
        observation("Ring", (2024, 2, 1), dec!(50), None),
        observation("Watch", (2024, 1, 1), dec!(100), None),
    ];

    let history = item_history(&log, "Watch");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].value, dec!(100));
    assert_eq!(history[1].value, dec!(150));
}

#[test]
fn test_unknown_item_yields_empty_history() {
    let log = vec![observation("Watch", (2024, 1, 1), dec!(100), None)];

    assert!(item_history(&log, "Nonexistent").is_empty());
}

#[test]
fn test_history_keeps_insertion_order_on_equal_dates() {
    let log = vec![
        observation("Watch", (2024, 1, 1), dec!(100), Some("first.jpg")),
        observation("Watch", (2024, 1, 1), dec!(110), Some("second.jpg")),
    ];

    let history = item_history(&log, "Watch");
    assert_eq!(history[0].value, dec!(100));
    assert_eq!(history[1].value, dec!(110));
}

#[test]
fn test_latest_attachment_comes_from_last_entry() {
    let log = vec![
        observation("Watch", (2024, 1, 1), dec!(100), Some("old.jpg")),
        observation("Watch", (2024, 6, 1), dec!(150), Some("new.jpg")),
    ];

    let history = item_history(&log, "Watch");
    assert_eq!(latest_attachment(&history), Some("new.jpg"));
}

#[test]
fn test_latest_attachment_absent_when_last_entry_has_none() {
    // An older entry's photo is not resurrected for the detail view.
    let log = vec![
        observation("Watch", (2024, 1, 1), dec!(100), Some("old.jpg")),
        observation("Watch", (2024, 6, 1), dec!(150), None),
    ];

    let history = item_history(&log, "Watch");
    assert_eq!(latest_attachment(&history), None);
}

#[test]
fn test_latest_attachment_of_empty_history_is_none() {
    assert_eq!(latest_attachment(&[]), None);
}

#[test]
fn test_blank_attachment_id_counts_as_absent() {
    let log = vec![observation("Watch", (2024, 1, 1), dec!(100), Some("  "))];

    let history = item_history(&log, "Watch");
    assert_eq!(latest_attachment(&history), None);
}
