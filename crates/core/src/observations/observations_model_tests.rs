//! Tests for observation model serialization.

use super::observations_model::Observation;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

#[test]
fn test_observation_serializes_to_camel_case() {
    let observation = Observation {
        item_name: "Watch".to_string(),
        observed_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        value: dec!(100),
        attachment_id: Some("watch.jpg".to_string()),
    };

    let json = serde_json::to_value(&observation).unwrap();
    assert_eq!(json["itemName"], "Watch");
    assert_eq!(json["observedDate"], "2024-01-01");
    assert_eq!(json["attachmentId"], "watch.jpg");
}

#[test]
fn test_missing_attachment_round_trips_as_null() {
    let observation = Observation {
        item_name: "Ring".to_string(),
        observed_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        value: dec!(0),
        attachment_id: None,
    };

    let json = serde_json::to_string(&observation).unwrap();
    let parsed: Observation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, observation);
    assert_eq!(parsed.attachment_id, None);
}
