//! Integration tests exercising the core services over a real SQLite store.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use werttracker_core::observations::{
    NewAttachment, NewObservation, ObservationRepositoryTrait, ObservationService,
    ObservationServiceTrait,
};
use werttracker_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use werttracker_storage_sqlite::{db, AttachmentRepository, ObservationRepository};

struct TestStore {
    // Keeps the database directory alive for the duration of the test.
    _dir: TempDir,
    observations: Arc<ObservationRepository>,
    attachments: Arc<AttachmentRepository>,
}

fn test_store() -> TestStore {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("werttracker.db");
    let pool = db::init(db_path.to_str().expect("utf-8 path")).expect("init database");

    TestStore {
        _dir: dir,
        observations: Arc::new(ObservationRepository::new(pool.clone())),
        attachments: Arc::new(AttachmentRepository::new(pool)),
    }
}

fn new_observation(item_name: &str, date: (i32, u32, u32), value: rust_decimal::Decimal) -> NewObservation {
    NewObservation {
        item_name: item_name.to_string(),
        observed_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        value,
        attachment: None,
    }
}

#[tokio::test]
async fn test_append_and_read_all_preserves_insertion_order() {
    let store = test_store();
    let service = ObservationService::new(store.observations.clone(), store.attachments.clone());

    // Deliberately out of date order.
    service
        .record(new_observation("Watch", (2024, 6, 1), dec!(150)))
        .await
        .unwrap();
    service
        .record(new_observation("Ring", (2024, 1, 1), dec!(50)))
        .await
        .unwrap();
    service
        .record(new_observation("Watch", (2024, 1, 1), dec!(100)))
        .await
        .unwrap();

    let log = store.observations.read_all().unwrap();
    assert_eq!(log.len(), 3);
    let names: Vec<&str> = log.iter().map(|o| o.item_name.as_str()).collect();
    assert_eq!(names, vec!["Watch", "Ring", "Watch"]);
    assert_eq!(log[0].value, dec!(150));
}

#[tokio::test]
async fn test_attachment_round_trip() {
    let store = test_store();
    let service = ObservationService::new(store.observations.clone(), store.attachments.clone());

    let mut request = new_observation("Watch", (2024, 1, 1), dec!(100));
    request.attachment = Some(NewAttachment {
        id: "watch.jpg".to_string(),
        content: vec![0xff, 0xd8, 0xff, 0xe0, 0x00],
    });
    let stored = service.record(request).await.unwrap();
    assert_eq!(stored.attachment_id.as_deref(), Some("watch.jpg"));

    let portfolio = PortfolioService::new(store.observations.clone(), store.attachments.clone());
    assert_eq!(
        portfolio.attachment_content("watch.jpg").unwrap(),
        Some(vec![0xff, 0xd8, 0xff, 0xe0, 0x00])
    );
    assert_eq!(portfolio.attachment_content("missing.jpg").unwrap(), None);
}

#[tokio::test]
async fn test_reupload_replaces_attachment_content() {
    let store = test_store();

    use werttracker_core::observations::AttachmentRepositoryTrait;
    store.attachments.put("photo.png", vec![1]).await.unwrap();
    store.attachments.put("photo.png", vec![2, 3]).await.unwrap();

    assert_eq!(store.attachments.get("photo.png").unwrap(), Some(vec![2, 3]));
}

#[tokio::test]
async fn test_dashboard_recomputes_over_stored_log() {
    let store = test_store();
    let service = ObservationService::new(store.observations.clone(), store.attachments.clone());
    let portfolio = PortfolioService::new(store.observations.clone(), store.attachments.clone());

    // Fresh install: no observations at all.
    let summary = portfolio.summary().unwrap();
    assert!(summary.snapshots.is_empty());
    assert_eq!(summary.performance.top_gainer, None);

    service
        .record(new_observation("Watch", (2024, 1, 1), dec!(100)))
        .await
        .unwrap();
    service
        .record(new_observation("Watch", (2024, 6, 1), dec!(150)))
        .await
        .unwrap();
    service
        .record(new_observation("Ring", (2024, 6, 1), dec!(200)))
        .await
        .unwrap();

    let summary = portfolio.summary().unwrap();
    assert_eq!(summary.performance.total_value, dec!(350));
    assert_eq!(summary.snapshots["Watch"].change_percent, Some(dec!(50)));
    assert_eq!(summary.performance.top_gainer.as_deref(), Some("Watch"));

    // Two values recorded on the same date sum into one series point.
    let june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let june_point = summary
        .value_series
        .iter()
        .find(|p| p.date == june)
        .expect("series point for June");
    assert_eq!(june_point.total_value, dec!(350));
}

#[tokio::test]
async fn test_same_date_entries_resolve_to_last_appended() {
    let store = test_store();
    let service = ObservationService::new(store.observations.clone(), store.attachments.clone());
    let portfolio = PortfolioService::new(store.observations.clone(), store.attachments.clone());

    service
        .record(new_observation("Watch", (2024, 6, 1), dec!(140)))
        .await
        .unwrap();
    service
        .record(new_observation("Watch", (2024, 6, 1), dec!(150)))
        .await
        .unwrap();

    let summary = portfolio.summary().unwrap();
    assert_eq!(summary.snapshots["Watch"].latest_value, dec!(150));
}

#[tokio::test]
async fn test_item_detail_over_stored_log() {
    let store = test_store();
    let service = ObservationService::new(store.observations.clone(), store.attachments.clone());
    let portfolio = PortfolioService::new(store.observations.clone(), store.attachments.clone());

    let mut request = new_observation("Watch", (2024, 6, 1), dec!(150));
    request.attachment = Some(NewAttachment {
        id: "new.jpg".to_string(),
        content: vec![9],
    });
    service.record(request).await.unwrap();
    service
        .record(new_observation("Watch", (2024, 1, 1), dec!(100)))
        .await
        .unwrap();

    let detail = portfolio.item_detail("Watch").unwrap();
    assert_eq!(detail.history.len(), 2);
    // History is date-sorted even though the log is not.
    assert_eq!(detail.history[0].value, dec!(100));
    assert_eq!(detail.history[1].value, dec!(150));
    assert_eq!(detail.latest_attachment_id.as_deref(), Some("new.jpg"));

    let missing = portfolio.item_detail("Nonexistent").unwrap();
    assert!(missing.history.is_empty());
    assert_eq!(missing.latest_attachment_id, None);
}

#[tokio::test]
async fn test_validation_rejects_malformed_entries_before_storage() {
    let store = test_store();
    let service = ObservationService::new(store.observations.clone(), store.attachments.clone());

    assert!(service
        .record(new_observation("", (2024, 1, 1), dec!(10)))
        .await
        .is_err());
    assert!(service
        .record(new_observation("Watch", (2024, 1, 1), dec!(-10)))
        .await
        .is_err());

    assert!(store.observations.read_all().unwrap().is_empty());
}
