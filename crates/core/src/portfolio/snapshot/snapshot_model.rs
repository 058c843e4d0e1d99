//! Per-item snapshot domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The most recent known state of one tracked item, derived from its
/// observation history.
///
/// Snapshots are recomputed from the full log on every query and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    /// Name of the tracked item.
    pub item_name: String,
    /// Value of the observation with the maximum date (ties broken by
    /// insertion order - the last-appended entry wins).
    pub latest_value: Decimal,
    /// Date of that observation.
    pub latest_date: NaiveDate,
    /// Photo recorded with that observation, if any.
    pub latest_attachment_id: Option<String>,
    /// Value of the item's first observation, the baseline the change
    /// percentage is measured against.
    pub first_value: Decimal,
    /// Relative change between the first and latest observation, in
    /// percent. `Some(0)` for an item with a single observation. `None`
    /// when the change is undefined because the baseline is zero and a
    /// later observation exists - never coerced to zero or infinity.
    pub change_percent: Option<Decimal>,
}

impl ItemSnapshot {
    /// The change percentage as usable for portfolio-level rankings.
    ///
    /// A change measured against a zero baseline is undefined, so such
    /// items never enter the average or the top gainer/loser selection,
    /// even though a lone zero-valued observation still displays as 0%.
    pub fn ranking_change(&self) -> Option<Decimal> {
        if self.first_value.is_zero() {
            None
        } else {
            self.change_percent
        }
    }
}
