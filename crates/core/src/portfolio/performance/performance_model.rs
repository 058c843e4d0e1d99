//! Portfolio-level change statistics domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-wide change statistics, derived from the item snapshots and
/// recomputed on every query.
///
/// `top_gainer` and `top_loser` are `None` when no item has a defined
/// change - "no data" is an explicit absence, never a display string or
/// a fake item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    /// Sum of the latest values across all items. Zero for an empty
    /// portfolio.
    pub total_value: Decimal,
    /// Arithmetic mean of the change percentages over the items with a
    /// defined change. Zero when no such item exists.
    pub average_change_percent: Decimal,
    /// Item with the largest change percentage.
    pub top_gainer: Option<String>,
    /// Item with the smallest change percentage.
    pub top_loser: Option<String>,
}

impl PortfolioPerformance {
    /// The statistics of an empty portfolio.
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            average_change_percent: Decimal::ZERO,
            top_gainer: None,
            top_loser: None,
        }
    }
}
