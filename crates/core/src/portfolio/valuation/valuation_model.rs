//! Portfolio valuation series domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the portfolio value series: the sum of all values
/// recorded on a single date, across all items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuePoint {
    /// The observation date.
    pub date: NaiveDate,
    /// Sum of the values of every observation recorded on that date.
    pub total_value: Decimal,
}
