//! Portfolio value series over the observation log.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::valuation_model::PortfolioValuePoint;
use crate::observations::Observation;

/// Builds the portfolio value series: per date, the sum of every value
/// recorded on that date across all items, ascending by date.
///
/// This is the literal per-date sum. An item's value is not carried
/// forward to dates it was not observed on, and dates without any
/// observation do not appear in the series. The result depends only on
/// the set of observations, not on log order.
pub fn calculate_portfolio_series(log: &[Observation]) -> Vec<PortfolioValuePoint> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for observation in log {
        *totals.entry(observation.observed_date).or_insert(Decimal::ZERO) += observation.value;
    }

    totals
        .into_iter()
        .map(|(date, total_value)| PortfolioValuePoint { date, total_value })
        .collect()
}
