//! Portfolio-level change statistics over the item snapshots.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::performance_model::PortfolioPerformance;
use crate::portfolio::snapshot::ItemSnapshot;

/// Aggregates the item snapshots into portfolio-wide statistics.
///
/// The total sums every item's latest value. The average and the top
/// gainer/loser only consider items with a defined change (see
/// [`ItemSnapshot::ranking_change`]); when several items tie, the first
/// in item-name order wins, which the `BTreeMap` iteration order makes
/// deterministic.
pub fn calculate_performance(
    snapshots: &BTreeMap<String, ItemSnapshot>,
) -> PortfolioPerformance {
    let total_value: Decimal = snapshots.values().map(|s| s.latest_value).sum();

    let defined_changes: Vec<(&str, Decimal)> = snapshots
        .values()
        .filter_map(|s| s.ranking_change().map(|change| (s.item_name.as_str(), change)))
        .collect();

    let Some(&(first_name, first_change)) = defined_changes.first() else {
        debug!("No item with a defined change; portfolio statistics default to empty");
        return PortfolioPerformance {
            total_value,
            ..PortfolioPerformance::empty()
        };
    };

    let change_sum: Decimal = defined_changes.iter().map(|&(_, change)| change).sum();
    let average_change_percent = change_sum / Decimal::from(defined_changes.len() as u64);

    // Strict comparisons keep the first item in name order on ties.
    let mut top_gainer = (first_name, first_change);
    let mut top_loser = (first_name, first_change);
    for &(item_name, change) in &defined_changes[1..] {
        if change > top_gainer.1 {
            top_gainer = (item_name, change);
        }
        if change < top_loser.1 {
            top_loser = (item_name, change);
        }
    }

    debug!(
        "Portfolio statistics over {} items ({} with defined change): total {}",
        snapshots.len(),
        defined_changes.len(),
        total_value
    );

    PortfolioPerformance {
        total_value,
        average_change_percent,
        top_gainer: Some(top_gainer.0.to_string()),
        top_loser: Some(top_loser.0.to_string()),
    }
}
