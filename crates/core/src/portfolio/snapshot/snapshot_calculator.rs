//! Latest-snapshot derivation over the observation log.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::snapshot_model::ItemSnapshot;
use crate::observations::Observation;

/// Derives the latest snapshot for every item present in the log.
///
/// The log arrives in insertion order, not date order. Each item's
/// observations are sorted by date with a stable sort, so among equal
/// dates the last-appended entry stays last and supplies the latest
/// value, date, and attachment.
///
/// The change percentage compares the first and last observation after
/// the sort: `(last - first) / first * 100`. An item with a single
/// observation has a change of zero; an item whose baseline is zero with
/// later observations has no defined change (see [`ItemSnapshot`]).
///
/// An empty log yields an empty map.
pub fn calculate_latest_snapshots(log: &[Observation]) -> BTreeMap<String, ItemSnapshot> {
    let mut groups: BTreeMap<&str, Vec<&Observation>> = BTreeMap::new();
    for observation in log {
        groups
            .entry(observation.item_name.as_str())
            .or_default()
            .push(observation);
    }

    let mut snapshots = BTreeMap::new();
    for (item_name, mut observations) in groups {
        // Stable sort: insertion order survives among equal dates.
        observations.sort_by_key(|o| o.observed_date);

        let (first, last) = match (observations.first(), observations.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => continue,
        };

        let change_percent = if observations.len() < 2 {
            Some(Decimal::ZERO)
        } else if first.value.is_zero() {
            None
        } else {
            Some((last.value - first.value) / first.value * Decimal::ONE_HUNDRED)
        };

        snapshots.insert(
            item_name.to_string(),
            ItemSnapshot {
                item_name: item_name.to_string(),
                latest_value: last.value,
                latest_date: last.observed_date,
                latest_attachment_id: last.attachment_id.clone(),
                first_value: first.value,
                change_percent,
            },
        );
    }

    debug!(
        "Derived {} item snapshots from {} observations",
        snapshots.len(),
        log.len()
    );

    snapshots
}
