//! Per-item history selection over the observation log.

use log::debug;

use crate::observations::Observation;

/// Selects one item's full history from the log, sorted ascending by
/// date. The sort is stable, so observations sharing a date keep their
/// insertion order.
///
/// An unknown item name yields an empty history, not an error; "no such
/// item" and "item without history" are the same observable state.
pub fn item_history(log: &[Observation], item_name: &str) -> Vec<Observation> {
    let mut history: Vec<Observation> = log
        .iter()
        .filter(|o| o.item_name == item_name)
        .cloned()
        .collect();
    history.sort_by_key(|o| o.observed_date);

    debug!("Selected {} observations for '{}'", history.len(), item_name);
    history
}

/// The attachment recorded with the most recent observation of a
/// date-sorted history, or `None` when the history is empty or its last
/// entry has no usable attachment. A blank identifier counts as absent
/// rather than as an empty-named photo.
pub fn latest_attachment(history: &[Observation]) -> Option<&str> {
    history
        .last()
        .and_then(|o| o.attachment_id.as_deref())
        .filter(|id| !id.trim().is_empty())
}
