//! Observation log domain models.
//!
//! An observation is one recorded fact: "this item was worth `value` on
//! `observed_date`", optionally backed by a photo. Observations are
//! append-only - they are created once when the user submits an entry and
//! never edited or deleted afterwards. Everything else the application
//! shows (latest values, change percentages, the portfolio series) is
//! derived from the log on demand.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded valuation of a named item.
///
/// `attachment_id` is `None` when no photo was recorded with the entry.
/// An empty string is never used as a "no image" marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Name of the tracked item. Not unique - an item accumulates many
    /// observations over time.
    pub item_name: String,
    /// Calendar date of the valuation (no time-of-day).
    pub observed_date: NaiveDate,
    /// Recorded value, non-negative, in the user's single implicit currency.
    pub value: Decimal,
    /// Identifier of the photo stored alongside this entry, if any.
    pub attachment_id: Option<String>,
}

/// Binary photo content submitted together with a new observation.
///
/// The content is opaque to the tracker: it is stored and handed back
/// byte-for-byte, never decoded or inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttachment {
    /// Identifier the photo will be addressed by (e.g., the original
    /// filename of the upload).
    pub id: String,
    /// Raw image bytes.
    pub content: Vec<u8>,
}

/// Request for recording a new observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewObservation {
    /// Name of the item being valued.
    pub item_name: String,
    /// Date of the valuation.
    pub observed_date: NaiveDate,
    /// Recorded value.
    pub value: Decimal,
    /// Optional photo to store with the entry.
    pub attachment: Option<NewAttachment>,
}
