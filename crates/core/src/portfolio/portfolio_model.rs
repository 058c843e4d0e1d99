//! Portfolio view models handed to the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::performance::PortfolioPerformance;
use super::snapshot::ItemSnapshot;
use super::valuation::PortfolioValuePoint;
use crate::observations::Observation;

/// Everything the dashboard needs, derived from the full log in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Latest snapshot per item, keyed (and therefore ordered) by item name.
    pub snapshots: BTreeMap<String, ItemSnapshot>,
    /// Portfolio-wide change statistics.
    pub performance: PortfolioPerformance,
    /// Per-date value totals, ascending by date.
    pub value_series: Vec<PortfolioValuePoint>,
}

/// Detail view of a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    /// The item's full observation history, ascending by date.
    pub history: Vec<Observation>,
    /// Photo recorded with the most recent observation, if any.
    pub latest_attachment_id: Option<String>,
}
