//! Portfolio query service trait.

use super::portfolio_model::{ItemDetail, PortfolioSummary};
use crate::errors::Result;

/// Trait defining the contract for portfolio queries.
///
/// Every method re-reads the full observation log and recomputes its
/// result from scratch; no aggregation state is cached between requests.
pub trait PortfolioServiceTrait: Send + Sync {
    /// Computes the dashboard payload: per-item snapshots, portfolio
    /// statistics, and the value series.
    fn summary(&self) -> Result<PortfolioSummary>;

    /// Computes the detail view of one item: its date-sorted history and
    /// the photo of its most recent observation.
    ///
    /// An unknown name yields a detail view with an empty history.
    fn item_detail(&self, item_name: &str) -> Result<ItemDetail>;

    /// Fetches raw photo content by identifier, for the presentation
    /// layer to render. The bytes pass through untouched.
    fn attachment_content(&self, attachment_id: &str) -> Result<Option<Vec<u8>>>;
}
