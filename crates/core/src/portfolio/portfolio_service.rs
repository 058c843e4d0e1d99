//! Portfolio query service implementation.

use std::sync::Arc;

use log::debug;

use super::history::{item_history, latest_attachment};
use super::performance::calculate_performance;
use super::portfolio_model::{ItemDetail, PortfolioSummary};
use super::portfolio_traits::PortfolioServiceTrait;
use super::snapshot::calculate_latest_snapshots;
use super::valuation::calculate_portfolio_series;
use crate::errors::Result;
use crate::observations::{AttachmentRepositoryTrait, ObservationRepositoryTrait};

/// Service answering dashboard and detail queries over the observation log.
pub struct PortfolioService {
    observation_repository: Arc<dyn ObservationRepositoryTrait>,
    attachment_repository: Arc<dyn AttachmentRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance.
    pub fn new(
        observation_repository: Arc<dyn ObservationRepositoryTrait>,
        attachment_repository: Arc<dyn AttachmentRepositoryTrait>,
    ) -> Self {
        Self {
            observation_repository,
            attachment_repository,
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn summary(&self) -> Result<PortfolioSummary> {
        let log = self.observation_repository.read_all()?;
        debug!("Computing portfolio summary over {} observations", log.len());

        let snapshots = calculate_latest_snapshots(&log);
        let performance = calculate_performance(&snapshots);
        let value_series = calculate_portfolio_series(&log);

        Ok(PortfolioSummary {
            snapshots,
            performance,
            value_series,
        })
    }

    fn item_detail(&self, item_name: &str) -> Result<ItemDetail> {
        let log = self.observation_repository.read_all()?;
        let history = item_history(&log, item_name);
        let latest_attachment_id = latest_attachment(&history).map(str::to_string);

        Ok(ItemDetail {
            history,
            latest_attachment_id,
        })
    }

    fn attachment_content(&self, attachment_id: &str) -> Result<Option<Vec<u8>>> {
        self.attachment_repository.get(attachment_id)
    }
}
