//! Portfolio module: the aggregation engine and the query layer.
//!
//! - [`snapshot`] - Latest value, date, and photo per item, with the
//!   first-to-latest change percentage
//! - [`performance`] - Portfolio totals, average change, top gainer/loser
//! - [`valuation`] - Per-date portfolio value series
//! - [`history`] - Per-item history selection for detail views
//! - [`portfolio_service`] - Query service recomputing all of the above
//!   from the stored log on every request
//!
//! All derivations are pure, synchronous passes over an in-memory log
//! snapshot; nothing here performs I/O or keeps state between requests.

pub mod history;
pub mod performance;
pub mod portfolio_model;
pub mod portfolio_service;
pub mod portfolio_traits;
pub mod snapshot;
pub mod valuation;


pub use history::{item_history, latest_attachment};
pub use performance::{calculate_performance, PortfolioPerformance};
pub use portfolio_model::{ItemDetail, PortfolioSummary};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
pub use snapshot::{calculate_latest_snapshots, ItemSnapshot};
pub use valuation::{calculate_portfolio_series, PortfolioValuePoint};
