//! Per-item history queries.

pub mod history_query;

#[cfg(test)]
mod history_query_tests;

pub use history_query::{item_history, latest_attachment};
