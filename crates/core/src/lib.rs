//! Werttracker Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Werttracker: the
//! observation log domain model, the aggregation engine that derives
//! per-item snapshots and portfolio statistics from it, and the query
//! layer for item detail views. It is database-agnostic and defines
//! traits that are implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod observations;
pub mod portfolio;

// Re-export common types from the observation and portfolio modules
pub use observations::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
