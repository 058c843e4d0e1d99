//! SQLite storage implementation for Werttracker.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `werttracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (embedded)
//! - The observation log repository (append-only, insertion-ordered)
//! - The attachment blob repository
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. `core` is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!      storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod attachments;
pub mod observations;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export repositories
pub use attachments::AttachmentRepository;
pub use observations::ObservationRepository;

// Re-export from werttracker-core for convenience
pub use werttracker_core::errors::{DatabaseError, Error, Result};
