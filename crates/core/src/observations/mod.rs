//! Observation log module.
//!
//! - [`observations_model`] - Domain models for observations and attachments
//! - [`observations_traits`] - Store and service traits
//! - [`observations_service`] - Ingestion service with boundary validation

pub mod observations_model;
pub mod observations_service;
pub mod observations_traits;

#[cfg(test)]
mod observations_model_tests;

pub use observations_model::{NewAttachment, NewObservation, Observation};
pub use observations_service::ObservationService;
pub use observations_traits::{
    AttachmentRepositoryTrait, ObservationRepositoryTrait, ObservationServiceTrait,
};
