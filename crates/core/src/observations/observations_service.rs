//! Observation ingestion service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::observations_model::{NewObservation, Observation};
use super::observations_traits::{
    AttachmentRepositoryTrait, ObservationRepositoryTrait, ObservationServiceTrait,
};
use crate::errors::{Error, Result, ValidationError};

/// Service for recording observations.
///
/// This is the ingestion boundary of the application: entries are validated
/// here, so the stored log only ever contains well-formed observations.
pub struct ObservationService {
    observation_repository: Arc<dyn ObservationRepositoryTrait>,
    attachment_repository: Arc<dyn AttachmentRepositoryTrait>,
}

impl ObservationService {
    /// Creates a new ObservationService instance.
    pub fn new(
        observation_repository: Arc<dyn ObservationRepositoryTrait>,
        attachment_repository: Arc<dyn AttachmentRepositoryTrait>,
    ) -> Self {
        Self {
            observation_repository,
            attachment_repository,
        }
    }

    /// Validates a new entry before anything is stored.
    fn validate(request: &NewObservation) -> Result<()> {
        if request.item_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Item name cannot be empty".to_string(),
            )));
        }
        if request.value < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Value cannot be negative: {}",
                request.value
            ))));
        }
        if let Some(attachment) = &request.attachment {
            if attachment.id.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Attachment identifier cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ObservationServiceTrait for ObservationService {
    async fn record(&self, request: NewObservation) -> Result<Observation> {
        Self::validate(&request)?;

        debug!(
            "Recording observation for '{}' on {}: {}",
            request.item_name, request.observed_date, request.value
        );

        // Store the photo first so the appended observation never references
        // an attachment that does not exist yet.
        let attachment_id = match request.attachment {
            Some(attachment) => {
                self.attachment_repository
                    .put(&attachment.id, attachment.content)
                    .await?;
                Some(attachment.id)
            }
            None => None,
        };

        let observation = Observation {
            item_name: request.item_name,
            observed_date: request.observed_date,
            value: request.value,
            attachment_id,
        };

        self.observation_repository.append(observation).await
    }

    fn all(&self) -> Result<Vec<Observation>> {
        self.observation_repository.read_all()
    }
}
