//! SQLite repository for the observation log.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;

use werttracker_core::observations::{Observation, ObservationRepositoryTrait};
use werttracker_core::Result;

use super::model::{NewObservationDB, ObservationDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::observations;
use crate::schema::observations::dsl::*;

/// Append-only observation log backed by the `observations` table.
pub struct ObservationRepository {
    pool: Arc<DbPool>,
}

impl ObservationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ObservationRepository { pool }
    }
}

#[async_trait]
impl ObservationRepositoryTrait for ObservationRepository {
    fn read_all(&self) -> Result<Vec<Observation>> {
        let mut conn = get_connection(&self.pool)?;
        // Ascending autoincrement id is insertion order, which the
        // aggregation tie-breaks depend on.
        let rows = observations
            .order(id.asc())
            .load::<ObservationDB>(&mut conn)
            .map_err(StorageError::from)?;

        debug!("Loaded {} observations", rows.len());
        Ok(rows.into_iter().map(Observation::from).collect())
    }

    async fn append(&self, observation: Observation) -> Result<Observation> {
        let mut conn = get_connection(&self.pool)?;
        let new_row = NewObservationDB::from(&observation);

        let stored = conn
            .immediate_transaction(|conn| {
                diesel::insert_into(observations::table)
                    .values(&new_row)
                    .returning(ObservationDB::as_returning())
                    .get_result::<ObservationDB>(conn)
            })
            .map_err(StorageError::from)?;

        debug!(
            "Appended observation #{} for '{}'",
            stored.id, stored.item_name
        );
        Ok(Observation::from(stored))
    }
}
