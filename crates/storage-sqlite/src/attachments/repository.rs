//! SQLite repository for photo attachments.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::upsert::excluded;
use log::debug;

use werttracker_core::observations::AttachmentRepositoryTrait;
use werttracker_core::Result;

use super::model::AttachmentDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::attachments;
use crate::schema::attachments::dsl::*;

/// Attachment blob store backed by the `attachments` table.
pub struct AttachmentRepository {
    pool: Arc<DbPool>,
}

impl AttachmentRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AttachmentRepository { pool }
    }
}

#[async_trait]
impl AttachmentRepositoryTrait for AttachmentRepository {
    fn get(&self, attachment_id: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = get_connection(&self.pool)?;
        let row = attachments
            .find(attachment_id)
            .first::<AttachmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(|r| r.content))
    }

    async fn put(&self, attachment_id: &str, data: Vec<u8>) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let row = AttachmentDB {
            id: attachment_id.to_string(),
            content: data,
            created_at: Utc::now().to_rfc3339(),
        };

        // Re-uploading under the same identifier replaces the content.
        conn.immediate_transaction(|conn| {
            diesel::insert_into(attachments::table)
                .values(&row)
                .on_conflict(id)
                .do_update()
                .set((
                    content.eq(excluded(content)),
                    created_at.eq(excluded(created_at)),
                ))
                .execute(conn)
        })
        .map_err(StorageError::from)?;

        debug!("Stored attachment '{}' ({} bytes)", row.id, row.content.len());
        Ok(())
    }
}
