//! Database models for photo attachments.

use diesel::prelude::*;

/// Database model for a stored attachment blob.
///
/// The content is opaque: it is written and read back byte-for-byte,
/// never inspected.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::attachments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AttachmentDB {
    pub id: String,
    pub content: Vec<u8>,
    pub created_at: String,
}
