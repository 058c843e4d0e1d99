//! Database models for the observation log.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use werttracker_core::observations::Observation;

/// Date format used for the `observed_date` text column.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database model for a stored observation.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::observations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ObservationDB {
    pub id: i32,
    pub item_name: String,
    pub observed_date: String,
    pub value: String,
    pub attachment_id: Option<String>,
    pub created_at: String,
}

/// Database model for appending a new observation.
///
/// The id is assigned by the autoincrement column on insert.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::observations)]
pub struct NewObservationDB {
    pub item_name: String,
    pub observed_date: String,
    pub value: String,
    pub attachment_id: Option<String>,
    pub created_at: String,
}

// Conversion to the domain model
impl From<ObservationDB> for Observation {
    fn from(db: ObservationDB) -> Self {
        Observation {
            item_name: db.item_name,
            observed_date: NaiveDate::parse_from_str(&db.observed_date, DATE_FORMAT)
                .unwrap_or_default(),
            value: Decimal::from_str(&db.value).unwrap_or_default(),
            // Rows imported from older data may carry a blank identifier;
            // that means "no photo", not a photo with an empty name.
            attachment_id: db.attachment_id.filter(|a| !a.trim().is_empty()),
        }
    }
}

impl From<&Observation> for NewObservationDB {
    fn from(domain: &Observation) -> Self {
        Self {
            item_name: domain.item_name.clone(),
            observed_date: domain.observed_date.format(DATE_FORMAT).to_string(),
            value: domain.value.to_string(),
            attachment_id: domain.attachment_id.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
