//! Track entity model and DTOs.

use sqlx::FromRow;
use trackshare_core::tracks::TrackFields;
use trackshare_core::types::{DbId, Timestamp};

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub created_at: Timestamp,
    pub posted_by: Option<DbId>,
}

/// DTO for inserting a track on behalf of its owner.
#[derive(Debug, Clone)]
pub struct CreateTrack {
    pub title: String,
    pub description: String,
    pub url: String,
    pub posted_by: DbId,
}

impl CreateTrack {
    pub fn from_fields(fields: TrackFields, posted_by: DbId) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            url: fields.url,
            posted_by,
        }
    }
}

/// DTO for replacing a track's editable fields. Every field is required;
/// there is no partial update.
#[derive(Debug, Clone)]
pub struct UpdateTrack {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl From<TrackFields> for UpdateTrack {
    fn from(fields: TrackFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            url: fields.url,
        }
    }
}
