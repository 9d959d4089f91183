//! Domain error type shared by every layer.

use crate::types::DbId;

/// Failure kinds a track or like operation can surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A referenced record is absent; the message is shown as-is.
    #[error("{0}")]
    Missing(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is anonymous where a logged-in user is required.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is logged in but does not own the record.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn track_not_found(id: DbId) -> Self {
        CoreError::NotFound { entity: "Track", id }
    }

    /// The track a like points at does not exist.
    pub fn like_target_missing() -> Self {
        CoreError::Missing(crate::permissions::LIKE_TRACK_NOT_FOUND)
    }
}
