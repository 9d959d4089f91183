//! The identity of whoever issued the current request.

use crate::error::CoreError;
use crate::types::DbId;

/// Caller identity resolved from the request credentials.
///
/// Requests without credentials are [`Caller::Anonymous`]; the identity
/// provider never hands out a user id it has not authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    User(DbId),
}

impl Caller {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Caller::Anonymous)
    }

    pub fn user_id(&self) -> Option<DbId> {
        match self {
            Caller::Anonymous => None,
            Caller::User(id) => Some(*id),
        }
    }

    /// Return the caller's user id, or `Unauthorized` with `message` when
    /// the caller is anonymous.
    pub fn require_user(&self, message: &str) -> Result<DbId, CoreError> {
        self.user_id()
            .ok_or_else(|| CoreError::Unauthorized(message.to_string()))
    }
}
