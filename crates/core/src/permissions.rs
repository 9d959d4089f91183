//! Authentication and ownership rules for track and like writes.
//!
//! A track's `posted_by` is fixed at creation; [`ensure_owner`] against it
//! decides every update and delete for the track's whole lifetime.

use crate::error::CoreError;
use crate::identity::Caller;
use crate::types::DbId;

pub const CREATE_TRACK_LOGIN_REQUIRED: &str = "Log in to add a track";
pub const LIKE_LOGIN_REQUIRED: &str = "Login to like the track";
pub const LIKE_TRACK_NOT_FOUND: &str = "Cannot find a track with given track id";
pub const UPDATE_TRACK_DENIED: &str = "Not permitted to update this track";
pub const DELETE_TRACK_DENIED: &str = "Not permitted to delete this track";

/// Whether `caller` owns a record whose owner reference is `owner`.
///
/// A record without an owner belongs to nobody, and an anonymous caller
/// owns nothing.
pub fn is_owner(owner: Option<DbId>, caller: &Caller) -> bool {
    match (owner, caller.user_id()) {
        (Some(owner_id), Some(caller_id)) => owner_id == caller_id,
        _ => false,
    }
}

/// Fail with `Forbidden(message)` unless `caller` owns the record.
pub fn ensure_owner(
    owner: Option<DbId>,
    caller: &Caller,
    message: &str,
) -> Result<DbId, CoreError> {
    match caller.user_id() {
        Some(id) if is_owner(owner, caller) => Ok(id),
        _ => Err(CoreError::Forbidden(message.to_string())),
    }
}
