//! Track queries and mutations.

use trackshare_core::error::CoreError;
use trackshare_core::identity::Caller;
use trackshare_core::permissions::{
    ensure_owner, CREATE_TRACK_LOGIN_REQUIRED, DELETE_TRACK_DENIED, UPDATE_TRACK_DENIED,
};
use trackshare_core::tracks::TrackFields;
use trackshare_core::types::DbId;
use trackshare_db::models::track::{CreateTrack, Track, UpdateTrack};
use trackshare_db::repositories::TrackRepo;
use trackshare_db::DbPool;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// List every track, or only those matching `search` when it is non-empty.
pub async fn list_tracks(pool: &DbPool, search: Option<&str>) -> AppResult<Vec<Track>> {
    Ok(TrackRepo::list_matching(pool, search).await?)
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Create a track owned by the caller.
pub async fn create_track(
    pool: &DbPool,
    caller: &Caller,
    fields: TrackFields,
) -> AppResult<Track> {
    let user_id = caller.require_user(CREATE_TRACK_LOGIN_REQUIRED)?;
    fields.validate()?;

    let track = TrackRepo::create(pool, &CreateTrack::from_fields(fields, user_id)).await?;

    tracing::info!(user_id, track_id = track.id, "Track created");
    Ok(track)
}

/// Replace the title, description and url of a track the caller owns.
pub async fn update_track(
    pool: &DbPool,
    caller: &Caller,
    track_id: DbId,
    fields: TrackFields,
) -> AppResult<Track> {
    let owner = find_and_authorize(pool, track_id, caller, UPDATE_TRACK_DENIED).await?;
    fields.validate()?;

    let track = TrackRepo::update_owned(pool, track_id, owner, &UpdateTrack::from(fields))
        .await?
        .ok_or(AppError::Core(CoreError::track_not_found(track_id)))?;

    tracing::info!(user_id = owner, track_id, "Track updated");
    Ok(track)
}

/// Delete a track the caller owns, along with its likes.
///
/// Returns the id of the deleted track.
pub async fn delete_track(pool: &DbPool, caller: &Caller, track_id: DbId) -> AppResult<DbId> {
    let owner = find_and_authorize(pool, track_id, caller, DELETE_TRACK_DENIED).await?;

    if !TrackRepo::delete_owned(pool, track_id, owner).await? {
        return Err(AppError::Core(CoreError::track_not_found(track_id)));
    }

    tracing::info!(user_id = owner, track_id, "Track deleted");
    Ok(track_id)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up a track and check that the caller owns it.
///
/// Returns `NotFound` if the track does not exist and `Forbidden` (with
/// `denied` as the message) if the caller is not its owner. On success,
/// returns the owner's user id.
async fn find_and_authorize(
    pool: &DbPool,
    track_id: DbId,
    caller: &Caller,
    denied: &str,
) -> AppResult<DbId> {
    let track = TrackRepo::find_by_id(pool, track_id)
        .await?
        .ok_or(AppError::Core(CoreError::track_not_found(track_id)))?;

    Ok(ensure_owner(track.posted_by, caller, denied)?)
}
