//! Like queries and mutations.

use trackshare_core::error::CoreError;
use trackshare_core::identity::Caller;
use trackshare_core::permissions::LIKE_LOGIN_REQUIRED;
use trackshare_core::types::DbId;
use trackshare_db::models::like::Like;
use trackshare_db::models::track::Track;
use trackshare_db::models::user::User;
use trackshare_db::repositories::{LikeRepo, TrackRepo, UserRepo};
use trackshare_db::DbPool;

use crate::error::{AppError, AppResult};

/// Result of a successful like: who liked what.
#[derive(Debug, Clone)]
pub struct LikeOutcome {
    pub like: Like,
    pub user: User,
    pub track: Track,
}

/// List every like in storage order.
pub async fn list_likes(pool: &DbPool) -> AppResult<Vec<Like>> {
    Ok(LikeRepo::list(pool).await?)
}

/// Record that the caller likes `track_id`.
///
/// Likes are not deduplicated: liking the same track again adds another
/// like.
pub async fn create_like(
    pool: &DbPool,
    caller: &Caller,
    track_id: DbId,
) -> AppResult<LikeOutcome> {
    let user_id = caller.require_user(LIKE_LOGIN_REQUIRED)?;

    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LIKE_LOGIN_REQUIRED.into())))?;

    let track = TrackRepo::find_by_id(pool, track_id)
        .await?
        .ok_or(AppError::Core(CoreError::like_target_missing()))?;

    // The insert re-checks the track, so a concurrent delete surfaces as
    // the same NotFound rather than a foreign-key violation.
    let like = LikeRepo::create(pool, user.id, track.id)
        .await?
        .ok_or(AppError::Core(CoreError::like_target_missing()))?;

    tracing::info!(user_id, track_id, like_id = like.id, "Track liked");
    Ok(LikeOutcome { like, user, track })
}
