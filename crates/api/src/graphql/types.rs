//! GraphQL object types.
//!
//! Each type wraps a database row and maps it to the API field by field;
//! relations (`postedBy`, `likes`, `user`, `track`) are resolved on demand.

use async_graphql::{Context, Object, SimpleObject};
use trackshare_core::error::CoreError;
use trackshare_core::types::{DbId, Timestamp};
use trackshare_db::models::like::Like;
use trackshare_db::models::track::Track;
use trackshare_db::models::user::User;
use trackshare_db::repositories::{LikeRepo, TrackRepo, UserRepo};

use super::pool;
use crate::error::{AppError, IntoGqlResult};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user. Only public fields are exposed.
pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> DbId {
        self.0.id
    }

    /// Display name.
    async fn username(&self) -> &str {
        &self.0.username
    }
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self(user)
    }
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// A user-submitted link.
pub struct TrackObject(pub Track);

#[Object(name = "Track")]
impl TrackObject {
    async fn id(&self) -> DbId {
        self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn url(&self) -> &str {
        &self.0.url
    }

    async fn created_at(&self) -> Timestamp {
        self.0.created_at
    }

    /// The owner; the only user allowed to update or delete the track.
    async fn posted_by(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<UserObject>> {
        let Some(user_id) = self.0.posted_by else {
            return Ok(None);
        };
        let user = UserRepo::find_by_id(pool(ctx)?, user_id)
            .await
            .map_err(AppError::from)
            .into_gql()?;
        Ok(user.map(UserObject::from))
    }

    async fn likes(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<LikeObject>> {
        let likes = LikeRepo::list_for_track(pool(ctx)?, self.0.id)
            .await
            .map_err(AppError::from)
            .into_gql()?;
        Ok(likes.into_iter().map(LikeObject::from).collect())
    }
}

impl From<Track> for TrackObject {
    fn from(track: Track) -> Self {
        Self(track)
    }
}

// ---------------------------------------------------------------------------
// Like
// ---------------------------------------------------------------------------

/// One user's endorsement of one track.
pub struct LikeObject(pub Like);

#[Object(name = "Like")]
impl LikeObject {
    async fn id(&self) -> DbId {
        self.0.id
    }

    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<UserObject> {
        let user_id = self.0.user_id;
        let user = UserRepo::find_by_id(pool(ctx)?, user_id)
            .await
            .map_err(AppError::from)
            .and_then(|user| {
                user.ok_or(AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: user_id,
                }))
            })
            .into_gql()?;
        Ok(user.into())
    }

    async fn track(&self, ctx: &Context<'_>) -> async_graphql::Result<TrackObject> {
        let track_id = self.0.track_id;
        let track = TrackRepo::find_by_id(pool(ctx)?, track_id)
            .await
            .map_err(AppError::from)
            .and_then(|track| track.ok_or(AppError::Core(CoreError::track_not_found(track_id))))
            .into_gql()?;
        Ok(track.into())
    }
}

impl From<Like> for LikeObject {
    fn from(like: Like) -> Self {
        Self(like)
    }
}

// ---------------------------------------------------------------------------
// Mutation payloads
// ---------------------------------------------------------------------------

/// Returned by `deleteTrack`; the record itself no longer exists.
#[derive(SimpleObject)]
pub struct DeleteTrackPayload {
    pub track_id: DbId,
}

/// Returned by `createLike`: the caller and the track they liked.
#[derive(SimpleObject)]
pub struct CreateLikePayload {
    pub user: UserObject,
    pub track: TrackObject,
}
