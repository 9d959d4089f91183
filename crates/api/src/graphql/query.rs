use async_graphql::{Context, Object};
use trackshare_db::repositories::UserRepo;

use super::types::{LikeObject, TrackObject, UserObject};
use super::{caller, pool};
use crate::error::{AppError, IntoGqlResult};
use crate::handlers::{like, track};

/// Read-only operations. None of them require a logged-in caller.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All tracks, or those whose title, description, url or owner's
    /// username contains `search` (case-insensitive). An empty `search`
    /// applies no filter.
    async fn tracks(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
    ) -> async_graphql::Result<Vec<TrackObject>> {
        let tracks = track::list_tracks(pool(ctx)?, search.as_deref())
            .await
            .into_gql()?;
        Ok(tracks.into_iter().map(TrackObject::from).collect())
    }

    /// Every like, in storage order.
    async fn likes(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<LikeObject>> {
        let likes = like::list_likes(pool(ctx)?).await.into_gql()?;
        Ok(likes.into_iter().map(LikeObject::from).collect())
    }

    /// The logged-in caller, or `null` when anonymous.
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<UserObject>> {
        let Some(user_id) = caller(ctx).user_id() else {
            return Ok(None);
        };
        let user = UserRepo::find_by_id(pool(ctx)?, user_id)
            .await
            .map_err(AppError::from)
            .into_gql()?;
        Ok(user.map(UserObject::from))
    }
}
