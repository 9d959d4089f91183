use async_graphql::{Context, Object};
use trackshare_core::tracks::TrackFields;
use trackshare_core::types::DbId;

use super::types::{CreateLikePayload, DeleteTrackPayload, TrackObject};
use super::{caller, pool};
use crate::error::IntoGqlResult;
use crate::handlers::{like, track};

/// Write operations. Each checks the caller before touching the store.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Submit a new track owned by the caller. Requires login.
    async fn create_track(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: Option<String>,
        url: String,
    ) -> async_graphql::Result<TrackObject> {
        let fields = TrackFields::new(title, description, url);
        let created = track::create_track(pool(ctx)?, &caller(ctx), fields)
            .await
            .into_gql()?;
        Ok(created.into())
    }

    /// Replace all editable fields of a track. Only its owner may do this.
    async fn update_track(
        &self,
        ctx: &Context<'_>,
        track_id: DbId,
        title: String,
        description: String,
        url: String,
    ) -> async_graphql::Result<TrackObject> {
        let fields = TrackFields::new(title, Some(description), url);
        let updated = track::update_track(pool(ctx)?, &caller(ctx), track_id, fields)
            .await
            .into_gql()?;
        Ok(updated.into())
    }

    /// Delete a track and its likes. Only its owner may do this.
    async fn delete_track(
        &self,
        ctx: &Context<'_>,
        track_id: DbId,
    ) -> async_graphql::Result<DeleteTrackPayload> {
        let track_id = track::delete_track(pool(ctx)?, &caller(ctx), track_id)
            .await
            .into_gql()?;
        Ok(DeleteTrackPayload { track_id })
    }

    /// Like a track as the caller. Requires login; repeat likes are kept.
    async fn create_like(
        &self,
        ctx: &Context<'_>,
        track_id: DbId,
    ) -> async_graphql::Result<CreateLikePayload> {
        let outcome = like::create_like(pool(ctx)?, &caller(ctx), track_id)
            .await
            .into_gql()?;
        Ok(CreateLikePayload {
            user: outcome.user.into(),
            track: outcome.track.into(),
        })
    }
}
