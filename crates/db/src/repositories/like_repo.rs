//! Repository for the `likes` table.

use sqlx::PgPool;
use trackshare_core::types::DbId;

use crate::models::like::Like;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, track_id";

/// Provides create and list operations for likes.
pub struct LikeRepo;

impl LikeRepo {
    /// Record that `user_id` likes `track_id`.
    ///
    /// The insert selects the track in the same statement, so it returns
    /// `None` instead of a foreign-key error when the track is gone.
    /// Repeated calls create repeated likes.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        track_id: DbId,
    ) -> Result<Option<Like>, sqlx::Error> {
        let query = format!(
            "INSERT INTO likes (user_id, track_id) \
             SELECT $1, id FROM tracks WHERE id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(track_id)
            .fetch_optional(pool)
            .await
    }

    /// List every like in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Like>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM likes ORDER BY id");
        sqlx::query_as::<_, Like>(&query).fetch_all(pool).await
    }

    /// List the likes of one track in storage order.
    pub async fn list_for_track(pool: &PgPool, track_id: DbId) -> Result<Vec<Like>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM likes WHERE track_id = $1 ORDER BY id");
        sqlx::query_as::<_, Like>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }
}
