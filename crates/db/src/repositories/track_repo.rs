//! Repository for the `tracks` table.

use sqlx::PgPool;
use trackshare_core::search::{contains_pattern, is_matchable, normalize_search};
use trackshare_core::types::DbId;

use crate::models::track::{CreateTrack, Track, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, url, created_at, posted_by";

/// [`COLUMNS`] qualified with the `t` alias, for queries joining `users`.
const QUALIFIED_COLUMNS: &str =
    "t.id, t.title, t.description, t.url, t.created_at, t.posted_by";

/// Provides CRUD and search operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, description, url, posted_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(input.posted_by)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// List tracks whose title, description, url, or owner's username
    /// contains `needle`, ignoring case. Ordered by insertion.
    pub async fn search(pool: &PgPool, needle: &str) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM tracks t \
             LEFT JOIN users u ON u.id = t.posted_by \
             WHERE t.title ILIKE $1 ESCAPE '\\' \
                OR t.description ILIKE $1 ESCAPE '\\' \
                OR t.url ILIKE $1 ESCAPE '\\' \
                OR u.username ILIKE $1 ESCAPE '\\' \
             ORDER BY t.id"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(contains_pattern(needle))
            .fetch_all(pool)
            .await
    }

    /// [`TrackRepo::search`] when `search` is a non-empty needle,
    /// otherwise [`TrackRepo::list`]. A needle no stored text can contain
    /// yields an empty list without querying.
    pub async fn list_matching(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<Track>, sqlx::Error> {
        match normalize_search(search) {
            Some(needle) if !is_matchable(needle) => Ok(Vec::new()),
            Some(needle) => Self::search(pool, needle).await,
            None => Self::list(pool).await,
        }
    }

    /// Replace the editable fields of a track owned by `owner`.
    ///
    /// `id`, `created_at` and `posted_by` are left untouched. Returns `None`
    /// if no track with `id` is owned by `owner`, so a check made before the
    /// call cannot be invalidated by a concurrent delete.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                title = $3, \
                description = $4, \
                url = $5 \
             WHERE id = $1 AND posted_by = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(owner)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track owned by `owner` together with its likes, in one
    /// transaction.
    ///
    /// Returns `false` (and deletes nothing) if no track with `id` is owned
    /// by `owner`.
    pub async fn delete_owned(pool: &PgPool, id: DbId, owner: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let likes = sqlx::query(
            "DELETE FROM likes \
             WHERE track_id = (SELECT id FROM tracks WHERE id = $1 AND posted_by = $2)",
        )
        .bind(id)
        .bind(owner)
        .execute(&mut *tx)
        .await?;

        let track = sqlx::query("DELETE FROM tracks WHERE id = $1 AND posted_by = $2")
            .bind(id)
            .bind(owner)
            .execute(&mut *tx)
            .await?;

        if track.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(
            track_id = id,
            likes_removed = likes.rows_affected(),
            "Deleted track with its likes"
        );
        Ok(true)
    }
}
