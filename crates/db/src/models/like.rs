//! Like entity model.

use sqlx::FromRow;
use trackshare_core::types::DbId;

/// A row from the `likes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub track_id: DbId,
}
