use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graphql::AppSchema;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and schema are reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trackshare_db::DbPool,
    /// Server configuration (JWT settings are read by the caller extractor).
    pub config: Arc<ServerConfig>,
    /// Executable GraphQL schema; holds its own handle to the pool.
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(pool: trackshare_db::DbPool, config: ServerConfig) -> Self {
        let schema = crate::graphql::build_schema(pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            schema,
        }
    }
}
