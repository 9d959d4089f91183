//! Route definitions for the GraphQL endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::graphql;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET  /graphql -> GraphiQL IDE
/// POST /graphql -> execute query or mutation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/graphql", get(graphql::graphiql).post(graphql::execute))
}
