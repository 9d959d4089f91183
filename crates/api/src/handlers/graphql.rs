//! Axum handlers for the GraphQL endpoint.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::middleware::auth::CallerIdentity;
use crate::state::AppState;

/// POST /graphql
///
/// Execute a query or mutation. The caller identity is attached to the
/// request so resolvers can authorize against it.
pub async fn execute(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state
        .schema
        .execute(request.into_inner().data(caller))
        .await
        .into()
}

/// GET /graphql
///
/// Serve the GraphiQL IDE pointed at the POST endpoint.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
