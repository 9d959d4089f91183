//! GraphQL schema: the `Query` and `Mutation` roots and the object types
//! they return.
//!
//! Resolvers read two pieces of context data:
//! - [`DbPool`], attached once when the schema is built.
//! - [`Caller`](trackshare_core::identity::Caller), attached per request by
//!   [`crate::handlers::graphql::execute`].

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, Schema};
use trackshare_core::identity::Caller;
use trackshare_db::DbPool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the pool attached as context data.
pub fn build_schema(pool: DbPool) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// The pool attached in [`build_schema`].
pub(crate) fn pool<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DbPool> {
    ctx.data::<DbPool>()
}

/// The request's caller; anonymous when none was attached.
pub(crate) fn caller(ctx: &Context<'_>) -> Caller {
    ctx.data_opt::<Caller>().copied().unwrap_or(Caller::Anonymous)
}
