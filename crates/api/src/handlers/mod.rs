//! Request handlers.
//!
//! [`track`] and [`like`] hold the operations behind the GraphQL resolvers;
//! they take the pool and the [`Caller`](trackshare_core::identity::Caller)
//! explicitly so they can be exercised without a transport. [`auth`] and
//! [`graphql`] are Axum handlers.

pub mod auth;
pub mod graphql;
pub mod like;
pub mod track;
