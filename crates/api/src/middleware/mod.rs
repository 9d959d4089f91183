//! Request extractors.
//!
//! - [`auth::CallerIdentity`] -- Resolves the optional Bearer token into a
//!   [`trackshare_core::identity::Caller`].

pub mod auth;
