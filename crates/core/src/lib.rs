//! Domain types and rules shared by the database and API crates.
//!
//! Nothing in here performs IO: the modules hold the error type, the caller
//! identity, ownership checks, and the input rules for tracks and users.

pub mod error;
pub mod identity;
pub mod permissions;
pub mod search;
pub mod tracks;
pub mod types;
pub mod users;
