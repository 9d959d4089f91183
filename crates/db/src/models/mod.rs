//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the table row and
//! the DTOs its repository accepts for writes.

pub mod like;
pub mod track;
pub mod user;
