//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod like_repo;
pub mod track_repo;
pub mod user_repo;

pub use like_repo::LikeRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
