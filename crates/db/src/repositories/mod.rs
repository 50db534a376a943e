//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod question_repo;
pub mod tryout_repo;

pub use question_repo::QuestionRepo;
pub use tryout_repo::TryoutRepo;
