//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` input DTO used for both create and full replacement

pub mod question;
pub mod tryout;
