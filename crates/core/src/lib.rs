//! Domain types and rules for the tryout authoring backend.
//!
//! Everything here is pure: no I/O, no async. The `db` crate persists the
//! entities and the `api` crate exposes them over HTTP.

pub mod error;
pub mod filter;
pub mod lock;
pub mod types;
pub mod validation;
