//! # Core models for famcount
//!
//! This crate holds the pieces of famcount that know nothing about matrices: the
//! [models::FamilyId] type, the classifier that turns raw annotation tokens into family
//! identifiers, and small I/O helpers for reading and writing (optionally gzipped) files.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
