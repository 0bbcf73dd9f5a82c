//! Storage layer for blackout
//!
//! This crate provides:
//! - JSON catalog of movie records
//! - In-place updates of a movie's hidden indices

pub mod catalog;
pub mod error;

pub use catalog::Catalog;
pub use error::{Result, StorageError};
