//! Common types and utilities shared across the catalog.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The [`Artwork`] record

mod artwork;
pub mod config;
pub mod error;

pub use artwork::Artwork;
pub use error::{Error, Result};
