//! artgallery - An in-memory artwork catalog indexed by a binary search tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          artgallery                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/bst/)                    │   │
//! │  │   ArtGallery: insert | lookup | lookup_all | get_best    │   │
//! │  │               remove | height | serialize | iter         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Common (common/)                            │   │
//! │  │     Artwork (year, cost, name) + Error + config          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Artwork, Error, config)
//! - [`index`] - The binary search tree catalog
//!
//! # Quick Start
//! ```
//! use artgallery::{ArtGallery, Artwork};
//!
//! let mut gallery = ArtGallery::new();
//! gallery.insert(Artwork::new("Stars", 1988, 300.0).unwrap());
//! gallery.insert(Artwork::new("Sky", 2003, 550.0).unwrap());
//!
//! assert_eq!(
//!     gallery.serialize(),
//!     "[(Name: Stars) (Year: 1988) (Cost: $300.0)]\n\
//!      [(Name: Sky) (Year: 2003) (Cost: $550.0)]\n"
//! );
//! ```
//!
//! # Logging
//! Mutations emit `tracing` events at `trace` and `debug` level. The library
//! never installs a subscriber.

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{COST_TOLERANCE, MIN_YEAR};
pub use common::{Artwork, Error, Result};

pub use index::bst::{ArtGallery, Iter};
