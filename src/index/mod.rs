//! Index structures over artworks.

pub mod bst;

pub use bst::{ArtGallery, Iter};
