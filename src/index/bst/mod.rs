//! Unbalanced binary search tree keyed by the artwork composite order.
//!
//! - [`ArtGallery`] - the catalog and its operations
//! - [`Iter`] - in-order traversal
//! - `node` - owned nodes and the subtree-rebuild helpers used by removal

mod gallery;
mod iter;
mod node;

pub use gallery::ArtGallery;
pub use iter::Iter;
