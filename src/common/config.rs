//! Configuration constants for the artwork catalog.

/// Earliest accepted year of creation.
///
/// Anything older is rejected when an [`Artwork`](crate::Artwork) is built.
pub const MIN_YEAR: i32 = 1000;

/// Absolute tolerance applied when comparing a stored cost against the
/// maximum cost of a [`lookup_all`](crate::ArtGallery::lookup_all) query.
///
/// # Scope
/// Only the secondary search uses it. The composite ordering and
/// `same_entry` compare costs exactly.
pub const COST_TOLERANCE: f64 = 0.0001;
