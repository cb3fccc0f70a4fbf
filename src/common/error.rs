//! Error types for the artwork catalog.

use thiserror::Error;

use crate::common::config::MIN_YEAR;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the catalog.
///
/// Every error is synchronous and surfaced to the caller; nothing is
/// retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Year of creation is older than [`MIN_YEAR`].
    #[error("Invalid year of creation {0}: must be at least {min}", min = MIN_YEAR)]
    InvalidYear(i32),

    /// Cost is zero, negative, or not a finite number.
    #[error("Invalid cost {0}: the cost must be positive")]
    InvalidCost(f64),

    /// Name is empty or only whitespace.
    #[error("Invalid artwork name")]
    InvalidName,

    /// An absent artwork was handed to the catalog.
    #[error("Artwork is missing")]
    MissingArtwork,

    /// No artwork matched on the search path.
    ///
    /// Matching ignores cost, so only the name and year are reported.
    #[error("No artwork named {name:?} from {year} found")]
    NotFound { name: String, year: i32 },
}

impl Error {
    /// True for the errors raised while validating an artwork's fields.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidYear(_) | Error::InvalidCost(_) | Error::InvalidName
        )
    }
}
