//! The artwork record stored in the catalog.

use std::cmp::Ordering;
use std::fmt;

use crate::common::config::MIN_YEAR;
use crate::common::{Error, Result};

/// An immutable artwork entry: name, year of creation and cost.
///
/// # Two relations
/// Artworks carry two distinct notions of "the same":
/// - The composite ordering ([`Ord`], and the derived [`PartialEq`]) looks at
///   year, then cost, then name. Two artworks are equal only when all three
///   fields match exactly.
/// - [`Artwork::same_entry`] looks at name and year only and ignores cost.
///
/// The catalog routes searches with the first and matches lookups and
/// removals with the second. They are not interchangeable.
///
/// # Example
/// ```
/// use artgallery::Artwork;
///
/// let a = Artwork::new("Stars", 1988, 300.0).unwrap();
/// let b = Artwork::new("Stars", 1988, 450.0).unwrap();
///
/// assert!(a < b);
/// assert!(a.same_entry(&b));
/// assert_eq!(a.format(), "[(Name: Stars) (Year: 1988) (Cost: $300.0)]");
/// ```
#[derive(Debug, Clone)]
pub struct Artwork {
    name: String,
    year: i32,
    cost: f64,
}

impl Artwork {
    /// Create a new artwork.
    ///
    /// # Errors
    /// - `Error::InvalidYear` if `year` is older than [`MIN_YEAR`]
    /// - `Error::InvalidCost` if `cost` is not a positive finite number
    /// - `Error::InvalidName` if `name` is empty or blank
    ///
    /// Non-breaking spaces (U+00A0, U+2007, U+202F) do not count as blank.
    pub fn new(name: impl Into<String>, year: i32, cost: f64) -> Result<Self> {
        if year < MIN_YEAR {
            return Err(Error::InvalidYear(year));
        }
        if !(cost > 0.0 && cost.is_finite()) {
            return Err(Error::InvalidCost(cost));
        }
        let name = name.into();
        if name.chars().all(is_blank_char) {
            return Err(Error::InvalidName);
        }
        Ok(Self { name, year, cost })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Narrow equality: same name and same year, cost ignored.
    pub fn same_entry(&self, other: &Artwork) -> bool {
        self.name == other.name && self.year == other.year
    }

    /// Render as `[(Name: <name>) (Year: <year>) (Cost: $<cost>)]`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl Ord for Artwork {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Artwork {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Artwork {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Artwork {}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[(Name: {}) (Year: {}) (Cost: ${})]",
            self.name,
            self.year,
            format_cost(self.cost)
        )
    }
}

/// Plain decimal notation, always with a fractional part: `300.0`, not `300`.
fn format_cost(cost: f64) -> String {
    let mut text = cost.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Whitespace that makes a name blank.
///
/// Unicode whitespace minus the non-breaking spaces and NEL, plus the
/// ASCII information separators U+001C..=U+001F.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}
