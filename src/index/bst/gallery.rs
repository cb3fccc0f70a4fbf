//! The artwork catalog: an unbalanced binary search tree.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument};

use super::iter::Iter;
use super::node::{drop_subtree, Link, Node};
use crate::common::config::COST_TOLERANCE;
use crate::common::{Artwork, Error, Result};

/// Which way a search goes from the current node.
enum Step {
    Found,
    Left,
    Right,
}

impl Step {
    /// Route towards `query` from `current`.
    ///
    /// Matching uses the narrow `same_entry` relation while routing uses the
    /// full composite ordering.
    fn towards(current: &Artwork, query: &Artwork) -> Self {
        if current.same_entry(query) {
            Step::Found
        } else if current < query {
            Step::Right
        } else {
            Step::Left
        }
    }
}

/// An ordered, in-memory catalog of artworks.
///
/// # Architecture
/// ```text
///                 ┌──────────────────────────────┐
///                 │ ArtGallery { root, size }    │
///                 └──────────────┬───────────────┘
///                                ▼
///                    Node (year, cost, name)
///                    /                     \
///        strictly smaller              strictly greater
///       under composite order        under composite order
/// ```
///
/// No balancing is performed: the height is whatever the insertion order
/// produces. Every operation walks the tree with a loop or an explicit
/// stack so a degenerate chain cannot overflow the call stack.
///
/// # Thread Safety
/// No internal locking. Mutation needs `&mut self`.
///
/// # Usage
/// ```
/// use artgallery::{ArtGallery, Artwork};
///
/// let mut gallery = ArtGallery::new();
/// assert!(gallery.insert(Artwork::new("Sky", 2003, 550.0)?));
/// assert!(gallery.insert(Artwork::new("Stars", 1988, 300.0)?));
///
/// assert!(gallery.lookup("Sky", 2003, 1.0)?); // cost is ignored
/// assert_eq!(gallery.get_best().map(|a| a.name()), Some("Sky"));
///
/// gallery.remove("Stars", 1988, 300.0)?;
/// assert_eq!(gallery.size(), 1);
/// # Ok::<(), artgallery::Error>(())
/// ```
pub struct ArtGallery {
    root: Link,

    /// Always equals the number of nodes reachable from `root`.
    size: usize,
}

impl ArtGallery {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add an artwork.
    ///
    /// Returns `false` and leaves the catalog untouched if an artwork with
    /// the same name, year and cost is already present.
    #[instrument(level = "trace", skip(self, artwork), fields(artwork = %artwork))]
    pub fn insert(&mut self, artwork: Artwork) -> bool {
        let mut slot = &mut self.root;
        loop {
            let go_right = match slot.as_deref() {
                None => break,
                Some(node) => match node.artwork.cmp(&artwork) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => {
                        debug!("duplicate artwork rejected");
                        return false;
                    }
                },
            };
            slot = match slot {
                Some(node) => {
                    if go_right {
                        &mut node.right
                    } else {
                        &mut node.left
                    }
                }
                None => break,
            };
        }

        *slot = Some(Node::leaf(artwork));
        self.size += 1;
        true
    }

    /// Add an artwork that may be absent.
    ///
    /// # Errors
    /// - `Error::MissingArtwork` if `artwork` is `None`; nothing changes
    pub fn try_insert(&mut self, artwork: Option<Artwork>) -> Result<bool> {
        let artwork = artwork.ok_or(Error::MissingArtwork)?;
        Ok(self.insert(artwork))
    }

    /// Remove the first artwork on the search path that shares the query's
    /// name and year, and return it.
    ///
    /// The descent is routed by the full composite key (cost included), but a
    /// node matches on name and year alone. If the node has two children its
    /// in-order successor takes its place.
    ///
    /// # Errors
    /// - Construction errors of [`Artwork::new`] for an invalid query
    /// - `Error::NotFound` if nothing on the search path matches; the
    ///   catalog is left untouched
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, name: &str, year: i32, cost: f64) -> Result<Artwork> {
        let query = Artwork::new(name, year, cost)?;

        // Locate the owning slot first so a miss never touches the tree.
        let mut slot = &mut self.root;
        loop {
            let go_right = match slot.as_deref() {
                None => break,
                Some(node) => match Step::towards(&node.artwork, &query) {
                    Step::Found => break,
                    Step::Right => true,
                    Step::Left => false,
                },
            };
            slot = match slot {
                Some(node) => {
                    if go_right {
                        &mut node.right
                    } else {
                        &mut node.left
                    }
                }
                None => break,
            };
        }

        let Some(target) = slot.take() else {
            debug!("no matching artwork on search path");
            return Err(Error::NotFound {
                name: name.to_string(),
                year,
            });
        };
        let (removed, rest) = target.unlink();
        *slot = rest;
        self.size -= 1;

        debug!(removed = %removed, size = self.size, "artwork removed");
        Ok(removed)
    }

    /// Remove every artwork.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
        self.size = 0;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check whether an artwork with this name and year is stored.
    ///
    /// The cost only steers the descent; a node matches on name and year.
    ///
    /// # Errors
    /// - Construction errors of [`Artwork::new`] for an invalid query
    pub fn lookup(&self, name: &str, year: i32, cost: f64) -> Result<bool> {
        let query = Artwork::new(name, year, cost)?;

        let mut link = &self.root;
        while let Some(node) = link {
            link = match Step::towards(&node.artwork, &query) {
                Step::Found => return Ok(true),
                Step::Right => &node.right,
                Step::Left => &node.left,
            };
        }
        Ok(false)
    }

    /// Collect artworks created in `year` that cost at most `max_cost`.
    ///
    /// # Pruning
    /// From each node the search continues right only while the node's year
    /// is older than `year`, and left otherwise. A node whose year equals
    /// `year` therefore never has its right subtree visited, so matches
    /// stored there are not reported. Results follow the visiting order.
    pub fn lookup_all(&self, year: i32, max_cost: f64) -> Vec<&Artwork> {
        let mut found = Vec::new();

        let mut link = &self.root;
        while let Some(node) = link {
            let artwork = &node.artwork;
            if artwork.year() == year && max_cost - artwork.cost() >= -COST_TOLERANCE {
                found.push(artwork);
            }
            link = if artwork.year() < year {
                &node.right
            } else {
                &node.left
            };
        }
        found
    }

    /// The greatest artwork under the composite order: latest year, then
    /// highest cost, then last name. `None` if the catalog is empty.
    pub fn get_best(&self) -> Option<&Artwork> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.artwork)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|n| (n, 1)));
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        max
    }

    /// In-order iterator over the stored artworks.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.size)
    }

    /// Render every artwork in order, one per line, each line terminated by
    /// `\n`. An empty catalog renders as `""`.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for artwork in self.iter() {
            out.push_str(&artwork.format());
            out.push('\n');
        }
        out
    }
}

impl Default for ArtGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ArtGallery {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl fmt::Display for ArtGallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl fmt::Debug for ArtGallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ArtGallery {
    type Item = &'a Artwork;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Artwork> for ArtGallery {
    /// Duplicates are skipped, as with [`ArtGallery::insert`].
    fn extend<I: IntoIterator<Item = Artwork>>(&mut self, iter: I) {
        for artwork in iter {
            self.insert(artwork);
        }
    }
}

impl FromIterator<Artwork> for ArtGallery {
    fn from_iter<I: IntoIterator<Item = Artwork>>(iter: I) -> Self {
        let mut gallery = Self::new();
        gallery.extend(iter);
        gallery
    }
}
