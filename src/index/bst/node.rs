//! Tree node and the subtree-rebuild helpers used by removal.

use tracing::debug;

use crate::common::Artwork;

/// An owned, possibly empty, child subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single catalog node.
///
/// Each child has exactly one owner, its parent. There are no parent
/// pointers: mutations hand a subtree over by value and get back its new
/// root.
pub(crate) struct Node {
    pub(crate) artwork: Artwork,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Create a new leaf.
    pub(crate) fn leaf(artwork: Artwork) -> Box<Self> {
        Box::new(Self {
            artwork,
            left: None,
            right: None,
        })
    }

    /// Remove this node from its subtree. Returns its artwork and the
    /// subtree's new root.
    ///
    /// - No children: the subtree becomes empty.
    /// - One child: that child takes this node's place unchanged.
    /// - Two children: the in-order successor is detached from the right
    ///   subtree and its artwork moves into a fresh node that adopts this
    ///   node's left child and the shrunken right subtree.
    pub(crate) fn unlink(self: Box<Self>) -> (Artwork, Link) {
        let Node {
            artwork,
            left,
            mut right,
        } = *self;

        let Some(left) = left else {
            return (artwork, right);
        };
        // Fails only when there is no right subtree.
        let Some(successor) = take_leftmost(&mut right) else {
            return (artwork, Some(left));
        };

        debug!(removed = %artwork, successor = %successor, "splicing in-order successor");
        let root = Box::new(Node {
            artwork: successor,
            left: Some(left),
            right,
        });
        (artwork, Some(root))
    }
}

/// Detach the leftmost node of `link` and return its artwork.
///
/// The detached node's right subtree takes its place. Returns `None` if
/// `link` is empty.
pub(crate) fn take_leftmost(link: &mut Link) -> Option<Artwork> {
    let mut slot = link;
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        slot = match slot {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let node = slot.take()?;
    let Node { artwork, right, .. } = *node;
    *slot = right;
    Some(artwork)
}

/// Free a subtree without recursing.
///
/// Dropping a `Box<Node>` normally drops its children recursively, which
/// overflows the stack on a long degenerate chain.
pub(crate) fn drop_subtree(link: Link) {
    let mut pending: Vec<Box<Node>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, year: i32, left: Link, right: Link) -> Link {
        Some(Box::new(Node {
            artwork: Artwork::new(name, year, 100.0).unwrap(),
            left,
            right,
        }))
    }

    fn leaf(name: &str, year: i32) -> Link {
        node(name, year, None, None)
    }

    fn names(link: &Link, out: &mut Vec<String>) {
        if let Some(n) = link {
            names(&n.left, out);
            out.push(n.artwork.name().to_string());
            names(&n.right, out);
        }
    }

    #[test]
    fn test_unlink_leaf() {
        let root = leaf("b", 2002).unwrap();
        let (removed, rest) = root.unlink();
        assert_eq!(removed.name(), "b");
        assert!(rest.is_none());
    }

    #[test]
    fn test_unlink_single_child_promotes_child() {
        let root = node("b", 2002, leaf("a", 2001), None).unwrap();
        let new_root = root.unlink().1.unwrap();
        assert_eq!(new_root.artwork.name(), "a");

        let root = node("b", 2002, None, leaf("c", 2003)).unwrap();
        let new_root = root.unlink().1.unwrap();
        assert_eq!(new_root.artwork.name(), "c");
    }

    #[test]
    fn test_unlink_two_children_uses_successor() {
        //       b
        //      / \
        //     a   e
        //        /
        //       c
        //        \
        //         d
        let right = node("e", 2005, node("c", 2003, None, leaf("d", 2004)), None);
        let root = node("b", 2002, leaf("a", 2001), right).unwrap();

        let (removed, new_root) = root.unlink();
        assert_eq!(removed.name(), "b");
        assert_eq!(new_root.as_ref().unwrap().artwork.name(), "c");

        let mut out = vec![];
        names(&new_root, &mut out);
        assert_eq!(out, ["a", "c", "d", "e"]);
    }

    #[test]
    fn test_unlink_two_children_successor_is_right_child() {
        let root = node("b", 2002, leaf("a", 2001), leaf("c", 2003)).unwrap();
        let new_root = root.unlink().1.unwrap();

        assert_eq!(new_root.artwork.name(), "c");
        assert!(new_root.right.is_none());
        assert_eq!(new_root.left.as_ref().unwrap().artwork.name(), "a");
    }

    #[test]
    fn test_take_leftmost_empty() {
        let mut link: Link = None;
        assert!(take_leftmost(&mut link).is_none());
    }

    #[test]
    fn test_drop_subtree_long_chain() {
        let mut link: Link = None;
        for i in 0..200_000 {
            link = node("x", 1000 + i, link, None);
        }
        drop_subtree(link);
    }
}
