//! Read-only whole-tree traversals: stringification, range extraction,
//! pre-order dumps, and the invariant checks used by tests and tooling.
//!
//! Nothing here mutates the tree, and nothing here is on the hot editing
//! path except `write_range`, which powers `substring`.

use super::node::{Balance, Link, Node};

impl Link {
    /// Appends the in-order character sequence of this subtree to `out`.
    pub(crate) fn write_inorder(&self, out: &mut String) {
        if let Link::Node(node) = self {
            node.left.write_inorder(out);
            out.push(node.value);
            node.right.write_inorder(out);
        }
    }

    /// Appends `len` characters starting at in-subtree position `start`,
    /// visiting only nodes that overlap the requested range. A zero-length
    /// request returns without descending.
    pub(crate) fn write_range(&self, start: usize, len: usize, out: &mut String) {
        if len == 0 {
            return;
        }
        let Link::Node(node) = self else {
            return;
        };
        if start <= node.rank {
            if start + len <= node.rank {
                node.left.write_range(start, len, out);
            } else {
                let from_left = node.rank - start;
                node.left.write_range(start, from_left, out);
                out.push(node.value);
                node.right.write_range(0, len - from_left - 1, out);
            }
        } else {
            node.right.write_range(start - node.rank - 1, len, out);
        }
    }

    /// Pre-order `value`+`rank` entries, e.g. `b1`.
    pub(crate) fn collect_rank_entries(&self, out: &mut Vec<String>) {
        if let Link::Node(node) = self {
            out.push(format!("{}{}", node.value, node.rank));
            node.left.collect_rank_entries(out);
            node.right.collect_rank_entries(out);
        }
    }

    /// Pre-order `value`+`rank`+balance-glyph entries, e.g. `b1/`.
    pub(crate) fn collect_debug_entries(&self, out: &mut Vec<String>) {
        if let Link::Node(node) = self {
            out.push(format!("{}{}{}", node.value, node.rank, node.balance.glyph()));
            node.left.collect_debug_entries(out);
            node.right.collect_debug_entries(out);
        }
    }

    /// Height in O(height), descending toward the taller side by balance
    /// code alone. Only meaningful while balance codes are correct.
    pub(crate) fn fast_height(&self) -> i32 {
        match self {
            Link::Empty => -1,
            Link::Node(node) => match node.balance {
                Balance::Left => 1 + node.left.fast_height(),
                _ => 1 + node.right.fast_height(),
            },
        }
    }

    /// Brute-force height, trusting neither rank nor balance. O(n).
    pub(crate) fn slow_height(&self) -> i32 {
        match self {
            Link::Empty => -1,
            Link::Node(node) => 1 + node.left.slow_height().max(node.right.slow_height()),
        }
    }

    /// Brute-force node count. O(n).
    pub(crate) fn slow_size(&self) -> usize {
        match self {
            Link::Empty => 0,
            Link::Node(node) => node.left.slow_size() + node.right.slow_size() + 1,
        }
    }

    /// Bottom-up height check: `Some(height)` iff every balance code in
    /// this subtree matches the true heights of its children.
    pub(crate) fn verified_height(&self) -> Option<i32> {
        match self {
            Link::Empty => Some(-1),
            Link::Node(node) => {
                let left = node.left.verified_height()?;
                let right = node.right.verified_height()?;
                let correct = match node.balance {
                    Balance::Left => left == right + 1,
                    Balance::Right => right == left + 1,
                    Balance::Same => left == right,
                };
                correct.then(|| left.max(right) + 1)
            }
        }
    }
}

impl Node {
    /// Verifies this node's rank and every rank in its left subtree
    /// against true subtree sizes, without trusting any stored rank.
    ///
    /// The left subtree's size is accumulated along its right spine, each
    /// spine node contributing itself plus its own (recursively verified)
    /// rank: one pass, O(1) storage beyond the recursion. Returns the
    /// rank when everything below checks out.
    pub(crate) fn verified_rank(&self) -> Option<usize> {
        let mut counted = 0;
        let mut spine = &self.left;
        while let Link::Node(node) = spine {
            counted += 1 + node.verified_rank()?;
            spine = &node.right;
        }
        (counted == self.rank).then_some(self.rank)
    }
}
