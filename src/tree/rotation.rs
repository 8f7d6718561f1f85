//! The four rotation variants.
//!
//! Each runs in O(1) on a 2–4 node neighborhood, consuming the old subtree
//! root and returning the new owning root. Rotations reassign ownership
//! among existing nodes, never allocating or freeing, and update `rank`
//! and `balance` only on the nodes they touch.

use super::node::{Balance, Link, Node};

/// Promotes the right child over a right-heavy root. The child's old left
/// subtree becomes the root's new right subtree; both touched nodes come
/// out balanced.
pub(super) fn single_left(mut root: Box<Node>) -> Box<Node> {
    let mut pivot = root.right.take().into_node();
    root.right = pivot.left.take();
    root.balance = Balance::Same;
    pivot.rank += root.rank + 1;
    pivot.balance = Balance::Same;
    pivot.left = Link::Node(root);
    pivot
}

/// Mirror of [`single_left`]: promotes the left child over a left-heavy
/// root.
pub(super) fn single_right(mut root: Box<Node>) -> Box<Node> {
    let mut pivot = root.left.take().into_node();
    root.left = pivot.right.take();
    root.balance = Balance::Same;
    root.rank -= pivot.rank + 1;
    pivot.balance = Balance::Same;
    pivot.right = Link::Node(root);
    pivot
}

/// Right-left rotation: promotes the right child's left child. The pivot's
/// two subtrees are split between the old root (new left) and the old
/// right child (new right); the displaced nodes' balance codes derive from
/// the pivot's pre-rotation balance.
pub(super) fn double_left(mut root: Box<Node>) -> Box<Node> {
    let mut child = root.right.take().into_node();
    let mut pivot = child.left.take().into_node();
    root.right = pivot.left.take();
    child.left = pivot.right.take();
    child.rank -= pivot.rank + 1;
    pivot.rank += root.rank + 1;
    let (left_code, right_code) = displaced_codes(pivot.balance);
    root.balance = left_code;
    child.balance = right_code;
    pivot.balance = Balance::Same;
    pivot.left = Link::Node(root);
    pivot.right = Link::Node(child);
    pivot
}

/// Left-right rotation, the mirror of [`double_left`].
pub(super) fn double_right(mut root: Box<Node>) -> Box<Node> {
    let mut child = root.left.take().into_node();
    let mut pivot = child.right.take().into_node();
    child.right = pivot.left.take();
    root.left = pivot.right.take();
    root.rank -= pivot.rank + child.rank + 2;
    pivot.rank += child.rank + 1;
    let (left_code, right_code) = displaced_codes(pivot.balance);
    child.balance = left_code;
    root.balance = right_code;
    pivot.balance = Balance::Same;
    pivot.left = Link::Node(child);
    pivot.right = Link::Node(root);
    pivot
}

/// Balance codes for the two displaced nodes of a double rotation, given
/// the pivot's pre-rotation balance. The subtree the pivot was heavy on
/// stays with one side, leaving the other side one level short.
fn displaced_codes(pivot: Balance) -> (Balance, Balance) {
    match pivot {
        Balance::Right => (Balance::Left, Balance::Same),
        Balance::Left => (Balance::Same, Balance::Right),
        Balance::Same => (Balance::Same, Balance::Same),
    }
}
