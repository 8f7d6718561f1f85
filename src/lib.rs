//! # Positional Editing via a Rank-Augmented Height-Balanced Tree
//!
//! This library implements the balanced-tree backing store a text editor
//! uses instead of a flat array, so that edits near the middle of a large
//! document do not shift every subsequent character.
//!
//! ## Core structure
//!
//! 1. **Rank augmentation**: every node stores the size of its left
//!    subtree, so position `i` is found by a three-way comparison per level
//! 2. **Balance codes**: every node stores which subtree is taller
//!    (`/`, `=`, `\`), maintained under the AVL rule
//! 3. **Local rotations**: a structural change repairs both invariants by
//!    reassigning ownership among at most four nodes, allocating nothing
//! 4. **Midpoint bulk build**: a flat string becomes a balanced tree in
//!    O(N), not by N repeated insertions
//!
//! Result: insert, delete, and lookup by position in O(log n); whole-string
//! conversion in O(N); range extraction in O(length + log n).
//!
//! ## Usage Example
//!
//! ```
//! use edtree::EditTree;
//!
//! let mut doc = EditTree::from("hello world");
//! doc.insert(',', 5)?;
//! assert_eq!(doc.to_string(), "hello, world");
//!
//! let removed = doc.delete(0)?;
//! assert_eq!(removed, 'h');
//! assert_eq!(doc.substring(0, 5)?, "ello,");
//! assert_eq!(doc.len(), 11);
//! # Ok::<(), edtree::EditTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree;

// Re-export for convenience
pub use tree::EditTree;

use thiserror::Error;

/// Errors reported by [`EditTree`] operations.
///
/// There is exactly one failure mode: a position or length argument outside
/// the bounds documented on the operation. Bounds are checked before any
/// descent, so a rejected call leaves the tree completely unmodified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTreeError {
    /// A position or length argument fell outside the valid range.
    #[error("index {index} out of range for sequence of size {size}")]
    IndexOutOfRange {
        /// The offending index; for range requests, the end of the range.
        index: usize,
        /// Size of the sequence at the time of the call.
        size: usize,
    },
}
