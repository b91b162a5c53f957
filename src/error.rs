use crate::NodeId;

/// Structural defects reported by [`Tree::validate`](crate::Tree::validate).
///
/// None of the tree operations can produce these on their own; they exist to
/// check the invariants in tests and debug builds, and to let callers that
/// drive [`rotate_left`](crate::Tree::rotate_left) and
/// [`rotate_right`](crate::Tree::rotate_right) by hand verify the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The root node links to a parent
    #[error("root {root:?} links to parent {parent:?}")]
    RootHasParent {
        /// The root node
        root: NodeId,
        /// The parent it links to
        parent: NodeId,
    },

    /// A node's parent link disagrees with the node it hangs below
    #[error("node {node:?} links to parent {recorded:?} but hangs below {actual:?}")]
    ParentMismatch {
        /// The node with the wrong parent link
        node: NodeId,
        /// The parent recorded on the node
        recorded: Option<NodeId>,
        /// The node whose child slot holds it
        actual: NodeId,
    },

    /// A key is not strictly between the keys of its ancestors
    #[error("node {node:?} breaks binary search tree order")]
    OrderViolation {
        /// The misplaced node
        node: NodeId,
    },

    /// A node is linked from more than one child slot
    #[error("node {node:?} is reachable more than once")]
    Revisited {
        /// The node reached twice
        node: NodeId,
    },

    /// A link points outside the node arena
    #[error("link to {node:?} points outside the tree")]
    DanglingLink {
        /// The out-of-range handle
        node: NodeId,
    },

    /// Some stored nodes cannot be reached from the root
    #[error("{reachable} of {stored} nodes are reachable from the root")]
    Unreachable {
        /// Nodes reached from the root
        reachable: usize,
        /// Nodes held by the tree
        stored: usize,
    },
}
