/// Handle to a node stored in a [`Tree`](crate::Tree).
///
/// Handles are indices into the tree's node arena. Nodes are never removed, so a
/// handle issued by a tree stays valid for the lifetime of that tree. A handle
/// carries no ownership: parent links use the same type and never keep a node
/// alive. It carries no tree identity either, so handles must be used with the
/// tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index backing this handle
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single element of the binary search tree.
///
/// Each node stores its value, links to at most two children and a non-owning
/// link to its structural parent. The `x`/`y` coordinates belong to layout and
/// rendering code; rotations and the DSW phases never read or write them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    /// The stored key, never mutated after insertion
    value: T,

    /// Structural parent (`None` for the root)
    pub(crate) parent: Option<NodeId>,

    /// Left child, holding strictly smaller keys
    pub(crate) left: Option<NodeId>,

    /// Right child, holding strictly greater keys
    pub(crate) right: Option<NodeId>,

    /// Horizontal layout coordinate
    pub(crate) x: f64,

    /// Vertical layout coordinate
    pub(crate) y: f64,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Returns the key stored in this node
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the structural parent, or `None` for the root
    #[inline]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the left child, if any
    #[inline]
    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Returns the right child, if any
    #[inline]
    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns `true` if the node has no children
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the horizontal layout coordinate
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the vertical layout coordinate
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }
}
