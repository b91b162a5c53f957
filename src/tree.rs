use alloc::vec::Vec;
use core::{cmp::Ordering, ops::Index};

use tracing::trace;

use crate::{Node, NodeId};

/// A binary search tree with parent links, rebalanced on demand by the
/// Day-Stout-Warren algorithm.
///
/// Nodes live in an arena owned by the tree and refer to each other through
/// [`NodeId`] handles, so ownership is strictly top-down and the parent link is
/// a plain index. Insertion never rebalances: the shape follows insertion order
/// until [`make_vine`](Tree::make_vine) and [`balance_dsw`](Tree::balance_dsw)
/// are run.
///
/// Key features:
/// - Unique keys, duplicates are silently rejected
/// - In-place left/right rotations maintaining parent links
/// - Linear time, constant extra space rebalancing into a complete tree
/// - No node removal, so handles never dangle
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    /// Node arena, indexed by `NodeId`
    nodes: Vec<Node<T>>,

    /// Handle of the root node, `None` when the tree is empty
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes before the arena
    /// reallocates.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of nodes to preallocate
    ///
    /// # Returns
    ///
    /// * `Self` - The empty tree
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes the arena can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the handle of the root node
    #[inline]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the root node
    #[inline]
    pub fn root_node(&self) -> Option<&Node<T>> {
        self.root.map(|id| self.node_at(id))
    }

    /// Returns the node behind `id`, or `None` if the handle is out of range.
    ///
    /// Handles carry no tree identity: a handle from another tree whose index
    /// is in range resolves to this tree's node at that index.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub(crate) fn node_at(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_at_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    /// Stores layout coordinates on a node.
    ///
    /// # Arguments
    ///
    /// * `id` - The node to update
    /// * `x` - The horizontal coordinate
    /// * `y` - The vertical coordinate
    ///
    /// # Returns
    ///
    /// * `bool` - `false` if the handle is out of range
    pub fn set_position(&mut self, id: NodeId, x: f64, y: f64) -> bool {
        match self.nodes.get_mut(id.index()) {
            Some(node) => {
                node.x = x;
                node.y = y;
                true
            }
            None => false,
        }
    }

    /// Rotates the subtree at `x` to the left, promoting its right child into
    /// its position.
    ///
    /// Every affected parent and child link is updated, including the root
    /// when `x` is the root. If `x` has no right child, or the handle is out of
    /// range, the tree is left untouched. An in-range handle issued by another
    /// tree is not detected and rotates this tree's node at that index.
    ///
    /// # Arguments
    ///
    /// * `x` - The node to rotate around
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if a rotation took place
    pub fn rotate_left(&mut self, x: NodeId) -> bool {
        let Some(y) = self.get(x).and_then(Node::right) else {
            return false;
        };

        let y_left = self.node_at(y).left;
        self.node_at_mut(x).right = y_left;
        if let Some(y_left) = y_left {
            self.node_at_mut(y_left).parent = Some(x);
        }

        let x_parent = self.node_at(x).parent;
        self.node_at_mut(y).parent = x_parent;
        self.replace_child(x_parent, x, y);

        self.node_at_mut(y).left = Some(x);
        self.node_at_mut(x).parent = Some(y);

        trace!(pivot = x.index(), promoted = y.index(), "rotate left");
        true
    }

    /// Rotates the subtree at `y` to the right, promoting its left child into
    /// its position.
    ///
    /// Mirror image of [`rotate_left`](Tree::rotate_left); a node without a
    /// left child, or an out-of-range handle, is left untouched.
    ///
    /// # Arguments
    ///
    /// * `y` - The node to rotate around
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if a rotation took place
    pub fn rotate_right(&mut self, y: NodeId) -> bool {
        let Some(x) = self.get(y).and_then(Node::left) else {
            return false;
        };

        let x_right = self.node_at(x).right;
        self.node_at_mut(y).left = x_right;
        if let Some(x_right) = x_right {
            self.node_at_mut(x_right).parent = Some(y);
        }

        let y_parent = self.node_at(y).parent;
        self.node_at_mut(x).parent = y_parent;
        self.replace_child(y_parent, y, x);

        self.node_at_mut(x).right = Some(y);
        self.node_at_mut(y).parent = Some(x);

        trace!(pivot = y.index(), promoted = x.index(), "rotate right");
        true
    }

    /// Points the slot of `parent` that held `old` at `new`, or makes `new` the
    /// root when there is no parent.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let parent = self.node_at_mut(parent);
                if parent.left == Some(old) {
                    parent.left = Some(new);
                } else {
                    parent.right = Some(new);
                }
            }
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path, `0` for an
    /// empty tree
    pub fn height(&self) -> usize {
        self.level_widths().len()
    }

    /// Returns the number of nodes on each level, starting at the root.
    ///
    /// Two trees with equal level widths have the same height and the same
    /// per-level fill.
    pub fn level_widths(&self) -> Vec<usize> {
        let mut widths = Vec::new();
        let mut level: Vec<NodeId> = self.root.into_iter().collect();

        while !level.is_empty() {
            widths.push(level.len());
            level = level
                .iter()
                .flat_map(|&id| {
                    let node = self.node_at(id);
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        widths
    }

    /// Returns `true` if no node has a left child, i.e. the tree is a
    /// right-leaning chain
    pub fn is_vine(&self) -> bool {
        self.nodes.iter().all(|node| node.left.is_none())
    }

    /// Returns the handle of the leftmost node in the subtree rooted at `id`
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node_at(id).left {
            id = left;
        }
        id
    }

    /// Returns the handle of the rightmost node in the subtree rooted at `id`
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node_at(id).right {
            id = right;
        }
        id
    }

    /// Returns the smallest key in the tree
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| self.node_at(self.leftmost(root)).value())
    }

    /// Returns the greatest key in the tree
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| self.node_at(self.rightmost(root)).value())
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts a key, descending from the root in BST order.
    ///
    /// The new node is attached at the first empty child slot with its parent
    /// link set; an empty tree gets a new root. The tree is not rebalanced.
    ///
    /// # Arguments
    ///
    /// * `value` - The key to insert
    ///
    /// # Returns
    ///
    /// * `Option<NodeId>` - The handle of the new node, or `None` if the key was
    ///   already present
    pub fn insert(&mut self, value: T) -> Option<NodeId> {
        let mut parent = None;
        let mut goes_left = false;
        let mut current = self.root;

        while let Some(idx) = current {
            let node = self.node_at(idx);
            match value.cmp(node.value()) {
                Ordering::Equal => return None,
                Ordering::Less => {
                    goes_left = true;
                    current = node.left;
                }
                Ordering::Greater => {
                    goes_left = false;
                    current = node.right;
                }
            }
            parent = Some(idx);
        }

        let new_idx = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(value, parent));

        match parent {
            None => self.root = Some(new_idx),
            Some(parent) if goes_left => self.node_at_mut(parent).left = Some(new_idx),
            Some(parent) => self.node_at_mut(parent).right = Some(new_idx),
        }

        Some(new_idx)
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range. Use [`Tree::get`] for checked access.
    fn index(&self, id: NodeId) -> &Node<T> {
        self.node_at(id)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}
