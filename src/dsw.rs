use tracing::{debug, warn};

use crate::{NodeId, Observer, Tree};

/// Message passed to the observer after each right rotation of the vine phase
pub const VINE_ROTATION: &str = "Vine: Rotating Right...";

/// Message passed to the observer after each left rotation of a compression pass
pub const COMPRESS_ROTATION: &str = "Balancing: Rotating Left...";

/// Scan position used by the DSW phases.
///
/// `Anchor` stands above the root and its right link is the root, so a rotation
/// at the root is handled like any other rotation below the scan position. An
/// anchor lives only for the duration of one phase.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    Anchor,
    Node(NodeId),
}

#[inline]
fn notify(observer: &mut Option<&mut dyn Observer>, message: &str) {
    if let Some(observer) = observer.as_deref_mut() {
        observer.notify(message);
    }
}

/// Size of the largest complete binary tree with at most `n` nodes,
/// `2^floor(log2(n + 1)) - 1`
#[inline]
const fn complete_size(n: usize) -> usize {
    (1 << (n + 1).ilog2()) - 1
}

impl<T: Ord> Tree<T> {
    #[inline]
    fn right_of(&self, cursor: Cursor) -> Option<NodeId> {
        match cursor {
            Cursor::Anchor => self.root(),
            Cursor::Node(id) => self.node_at(id).right(),
        }
    }

    /// Turns the tree into a vine: a right-leaning chain holding the keys in
    /// ascending order.
    ///
    /// First phase of the Day-Stout-Warren algorithm. Every node with a left
    /// child at the scan position is rotated right until the scan position has
    /// no left child, then the scan advances down the right links. Each rotation
    /// removes one left edge for good, so the phase performs at most `n - 1`
    /// rotations. Node count and key set are preserved.
    ///
    /// # Arguments
    ///
    /// * `observer` - Notified with [`VINE_ROTATION`] after every rotation
    ///
    /// # Returns
    ///
    /// * `usize` - The number of rotations performed
    ///
    /// # Examples
    ///
    /// ```
    /// # use dsw_tree::Tree;
    /// let mut tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    /// tree.make_vine(None);
    ///
    /// assert!(tree.is_vine());
    /// assert_eq!(tree.height(), 7);
    /// assert!(tree.iter().copied().eq(1..=7));
    /// ```
    pub fn make_vine(&mut self, mut observer: Option<&mut dyn Observer>) -> usize {
        self.vine(&mut observer)
    }

    /// Balances a vine into a complete binary tree.
    ///
    /// Second phase of the Day-Stout-Warren algorithm. With `n` nodes on the
    /// vine and `m` the size of the largest complete tree not exceeding `n`, a
    /// first compression of `n - m` rotations folds the surplus nodes into the
    /// bottom level, then passes of `m / 2`, `m / 4`, ... `1` rotations each
    /// build one more level. The result has height `ceil(log2(n + 1))`, every
    /// level full except possibly the last, which fills from the left.
    ///
    /// The tree must be a vine, as left by [`make_vine`](Tree::make_vine).
    /// Any other shape yields an unspecified (but still valid BST) result.
    ///
    /// # Arguments
    ///
    /// * `observer` - Notified with [`COMPRESS_ROTATION`] after every rotation
    ///
    /// # Returns
    ///
    /// * `usize` - The number of rotations performed
    ///
    /// # Examples
    ///
    /// ```
    /// # use dsw_tree::Tree;
    /// let mut tree: Tree<i32> = (1..=7).collect();
    /// tree.balance_dsw(None);
    ///
    /// assert_eq!(tree.root_node().map(|node| *node.value()), Some(4));
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn balance_dsw(&mut self, mut observer: Option<&mut dyn Observer>) -> usize {
        self.balance(&mut observer)
    }

    /// Runs [`make_vine`](Tree::make_vine) followed by
    /// [`balance_dsw`](Tree::balance_dsw), which is valid from any shape.
    ///
    /// # Arguments
    ///
    /// * `observer` - Notified after every rotation of both phases
    ///
    /// # Returns
    ///
    /// * `usize` - The total number of rotations performed
    pub fn rebalance(&mut self, mut observer: Option<&mut dyn Observer>) -> usize {
        self.vine(&mut observer) + self.balance(&mut observer)
    }

    fn vine(&mut self, observer: &mut Option<&mut dyn Observer>) -> usize {
        let mut rotations = 0;

        let mut tail = Cursor::Anchor;
        let mut rest = self.right_of(tail);

        while let Some(node) = rest {
            if self.node_at(node).left().is_some() {
                self.rotate_right(node);
                rotations += 1;
                notify(observer, VINE_ROTATION);
                rest = self.right_of(tail);
            } else {
                tail = Cursor::Node(node);
                rest = self.node_at(node).right();
            }
        }

        debug!(nodes = self.len(), rotations, "vine built");

        debug_assert!(self.validate().is_ok(), "tree invariants violated by make_vine");

        rotations
    }

    fn balance(&mut self, observer: &mut Option<&mut dyn Observer>) -> usize {
        let n = self.spine_len();
        if n == 0 {
            return 0;
        }
        if n != self.len() {
            warn!(
                spine = n,
                nodes = self.len(),
                "balance_dsw called on a tree that is not a vine"
            );
        }

        let mut m = complete_size(n);
        let mut rotations = self.compress(n - m, observer);
        while m > 1 {
            m /= 2;
            rotations += self.compress(m, observer);
        }

        debug!(nodes = n, rotations, height = self.height(), "tree balanced");

        debug_assert!(self.validate().is_ok(), "tree invariants violated by balance_dsw");

        rotations
    }

    /// Performs up to `count` left rotations down the right spine, promoting
    /// every second node one level up.
    ///
    /// A step whose scan position lacks a right grandchild is skipped; it ends
    /// the pass since the scan position no longer moves.
    fn compress(&mut self, count: usize, observer: &mut Option<&mut dyn Observer>) -> usize {
        let mut rotations = 0;
        let mut scan = Cursor::Anchor;

        for _ in 0..count {
            let Some(child) = self.right_of(scan) else {
                break;
            };
            let Some(promoted) = self.node_at(child).right() else {
                break;
            };

            self.rotate_left(child);
            rotations += 1;
            notify(observer, COMPRESS_ROTATION);
            scan = Cursor::Node(promoted);
        }

        rotations
    }

    /// Number of nodes on the right spine, starting at the root
    fn spine_len(&self) -> usize {
        let mut n = 0;
        let mut current = self.root();
        while let Some(id) = current {
            n += 1;
            current = self.node_at(id).right();
        }
        n
    }
}
