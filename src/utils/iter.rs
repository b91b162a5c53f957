use core::iter::FusedIterator;

use crate::{NodeId, Tree};

/// In-order iterator over the keys of a [`Tree`].
///
/// Walks successors through the parent links, so it needs no stack and
/// constant extra space regardless of the tree's shape.
#[derive(Debug)]
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<T> Tree<T> {
    /// Returns an iterator over the keys in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.root().map(|root| self.leftmost(root)),
            remaining: self.len(),
        }
    }

    /// In-order successor of `id`: the leftmost node of its right subtree, or
    /// the first ancestor reached from a left child.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node_at(id).right() {
            return Some(self.leftmost(right));
        }

        let mut child = id;
        let mut parent = self.node_at(id).parent();
        while let Some(p) = parent {
            if self.node_at(p).left() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node_at(p).parent();
        }
        None
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let current = self.next?;
        self.next = self.tree.successor(current);
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.tree.node_at(current).value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_empty() {
        let tree = Tree::<i32>::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iter_sorted() {
        let tree: Tree<i32> = [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43].into_iter().collect();
        let values: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(values, vec![6, 12, 18, 25, 31, 37, 43, 50, 62, 75, 87]);
    }

    #[test]
    fn test_iter_after_rotations() {
        let mut tree: Tree<i32> = (1..=9).rev().collect();
        let root = tree.root().unwrap();
        tree.rotate_right(root);
        let root = tree.root().unwrap();
        let right = tree[root].right().unwrap();
        tree.rotate_right(right);

        let values: Vec<i32> = (&tree).into_iter().copied().collect();
        assert_eq!(values, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_clone_without_clone_keys() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Key(u8);

        let tree: Tree<Key> = [Key(2), Key(1), Key(3)].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&Key(1)));

        let rest: Vec<&Key> = iter.clone().collect();
        assert_eq!(rest, [&Key(2), &Key(3)]);
        assert_eq!(iter.next(), Some(&Key(2)));
    }

    #[test]
    fn test_iter_is_fused() {
        let tree: Tree<i32> = [2, 1].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
