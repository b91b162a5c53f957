use ahash::RandomState;
use hashbrown::HashSet;

use crate::{NodeId, Tree, TreeError};

/// Pending node of the validation walk, with the open key interval it must fall in
struct Frame<'a, T> {
    id: NodeId,
    parent: Option<NodeId>,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
}

impl<T: Ord> Tree<T> {
    /// Checks every structural invariant of the tree.
    ///
    /// Verifies that each stored node is reachable from the root exactly once,
    /// that every parent link points at the node whose child slot holds it
    /// (and the root has none), and that keys are in strict BST order. The walk
    /// is iterative, so vines of any length are fine.
    ///
    /// # Returns
    ///
    /// * `Result<(), TreeError>` - The first defect found, if any
    pub fn validate(&self) -> Result<(), TreeError> {
        let Some(root) = self.root() else {
            return if self.is_empty() {
                Ok(())
            } else {
                Err(TreeError::Unreachable {
                    reachable: 0,
                    stored: self.len(),
                })
            };
        };

        let mut visited = HashSet::with_capacity_and_hasher(self.len(), RandomState::new());
        let mut stack = alloc::vec![Frame {
            id: root,
            parent: None,
            lower: None,
            upper: None,
        }];

        while let Some(frame) = stack.pop() {
            let node = self
                .get(frame.id)
                .ok_or(TreeError::DanglingLink { node: frame.id })?;

            if !visited.insert(frame.id) {
                return Err(TreeError::Revisited { node: frame.id });
            }

            match (frame.parent, node.parent()) {
                (None, Some(parent)) => {
                    return Err(TreeError::RootHasParent {
                        root: frame.id,
                        parent,
                    });
                }
                (Some(actual), recorded) if recorded != Some(actual) => {
                    return Err(TreeError::ParentMismatch {
                        node: frame.id,
                        recorded,
                        actual,
                    });
                }
                _ => {}
            }

            let value = node.value();
            if frame.lower.is_some_and(|lower| value <= lower)
                || frame.upper.is_some_and(|upper| value >= upper)
            {
                return Err(TreeError::OrderViolation { node: frame.id });
            }

            if let Some(left) = node.left() {
                stack.push(Frame {
                    id: left,
                    parent: Some(frame.id),
                    lower: frame.lower,
                    upper: Some(value),
                });
            }
            if let Some(right) = node.right() {
                stack.push(Frame {
                    id: right,
                    parent: Some(frame.id),
                    lower: Some(value),
                    upper: frame.upper,
                });
            }
        }

        if visited.len() == self.len() {
            Ok(())
        } else {
            Err(TreeError::Unreachable {
                reachable: visited.len(),
                stored: self.len(),
            })
        }
    }
}
