//! Node placement for drawing a [`Tree`].
//!
//! The layout assigns every node a position from its depth and its left/right
//! path from the root: children sit one level gap below their parent, offset
//! horizontally by a spread that shrinks by a constant factor per level. The
//! DSW phases never read the coordinates, so positions go stale after a
//! rotation until [`Tree::layout`] runs again.

use tracing::debug;

use crate::Tree;

/// Parameters of the tree layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal position of the root
    origin_x: f64,
    /// Vertical position of the root
    origin_y: f64,
    /// Horizontal offset between the root and its children
    spread: f64,
    /// Vertical distance between two levels
    level_gap: f64,
    /// Factor applied to the spread at each level below the root
    spread_decay: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Creates the default layout: root at the origin, children 400 units to
    /// either side and 90 units below, halving the spread at every level.
    pub const fn new() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            spread: 400.0,
            level_gap: 90.0,
            spread_decay: 0.5,
        }
    }

    /// Sets the position of the root
    pub const fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Sets the horizontal offset between the root and its children
    pub const fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Sets the vertical distance between two levels
    pub const fn with_level_gap(mut self, level_gap: f64) -> Self {
        self.level_gap = level_gap;
        self
    }

    /// Sets the factor applied to the spread at each level
    pub const fn with_spread_decay(mut self, spread_decay: f64) -> Self {
        self.spread_decay = spread_decay;
        self
    }

    /// Returns the position of the root
    pub const fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Returns the horizontal offset between the root and its children
    pub const fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the vertical distance between two levels
    pub const fn level_gap(&self) -> f64 {
        self.level_gap
    }

    /// Returns the factor applied to the spread at each level
    pub const fn spread_decay(&self) -> f64 {
        self.spread_decay
    }
}

impl<T> Tree<T> {
    /// Assigns `x`/`y` coordinates to every node.
    ///
    /// # Arguments
    ///
    /// * `config` - The layout parameters
    ///
    /// # Examples
    ///
    /// ```
    /// # use dsw_tree::{Tree, layout::LayoutConfig};
    /// let mut tree: Tree<i32> = [10, 5, 15].into_iter().collect();
    /// tree.layout(&LayoutConfig::default());
    ///
    /// let root = tree.root_node().unwrap();
    /// let left = &tree[root.left().unwrap()];
    /// assert_eq!((left.x(), left.y()), (-400.0, 90.0));
    /// ```
    pub fn layout(&mut self, config: &LayoutConfig) {
        let Some(root) = self.root() else {
            return;
        };

        let (x, y) = config.origin();
        let mut stack = alloc::vec![(root, x, y, config.spread)];

        while let Some((id, x, y, dx)) = stack.pop() {
            let node = self.node_at_mut(id);
            node.x = x;
            node.y = y;

            let child_y = y + config.level_gap;
            let child_dx = dx * config.spread_decay;
            if let Some(left) = node.left {
                stack.push((left, x - dx, child_y, child_dx));
            }
            if let Some(right) = node.right {
                stack.push((right, x + dx, child_y, child_dx));
            }
        }

        debug!(nodes = self.len(), "layout assigned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.origin(), (0.0, 0.0));
        assert_approx_eq!(config.spread(), 400.0);
        assert_approx_eq!(config.level_gap(), 90.0);
        assert_approx_eq!(config.spread_decay(), 0.5);
    }

    #[test]
    fn test_layout_empty_tree() {
        let mut tree = Tree::<i32>::new();
        tree.layout(&LayoutConfig::default());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_layout_default_positions() {
        let mut tree: Tree<i32> = [10, 5, 15, 3, 7].into_iter().collect();
        tree.layout(&LayoutConfig::default());

        let root = tree.root().unwrap();
        let left = tree[root].left().unwrap();
        let right = tree[root].right().unwrap();
        let left_left = tree[left].left().unwrap();
        let left_right = tree[left].right().unwrap();

        assert_approx_eq!(tree[root].x(), 0.0);
        assert_approx_eq!(tree[root].y(), 0.0);
        assert_approx_eq!(tree[left].x(), -400.0);
        assert_approx_eq!(tree[right].x(), 400.0);
        assert_approx_eq!(tree[right].y(), 90.0);
        assert_approx_eq!(tree[left_left].x(), -600.0);
        assert_approx_eq!(tree[left_right].x(), -200.0);
        assert_approx_eq!(tree[left_right].y(), 180.0);
    }

    #[test]
    fn test_layout_custom_config() {
        let config = LayoutConfig::new()
            .with_origin(600.0, 180.0)
            .with_spread(100.0)
            .with_level_gap(50.0)
            .with_spread_decay(0.25);
        let mut tree: Tree<i32> = [2, 1, 0].into_iter().collect();
        tree.layout(&config);

        let root = tree.root().unwrap();
        let child = tree[root].left().unwrap();
        let grandchild = tree[child].left().unwrap();

        assert_approx_eq!(tree[child].x(), 500.0);
        assert_approx_eq!(tree[child].y(), 230.0);
        assert_approx_eq!(tree[grandchild].x(), 475.0);
        assert_approx_eq!(tree[grandchild].y(), 280.0);
    }

    #[test]
    fn test_layout_long_vine() {
        let mut tree: Tree<i32> = (0..5000).collect();
        tree.layout(&LayoutConfig::default());

        let last = tree.iter().count();
        assert_eq!(last, 5000);
        let deepest = tree.rightmost(tree.root().unwrap());
        assert_approx_eq!(tree[deepest].y(), 4999.0 * 90.0);
    }

    #[test]
    fn test_layout_survives_rebalance_untouched() {
        let mut tree: Tree<i32> = (1..=7).collect();
        tree.layout(&LayoutConfig::default());
        let root = tree.root().unwrap();

        tree.rebalance(None);
        assert_approx_eq!(tree[root].y(), 0.0);

        tree.layout(&LayoutConfig::default());
        let new_root = tree.root().unwrap();
        assert_approx_eq!(tree[new_root].y(), 0.0);
        assert_approx_eq!(tree[root].y(), 180.0);
    }
}
