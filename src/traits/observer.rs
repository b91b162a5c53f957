/// Progress hook for the DSW phases
///
/// An observer is notified synchronously after every structural rotation performed by
/// [`Tree::make_vine`](crate::Tree::make_vine) and [`Tree::balance_dsw`](crate::Tree::balance_dsw).
/// It is the hook used by visualizers and command-line front-ends to animate or log the
/// rebalancing. The observer never receives access to the tree, so it cannot mutate the
/// structure being rebalanced, and it cannot stop the phase early.
///
/// Any `FnMut(&str)` closure is an observer.
///
/// # Examples
///
/// ```
/// # use dsw_tree::Tree;
/// let mut tree: Tree<i32> = [3, 2, 1].into_iter().collect();
/// let mut messages = Vec::new();
///
/// let mut record = |message: &str| messages.push(message.to_owned());
/// tree.make_vine(Some(&mut record));
///
/// assert_eq!(messages, ["Vine: Rotating Right...", "Vine: Rotating Right..."]);
/// ```
pub trait Observer {
    /// Receives a progress notification
    ///
    /// # Arguments
    ///
    /// * `message` - Describes the rotation that was just performed
    fn notify(&mut self, message: &str);
}

impl<F> Observer for F
where
    F: FnMut(&str),
{
    #[inline]
    fn notify(&mut self, message: &str) {
        self(message)
    }
}
