//! Depth-first visitation in the three classic orders. Each visitor is called once per key.

use super::Tree;
use crate::node::Node;

impl<T> Tree<T> {
    /// Calls `visit` on each node's key before the keys of its left and then right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    /// let mut seen = Vec::new();
    /// tree.visit_pre(|key| seen.push(*key));
    ///
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn visit_pre<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        pre_order(self.root.as_deref(), &mut visit);
    }

    /// Calls `visit` on every key in ascending order.
    pub fn visit_in<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        in_order(self.root.as_deref(), &mut visit);
    }

    /// Calls `visit` on each node's key after the keys of its left and then right subtrees.
    pub fn visit_post<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        post_order(self.root.as_deref(), &mut visit);
    }
}

fn pre_order<T, F>(node: Option<&Node<T>>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = node {
        visit(&node.key);
        pre_order(node.left(), visit);
        pre_order(node.right(), visit);
    }
}

fn in_order<T, F>(node: Option<&Node<T>>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = node {
        in_order(node.left(), visit);
        visit(&node.key);
        in_order(node.right(), visit);
    }
}

fn post_order<T, F>(node: Option<&Node<T>>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = node {
        post_order(node.left(), visit);
        post_order(node.right(), visit);
        visit(&node.key);
    }
}
