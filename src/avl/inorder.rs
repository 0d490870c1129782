use std::iter::FusedIterator;

use super::TreeNode;

pub struct IterInorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant along the leftmost path below it
    fn push_left_spine(&mut self, mut current: Option<&'a TreeNode<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
