use std::ptr;
use std::iter::FusedIterator;

use super::TreeNode;

pub struct IterPostorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(root: Option<&'a TreeNode<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Walks down the left side of the subtree at `node`, pushing each node with its right child
    /// underneath it
    fn descend(&mut self, mut node: &'a TreeNode<T>) {
        loop {
            self.stack.extend(node.right.as_deref());
            self.stack.push(node);

            match node.left.as_deref() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

/// Compares two nodes for equality using pointer equality only
fn node_eq<T>(left: Option<&&TreeNode<T>>, right: &TreeNode<T>) -> bool {
    left.map(|&left| ptr::eq(left, right))
        // default to not equal
        .unwrap_or(false)
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // If the top of the stack is the current node's right child, the right subtree still
            // needs to be visited before this node
            match node.right.as_deref() {
                Some(right) if node_eq(self.stack.last(), right) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.descend(right);
                },

                _ => return Some(&node.value),
            }
        }

        None
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
