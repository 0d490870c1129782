use std::fmt;

use super::TreeNode;

/// A single node of the tree
///
/// This is a read-only view meant for inspecting the shape of an [`AVLSet`](super::AVLSet), e.g.
/// to implement custom traversals or to check the balance of each subtree.
pub struct Node<'a, T> {
    node: &'a TreeNode<T>,
}

impl<'a, T> Clone for Node<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T> Copy for Node<'a, T> {}

impl<'a, T> fmt::Debug for Node<'a, T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("height", &self.height())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, T: PartialEq> PartialEq for Node<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        // Values are unique within a tree, so there is no need to compare the subtrees
        std::ptr::eq(self.node, other.node) || self.value().eq(other.value())
    }
}

impl<'a, T: Eq> Eq for Node<'a, T> {}

impl<'a, T> Node<'a, T> {
    /// Creates a new `Node`
    pub(super) fn new(node: &'a TreeNode<T>) -> Self {
        Self {node}
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Returns the height of the subtree rooted at this node
    ///
    /// A node with no children has height 0.
    pub fn height(&self) -> isize {
        self.node.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree
    ///
    /// Always in `-1..=1` for a tree with balancing enabled.
    pub fn balance_factor(&self) -> isize {
        self.node.balance_factor()
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.node.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.node.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        self.node.left.as_deref().map(Self::new)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        self.node.right.as_deref().map(Self::new)
    }
}
