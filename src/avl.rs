mod node;
mod preorder;
mod inorder;
mod postorder;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;

use std::fmt;
use std::cmp::{self, Ordering};
use std::borrow::Borrow;
use std::iter::FromIterator;

use log::trace;

use crate::Set;

/// An owned, possibly empty subtree
type Link<T> = Option<Box<TreeNode<T>>>;

/// Returns the height of a subtree, where an empty subtree has height -1
fn link_height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |node| node.height)
}

/// One side of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Debug)]
struct TreeNode<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    /// Always `1 + max(height(left), height(right))`
    height: isize,
}

impl<T> TreeNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn balance_factor(&self) -> isize {
        link_height(&self.left) - link_height(&self.right)
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(link_height(&self.left), link_height(&self.right));
    }

    /// Rotates this subtree left, returning the new subtree root
    ///
    /// The right child becomes the root and this node becomes its left child. The right child's
    /// former left subtree becomes this node's right subtree. Does nothing if there is no right
    /// child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut pivot = match self.right.take() {
            Some(pivot) => pivot,
            None => return self,
        };

        self.right = pivot.left.take();
        // The old root is now a child, so its height must be fixed before the new root's
        self.update_height();
        pivot.left = Some(self);
        pivot.update_height();

        pivot
    }

    /// Rotates this subtree right, returning the new subtree root
    ///
    /// Mirror image of `rotate_left`.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut pivot = match self.left.take() {
            Some(pivot) => pivot,
            None => return self,
        };

        self.left = pivot.right.take();
        self.update_height();
        pivot.right = Some(self);
        pivot.update_height();

        pivot
    }
}

/// Rotates the subtree stored in `link` in place
fn rotate<T>(link: &mut Link<T>, side: Side) {
    if let Some(node) = link.take() {
        *link = Some(match side {
            Side::Left => node.rotate_left(),
            Side::Right => node.rotate_right(),
        });
    }
}

/// Inserts `value` into the subtree stored in `link`, rebalancing each subtree on the way back up
///
/// Returns the side this subtree's root descended to, or `None` if `value` became the root of
/// this subtree (or was already present). The caller uses this to tell apart the single and
/// double rotation cases without comparing values again.
fn insert_into<T: Ord>(link: &mut Link<T>, value: T) -> Option<Side> {
    let node = match link {
        Some(node) => node,
        None => {
            *link = Some(Box::new(TreeNode::new(value)));
            return None;
        },
    };

    let side = match value.cmp(&node.value) {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        Ordering::Equal => return None,
    };

    let inner_side = insert_into(node.child_mut(side), value);
    node.update_height();
    rebalance(link, side, inner_side);

    Some(side)
}

/// Inserts `value` as a new leaf without rebalancing
///
/// Unbalanced trees can be as deep as they are long, so this walks down the tree in a loop rather
/// than recursing. Does nothing if `value` is already present.
fn insert_unbalanced<T: Ord>(link: &mut Link<T>, value: T) {
    // First find how deep the new leaf will be, so heights can be fixed on the way down
    let mut depth = 0;
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match value.cmp(&node.value) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return,
        };
        depth += 1;
    }

    let mut slot = link;
    let mut level = 0;
    while let Some(node) = slot {
        node.height = cmp::max(node.height, depth - level);
        level += 1;
        slot = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            _ => &mut node.right,
        };
    }

    *slot = Some(Box::new(TreeNode::new(value)));
}

/// Restores the balance of the subtree in `link` after an insertion that went down `side` and
/// then down `inner_side` from that child
fn rebalance<T>(link: &mut Link<T>, side: Side, inner_side: Option<Side>) {
    let node = match link {
        Some(node) => node,
        None => return,
    };

    let balance = node.balance_factor();
    if (-1..=1).contains(&balance) {
        return;
    }

    // A child that was just created has height 0, which cannot unbalance its parent, so the
    // insertion always continued below the child when we get here
    let inner_side = inner_side.unwrap_or(side);
    trace!("rebalancing subtree with balance factor {} ({:?}, {:?})", balance, side, inner_side);

    match (side, inner_side) {
        (Side::Left, Side::Left) => rotate(link, Side::Right),
        (Side::Left, Side::Right) => {
            rotate(node.child_mut(Side::Left), Side::Left);
            rotate(link, Side::Right);
        },
        (Side::Right, Side::Right) => rotate(link, Side::Left),
        (Side::Right, Side::Left) => {
            rotate(node.child_mut(Side::Right), Side::Right);
            rotate(link, Side::Left);
        },
    }
}

/// A height-balanced binary search tree (AVL tree)
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// When balancing is enabled (the default), the heights of the two subtrees of every node differ
/// by at most one. This is restored after each insertion using single and double rotations, which
/// keeps `insert` and `contains` at `O(log n)`. A tree created with [`AVLSet::unbalanced`] never
/// rotates and degrades into a plain BST whose shape depends entirely on insertion order.
///
/// Duplicate values are not allowed. Inserting a value that already exists in the set does not
/// modify the set. Values cannot be removed individually.
pub struct AVLSet<T> {
    root: Link<T>,
    len: usize,
    balancing: bool,
}

impl<T> Default for AVLSet<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
            balancing: true,
        }
    }
}

// The default recursive drop would overflow the stack on a deep unbalanced tree
impl<T> Drop for AVLSet<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for AVLSet<T> {
    fn clone(&self) -> Self {
        let mut root: Link<T> = None;
        let mut stack = Vec::new();
        if let Some(node) = self.root.as_deref() {
            stack.push((node, &mut root));
        }

        while let Some((source, slot)) = stack.pop() {
            let node = slot.insert(Box::new(TreeNode {
                value: source.value.clone(),
                left: None,
                right: None,
                height: source.height,
            }));

            let TreeNode {left, right, ..} = &mut **node;
            if let Some(child) = source.left.as_deref() {
                stack.push((child, left));
            }
            if let Some(child) = source.right.as_deref() {
                stack.push((child, right));
            }
        }

        Self {
            root,
            len: self.len,
            balancing: self.balancing,
        }
    }
}

impl<T> fmt::Debug for AVLSet<T>
    where T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AVLSet")
            .field("len", &self.len)
            .field("balancing", &self.balancing)
            .field("root", &self.root())
            .finish()
    }
}

impl<T: Ord + PartialEq> PartialEq for AVLSet<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees may be shaped differently while holding the same values (e.g. if one of them
        // is unbalanced). In-order traversal produces the values in sorted order, so comparing
        // those is enough.
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord + Eq> Eq for AVLSet<T> {}

impl<T: Ord> AVLSet<T> {
    /// Creates an empty, self-balancing `AVLSet`
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    /// let mut set: AVLSet<&str> = AVLSet::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set that never rebalances itself
    ///
    /// Useful as a worst case to compare against: inserting sorted values produces a tree that
    /// is a linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    ///
    /// let mut set = AVLSet::unbalanced();
    /// for value in 0..10 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.height(), 9);
    /// ```
    pub fn unbalanced() -> Self {
        Self::with_balancing(false)
    }

    /// Creates an empty set, with or without balancing
    pub fn with_balancing(balancing: bool) -> Self {
        let mut set = Self::default();
        set.balancing = balancing;
        set
    }

    /// Returns true if this set rebalances itself after insertions
    pub fn is_balancing(&self) -> bool {
        self.balancing
    }

    /// Returns the number of items in the set (i.e. the number of nodes in the tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree
    ///
    /// The height of an empty tree is -1 and the height of a tree with a single value is 0.
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// assert_eq!(set.height(), -1);
    /// set.insert(1);
    /// assert_eq!(set.height(), 0);
    /// set.insert(2);
    /// set.insert(3);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        link_height(&self.root)
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering on the borrowed
    /// form must match the ordering on the value type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// set.insert(String::from("abc"));
    /// assert!(set.contains("abc"));
    /// assert!(!set.contains("def"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set, or `None` if no such value exists in its binary
    /// search tree
    ///
    /// Time complexity: `O(log n)`
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(node.value.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }

        None
    }

    /// Inserts a new value into the set
    ///
    /// If the set did not have this value present, `true` is returned.
    ///
    /// If the set did have this value present, `false` is returned, and the set is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// assert!(set.insert(37));
    /// assert!(!set.insert(37));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }

        if self.balancing {
            insert_into(&mut self.root, value);
        } else {
            insert_unbalanced(&mut self.root, value);
        }
        self.len += 1;

        true
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(self.root.as_deref())
    }

    /// Performs an in-order traversal of the tree
    ///
    /// Values are always produced in increasing order.
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(self.root.as_deref())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<T> {
        IterPostorder::new(self.root.as_deref())
    }

    /// Iterates over the values in increasing order (same as `iter_inorder`)
    pub fn iter(&self) -> IterInorder<T> {
        self.iter_inorder()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Which value ends up at the root depends on the insertion order and on the rotations
    /// performed while balancing. For a guaranteed ordering, use the various iteration methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// set.insert(3);
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let root = set.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.value()), Some(3));
    /// ```
    pub fn root(&self) -> Option<Node<T>> {
        self.root.as_deref().map(Node::new)
    }
}

impl<T: Ord> Set<T> for AVLSet<T> {
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn contains(&self, value: &T) -> bool {
        AVLSet::contains(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_implemented(&self) -> bool {
        true
    }
}

impl<'a, T: Ord> IntoIterator for &'a AVLSet<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

impl<T: Ord> Extend<T> for AVLSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AVLSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
