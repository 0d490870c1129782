use std::iter::FromIterator;

use crate::Set;

/// A set stored as an unsorted `Vec`
///
/// Every operation is a linear scan, so this is only suitable for very small sets. It is the
/// simplest possible implementation of [`Set`] and is used as a reference to compare the other
/// sets against.
#[derive(Debug, Clone)]
pub struct VectorSet<T> {
    items: Vec<T>,
}

impl<T> Default for VectorSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for VectorSet<T> {
    fn eq(&self, other: &Self) -> bool {
        // Insertion order does not matter
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Eq> Eq for VectorSet<T> {}

impl<T: PartialEq> VectorSet<T> {
    /// Creates an empty `VectorSet`
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items in the set
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the set contains the specified value
    ///
    /// Time complexity: `O(n)`
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Inserts a new value at the end of the set, returning `false` if it was already present
    ///
    /// Time complexity: `O(n)`
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }

        self.items.push(value);
        true
    }

    /// Iterates over the values in the order they were inserted
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Set<T> for VectorSet<T> {
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn contains(&self, value: &T) -> bool {
        VectorSet::contains(self, value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_implemented(&self) -> bool {
        true
    }
}

impl<T: PartialEq> Extend<T> for VectorSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for VectorSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
