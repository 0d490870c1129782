mod chain;
mod iter;

pub use iter::*;

use std::fmt;
use std::mem;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use fnv::FnvHasher;
use log::debug;

use crate::Set;

use chain::Chain;

/// The number of buckets in a newly created [`ChainedHashSet`]
pub const DEFAULT_CAPACITY: usize = 10;

/// The ratio of values to buckets above which a [`ChainedHashSet`] grows
pub const MAX_LOAD_FACTOR: f64 = 0.8;

/// Hashes a value with the FNV-1a hash function
///
/// This is the hash function used by [`ChainedHashSet::new`].
pub fn fnv_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FnvHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

fn empty_buckets<T>(capacity: usize) -> Vec<Chain<T>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Chain::default);
    buckets
}

/// A hash table that resolves collisions by chaining
///
/// Each bucket holds a singly linked chain of the values whose hash, modulo the number of buckets,
/// is the index of that bucket. Once the number of values divided by the number of buckets exceeds
/// [`MAX_LOAD_FACTOR`], the table grows to `capacity * 2 + 1` buckets and every value is rehashed.
/// With a good hash function this keeps `insert` and `contains` at amortized `O(1)`.
///
/// The hash function is supplied by the caller (see [`ChainedHashSet::with_hasher`]). It must be
/// deterministic and must give equal values equal hashes. That is not checked: a hash function
/// that breaks those rules results in values that cannot be found again.
///
/// Duplicate values are not allowed. Inserting a value that already exists in the set does not
/// modify the set.
#[derive(Clone)]
pub struct ChainedHashSet<T, F = fn(&T) -> u64> {
    buckets: Vec<Chain<T>>,
    len: usize,
    hasher: F,
}

impl<T: Hash> Default for ChainedHashSet<T> {
    fn default() -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            hasher: fnv_hash::<T>,
        }
    }
}

impl<T, F> fmt::Debug for ChainedHashSet<T, F>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(Iter::new(&self.buckets, self.len)).finish()
    }
}

impl<T, F> PartialEq for ChainedHashSet<T, F>
    where T: Eq,
          F: Fn(&T) -> u64,
{
    fn eq(&self, other: &Self) -> bool {
        // Bucket layout depends on insertion history, so only membership is compared
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Eq, F: Fn(&T) -> u64> Eq for ChainedHashSet<T, F> {}

impl<T: Hash + Eq> ChainedHashSet<T> {
    /// Creates an empty `ChainedHashSet` that hashes values with [`fnv_hash`]
    ///
    /// The set starts out with [`DEFAULT_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::ChainedHashSet;
    /// let set: ChainedHashSet<&str> = ChainedHashSet::new();
    /// assert_eq!(set.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, F> ChainedHashSet<T, F>
    where T: Eq,
          F: Fn(&T) -> u64,
{
    /// Creates an empty set that uses the given function to hash values
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_hasher(|value: &u32| *value as u64);
    /// set.insert(3);
    /// set.insert(13);
    /// // Both values are in bucket 3 of the 10 initial buckets
    /// assert_eq!(set.elements_at_index(3), 2);
    /// ```
    pub fn with_hasher(hasher: F) -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of values in the set
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of values divided by the number of buckets
    ///
    /// Never greater than [`MAX_LOAD_FACTOR`] once an insertion completes.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the index of the bucket that `value` belongs in, whether or not it is in the set
    pub fn bucket_of(&self, value: &T) -> usize {
        ((self.hasher)(value) % self.capacity() as u64) as usize
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// Only the chain in the value's bucket is searched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.buckets[self.bucket_of(value)].contains(value)
    }

    /// Inserts a new value into the set
    ///
    /// If the set did not have this value present, `true` is returned. The value is appended to
    /// the end of its bucket's chain, and the table grows if that pushes the load factor above
    /// [`MAX_LOAD_FACTOR`].
    ///
    /// If the set did have this value present, `false` is returned, and the set is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// for value in 0..8 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.capacity(), 10);
    ///
    /// assert!(set.insert(8));
    /// assert_eq!(set.capacity(), 21);
    /// assert!(!set.insert(8));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }

        let index = self.bucket_of(&value);
        self.buckets[index].push_back(value);
        self.len += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.grow();
        }

        true
    }

    /// Returns the number of values stored in bucket `index`, or 0 if there is no such bucket
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert_eq!(set.elements_at_index(0), 0);
    /// assert_eq!(set.elements_at_index(1000), 0);
    /// ```
    pub fn elements_at_index(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Chain::len)
    }

    /// Returns true if `value` is stored in bucket `index`, or false if there is no such bucket
    pub fn is_element_at_index(&self, value: &T, index: usize) -> bool {
        self.buckets.get(index).map_or(false, |chain| chain.contains(value))
    }

    /// Iterates over every value in the set, in bucket order
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.buckets, self.len)
    }

    /// Moves every value into a new array of `capacity * 2 + 1` buckets
    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2 + 1;
        debug!("growing hash set from {} to {} buckets ({} values)", self.capacity(), new_capacity, self.len);

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for mut chain in old_buckets {
            while let Some(value) = chain.pop_front() {
                let index = self.bucket_of(&value);
                self.buckets[index].push_back(value);
            }
        }

        debug_assert_eq!(self.buckets.iter().map(Chain::len).sum::<usize>(), self.len);
    }
}

impl<T, F> Set<T> for ChainedHashSet<T, F>
    where T: Eq,
          F: Fn(&T) -> u64,
{
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn contains(&self, value: &T) -> bool {
        ChainedHashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_implemented(&self) -> bool {
        true
    }
}

impl<'a, T, F> IntoIterator for &'a ChainedHashSet<T, F>
    where T: Eq,
          F: Fn(&T) -> u64,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, F> Extend<T> for ChainedHashSet<T, F>
    where T: Eq,
          F: Fn(&T) -> u64,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for ChainedHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
