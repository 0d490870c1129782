use std::slice;
use std::iter::FusedIterator;

use super::chain::{Chain, ChainIter};

/// An iterator over the values of a [`ChainedHashSet`](super::ChainedHashSet)
///
/// Values are produced bucket by bucket, in the order they are stored in each chain. This order
/// changes whenever the set grows.
pub struct Iter<'a, T> {
    buckets: slice::Iter<'a, Chain<T>>,
    current: ChainIter<'a, T>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(buckets: &'a [Chain<T>], len: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            current: ChainIter::default(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }

            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
