use std::iter::FusedIterator;

type Link<T> = Option<Box<Entry<T>>>;

struct Entry<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list of the values that hashed to one bucket
///
/// New values are appended at the tail, so a chain keeps values in the order they arrived in the
/// bucket.
pub(super) struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self {
            head: None,
            len: 0,
        }
    }
}

// Dropping the entries recursively could overflow the stack when a poor hash function puts most
// values in the same chain
impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut entry) = next {
            next = entry.next.take();
        }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let mut chain = Self::default();
        let mut tail = &mut chain.head;
        for value in self.iter() {
            let entry = tail.insert(Box::new(Entry {
                value: value.clone(),
                next: None,
            }));
            tail = &mut entry.next;
        }
        chain.len = self.len;

        chain
    }
}

impl<T> Chain<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends a value at the end of the chain
    ///
    /// Time complexity: `O(n)`
    pub fn push_back(&mut self, value: T) {
        let mut tail = &mut self.head;
        while let Some(entry) = tail {
            tail = &mut entry.next;
        }

        *tail = Some(Box::new(Entry {value, next: None}));
        self.len += 1;
    }

    /// Removes the first value of the chain
    pub fn pop_front(&mut self) -> Option<T> {
        let mut entry = self.head.take()?;
        self.head = entry.next.take();
        self.len -= 1;

        Some(entry.value)
    }

    pub fn iter(&self) -> ChainIter<T> {
        ChainIter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T: PartialEq> Chain<T> {
    /// Returns true if any value in the chain is equal to `value`, stopping at the first match
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

pub(super) struct ChainIter<'a, T> {
    next: Option<&'a Entry<T>>,
    remaining: usize,
}

impl<'a, T> Clone for ChainIter<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T> Default for ChainIter<'a, T> {
    fn default() -> Self {
        Self {
            next: None,
            remaining: 0,
        }
    }
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        self.remaining -= 1;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for ChainIter<'a, T> {}

impl<'a, T> FusedIterator for ChainIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::mem;

    use static_assertions::{const_assert, const_assert_eq};

    const_assert_eq!(mem::size_of::<Link<u32>>(), mem::size_of::<usize>());
    const_assert!(mem::size_of::<Chain<u32>>() <= 2 * mem::size_of::<usize>());

    #[test]
    fn push_back_keeps_arrival_order() {
        let mut chain = Chain::default();
        assert_eq!(chain.len(), 0);

        chain.push_back(3);
        chain.push_back(1);
        chain.push_back(2);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.iter().copied().collect::<Vec<_>>(), &[3, 1, 2]);
        assert!(chain.contains(&1));
        assert!(!chain.contains(&4));
    }

    #[test]
    fn pop_front() {
        let mut chain = Chain::default();
        chain.push_back("a");
        chain.push_back("b");

        assert_eq!(chain.pop_front(), Some("a"));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.pop_front(), Some("b"));
        assert_eq!(chain.pop_front(), None);
        assert_eq!(chain.len(), 0);
        assert!(chain.iter().next().is_none());
    }

    #[test]
    fn clone_is_deep() {
        let mut chain = Chain::default();
        for value in 0..5 {
            chain.push_back(value.to_string());
        }

        let mut copy = chain.clone();
        assert_eq!(copy.len(), 5);
        assert!(copy.iter().eq(chain.iter()));

        copy.push_back("5".to_string());
        assert_eq!(chain.len(), 5);
        assert!(!chain.contains(&"5".to_string()));
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn long_chain_drops_without_recursion() {
        let mut chain = Chain::default();
        let mut tail = &mut chain.head;
        for value in 0..200_000 {
            let entry = tail.insert(Box::new(Entry {value, next: None}));
            tail = &mut entry.next;
        }
        chain.len = 200_000;

        assert_eq!(chain.iter().len(), 200_000);
        drop(chain);
    }
}
