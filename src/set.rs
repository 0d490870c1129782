/// The operations shared by every set in this crate
///
/// Implemented by [`AVLSet`](crate::AVLSet), [`ChainedHashSet`](crate::ChainedHashSet) and
/// [`VectorSet`](crate::VectorSet) so that code which only needs to add values and test for
/// membership can be written once and handed any of them, including as a `dyn Set<T>`.
///
/// Duplicate values are never stored. Adding a value that is already present does not modify the
/// set.
pub trait Set<T> {
    /// Adds a value to the set if it is not already present
    fn add(&mut self, value: T);

    /// Returns `true` if the set contains the specified value
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of values in the set
    ///
    /// Time complexity: `O(1)`
    fn len(&self) -> usize;

    /// Returns true if the set is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this set is a working implementation
    ///
    /// Harnesses use this to skip variants that only exist as placeholders. Every set in this
    /// crate returns `true`.
    fn is_implemented(&self) -> bool;
}

impl<T, S: Set<T> + ?Sized> Set<T> for Box<S> {
    fn add(&mut self, value: T) {
        (**self).add(value)
    }

    fn contains(&self, value: &T) -> bool {
        (**self).contains(value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_implemented(&self) -> bool {
        (**self).is_implemented()
    }
}
