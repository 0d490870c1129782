//! Two implementations of a set, plus a trivial one to compare them against
//!
//! * [`AVLSet`]: a binary search tree that keeps itself height-balanced with rotations
//! * [`ChainedHashSet`]: a hash table with separate chaining that grows as it fills up
//! * [`VectorSet`]: an unsorted `Vec`
//!
//! All of them implement the [`Set`] trait, so code that only needs to add values and check for
//! membership can accept any of them.

pub mod avl;
pub mod hash;
mod set;
mod vector;

pub use avl::AVLSet;
pub use hash::ChainedHashSet;
pub use set::Set;
pub use vector::VectorSet;

#[macro_export(local_inner_macros)]
macro_rules! avlset {
    // trailing comma case
    ($($value:expr,)+) => (avlset!($($value),+));

    ( $($value:expr),* ) => {
        {
            let mut _set = $crate::AVLSet::new();
            $(
                let _ = _set.insert($value);
            )*
            _set
        }
    };
}

#[macro_export(local_inner_macros)]
macro_rules! hashset {
    // trailing comma case
    ($($value:expr,)+) => (hashset!($($value),+));

    ( $($value:expr),* ) => {
        {
            let mut _set = $crate::ChainedHashSet::new();
            $(
                let _ = _set.insert($value);
            )*
            _set
        }
    };
}
