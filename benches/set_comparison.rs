use std::hash::Hash;
use std::collections::BTreeSet;

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
// Looking to measure set implementation, not hasher performance so using a faster hasher
use fnv::FnvHashSet as HashSet;

use sets::{AVLSet, ChainedHashSet, VectorSet};

trait Set<T>: Default {
    fn len(&self) -> usize;

    fn contains(&self, value: &T) -> bool;

    fn insert(&mut self, value: T) -> bool;
}

macro_rules! impl_set {
    ($name:ident, $bound:ident $(+ $other_bound:ident)*) => {
        impl<T> Set<T> for $name<T>
            where T: $bound $(+ $other_bound)*,
        {
            fn len(&self) -> usize {
                $name::len(self)
            }

            fn contains(&self, value: &T) -> bool {
                $name::contains(self, value)
            }

            fn insert(&mut self, value: T) -> bool {
                $name::insert(self, value)
            }
        }
    };
}

impl_set!(HashSet, Hash + Eq);
impl_set!(BTreeSet, Ord);
impl_set!(AVLSet, Ord);
impl_set!(ChainedHashSet, Hash + Eq);
impl_set!(VectorSet, PartialEq);

/// An `AVLSet` with rebalancing turned off
struct UnbalancedSet<T>(AVLSet<T>);

impl<T: Ord> Default for UnbalancedSet<T> {
    fn default() -> Self {
        UnbalancedSet(AVLSet::unbalanced())
    }
}

impl<T: Ord> Set<T> for UnbalancedSet<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }
}

#[derive(Debug, Clone)]
struct Values {
    values: Vec<i64>,
}

impl Values {
    /// Deterministically generates a set of at least `nvalues` values
    ///
    /// All values are guaranteed to be unique and ordered randomly.
    pub fn generate(nvalues: u32) -> Self {
        // Want to spread values out so we generate interesting trees/tables.
        // Trying not to generate consecutive values or values that are strictly
        // increasing in magnitude.

        let mut values = Vec::new();

        let n = nvalues as i64;
        for i in 0..n {
            // [0..n] - n/2 = [-n/2..n/2]
            // [-n/2..n/2] * 4 = [-4n/2..4n/2]
            // Multiply by 4 so that numbers aren't consecutive
            let value = (i - n/2) * 10;
            values.push(value);
        }

        // Use seed to make this deterministic
        let mut rng = StdRng::seed_from_u64(45930923092);
        // Shuffle to ensure that values are in a uniformly random order
        values.shuffle(&mut rng);

        Self {values}
    }

    pub fn get(&self, value_i: i64) -> i64 {
        // Make sure index is >= 0
        let index = value_i.max(0);
        self.values[index as usize]
    }
}

fn slice_max<T: Copy + Ord>(data: &[T]) -> T {
    data.iter().max().copied().expect("bug: slice was empty")
}

fn slice_max<T: Copy + Ord>(data: &[T]) -> T {
    data.iter().max().copied().expect("bug: slice was empty")
}

/// Runs many consecutive inserts on a set
fn benchmark_inserts<M: Set<i64>>(values: &Values, inserts: usize) -> M {
    let mut set = M::default();

    for value_i in 0..inserts {
        black_box(set.insert(values.get(value_i as i64)));
    }

    set
}

/// Inserts values in increasing order, the worst case for a tree that does not rebalance
fn benchmark_sorted_inserts<M: Set<i64>>(inserts: usize) -> M {
    let mut set = M::default();

    for value in 0..inserts {
        black_box(set.insert(value as i64));
    }

    set
}

/// Setup function for benchmark_contains
fn setup_benchmark_contains<M: Set<i64>>(values: &Values, lookups: usize) -> M {
    let mut set = M::default();

    for value_i in 0..lookups {
        black_box(set.insert(values.get(value_i as i64)));
    }
    assert_eq!(set.len(), lookups);

    set
}

/// Runs many consecutive membership tests on a set
fn benchmark_contains<M: Set<i64>>(values: &Values, set: &M, lookups: usize) {
    for i in 0..lookups {
        // Look up values in the opposite order to how they were inserted
        let value_i = lookups - i - 1;
        let value = values.get(value_i as i64);
        black_box(set.contains(&value));
        // Values are spaced out, so this one is never present
        black_box(set.contains(&(value + 1)));
    }
}

macro_rules! bench_each_set {
    ($group:ident, $param:ident, |$set_type:ident| $body:expr) => {
        {
            type $set_type = HashSet<i64>;
            $group.bench_with_input(BenchmarkId::new("HashSet", $param), $param, |b, &$param| b.iter(|| $body));
        }
        {
            type $set_type = BTreeSet<i64>;
            $group.bench_with_input(BenchmarkId::new("BTreeSet", $param), $param, |b, &$param| b.iter(|| $body));
        }
        {
            type $set_type = AVLSet<i64>;
            $group.bench_with_input(BenchmarkId::new("AVLSet", $param), $param, |b, &$param| b.iter(|| $body));
        }
        {
            type $set_type = UnbalancedSet<i64>;
            $group.bench_with_input(BenchmarkId::new("UnbalancedAVLSet", $param), $param, |b, &$param| b.iter(|| $body));
        }
        {
            type $set_type = ChainedHashSet<i64>;
            $group.bench_with_input(BenchmarkId::new("ChainedHashSet", $param), $param, |b, &$param| b.iter(|| $body));
        }
        {
            type $set_type = VectorSet<i64>;
            $group.bench_with_input(BenchmarkId::new("VectorSet", $param), $param, |b, &$param| b.iter(|| $body));
        }
    };
}

pub fn bench_set_insert(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(INSERTS) as u32);

    let mut group = c.benchmark_group("set insert");
    for inserts in INSERTS {
        bench_each_set!(group, inserts, |S| benchmark_inserts::<S>(&values, inserts));
    }
    group.finish();
}

pub fn bench_set_sorted_insert(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000];

    let mut group = c.benchmark_group("set sorted insert");
    for inserts in INSERTS {
        bench_each_set!(group, inserts, |S| benchmark_sorted_inserts::<S>(inserts));
    }
    group.finish();
}

pub fn bench_set_contains(c: &mut Criterion) {
    const LOOKUPS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(LOOKUPS) as u32);

    let mut group = c.benchmark_group("set contains");
    for lookups in LOOKUPS {
        {
            let set = setup_benchmark_contains::<HashSet<i64>>(&values, *lookups);
            group.bench_with_input(BenchmarkId::new("HashSet", lookups), lookups, |b, &lookups| {
                b.iter(|| benchmark_contains(&values, &set, lookups))
            });
        }
        {
            let set = setup_benchmark_contains::<BTreeSet<i64>>(&values, *lookups);
            group.bench_with_input(BenchmarkId::new("BTreeSet", lookups), lookups, |b, &lookups| {
                b.iter(|| benchmark_contains(&values, &set, lookups))
            });
        }
        {
            let set = setup_benchmark_contains::<AVLSet<i64>>(&values, *lookups);
            group.bench_with_input(BenchmarkId::new("AVLSet", lookups), lookups, |b, &lookups| {
                b.iter(|| benchmark_contains(&values, &set, lookups))
            });
        }
        {
            let set = setup_benchmark_contains::<UnbalancedSet<i64>>(&values, *lookups);
            group.bench_with_input(BenchmarkId::new("UnbalancedAVLSet", lookups), lookups, |b, &lookups| {
                b.iter(|| benchmark_contains(&values, &set, lookups))
            });
        }
        {
            let set = setup_benchmark_contains::<ChainedHashSet<i64>>(&values, *lookups);
            group.bench_with_input(BenchmarkId::new("ChainedHashSet", lookups), lookups, |b, &lookups| {
                b.iter(|| benchmark_contains(&values, &set, lookups))
            });
        }
        {
            let set = setup_benchmark_contains::<VectorSet<i64>>(&values, *lookups);
            group.bench_with_input(BenchmarkId::new("VectorSet", lookups), lookups, |b, &lookups| {
                b.iter(|| benchmark_contains(&values, &set, lookups))
            });
        }
    }
    group.finish();
}

criterion_group!(benches,
    bench_set_insert,
    bench_set_sorted_insert,
    bench_set_contains,
);

criterion_main!(benches);
