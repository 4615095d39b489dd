mod algorithms;
mod search;
mod sorted;

use caps::{ByKey, Comparer, MutableArray, NaturalOrder, Result};

pub use algorithms::quick_sort::partition;
pub use search::{binary_search, binary_search_by};
pub use sorted::SortedArray;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    QuickSort,
    BubbleSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] = [SortAlgorithm::QuickSort, SortAlgorithm::BubbleSort];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::BubbleSort => "bubble_sort",
    }
}

/// Whether equal elements keep their relative order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::BubbleSort)
}

/// Sorts `xs` in place with `algo` and hands it back for chaining.
///
/// Fails with `Error::Frozen` before touching anything when `xs` is frozen.
pub fn sort_by<A, C>(algo: SortAlgorithm, xs: &mut A, cmp: C) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item>,
{
    match algo {
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(xs, &cmp)?,
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(xs, &cmp)?,
    }
    Ok(xs)
}

pub fn sort<A>(algo: SortAlgorithm, xs: &mut A) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    A::Item: Ord,
{
    sort_by(algo, xs, NaturalOrder)
}

pub fn sort_by_key<A, K, F>(algo: SortAlgorithm, xs: &mut A, key: F) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    K: Ord,
    F: Fn(&A::Item) -> K,
{
    sort_by(algo, xs, ByKey::new(key))
}

/// Lomuto quicksort with the last element of each range as pivot. Not stable.
pub fn quick_sort_by<A, C>(xs: &mut A, cmp: C) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item>,
{
    sort_by(SortAlgorithm::QuickSort, xs, cmp)
}

pub fn quick_sort<A>(xs: &mut A) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    A::Item: Ord,
{
    sort(SortAlgorithm::QuickSort, xs)
}

pub fn quick_sort_by_key<A, K, F>(xs: &mut A, key: F) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    K: Ord,
    F: Fn(&A::Item) -> K,
{
    sort_by_key(SortAlgorithm::QuickSort, xs, key)
}

/// Stable, O(N) on sorted input, O(N^2) otherwise.
pub fn bubble_sort_by<A, C>(xs: &mut A, cmp: C) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item>,
{
    sort_by(SortAlgorithm::BubbleSort, xs, cmp)
}

pub fn bubble_sort<A>(xs: &mut A) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    A::Item: Ord,
{
    sort(SortAlgorithm::BubbleSort, xs)
}

pub fn bubble_sort_by_key<A, K, F>(xs: &mut A, key: F) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    K: Ord,
    F: Fn(&A::Item) -> K,
{
    sort_by_key(SortAlgorithm::BubbleSort, xs, key)
}

/// Orders `xs` by natural order using quicksort.
pub fn order_by<A>(xs: &mut A) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    A::Item: Ord,
{
    quick_sort(xs)
}

pub fn order_by_key<A, K, F>(xs: &mut A, key: F) -> Result<&mut A>
where
    A: MutableArray + ?Sized,
    K: Ord,
    F: Fn(&A::Item) -> K,
{
    quick_sort_by_key(xs, key)
}
