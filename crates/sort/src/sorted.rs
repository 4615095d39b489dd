use caps::{
    Array, Comparer, Counted, Map, Ordered, OrderedArray, Result, Searchable, Sequence, Set,
};
use growable_array::{ArrayCursor, FrozenArray, GrowableArray};

use crate::algorithms::quick_sort;
use crate::search::binary_search_by;

/// Immutable array kept in the order of its comparer.
#[derive(Clone, Debug)]
pub struct SortedArray<T, C> {
    values: FrozenArray<T>,
    order: C,
}

impl<T, C: Comparer<T>> SortedArray<T, C> {
    /// Quicksorts `xs` by `order` and freezes it.
    pub fn from_growable(mut xs: GrowableArray<T>, order: C) -> Result<Self>
    where
        T: Clone,
    {
        quick_sort::sort(&mut xs, &order)?;
        Ok(Self {
            values: xs.to_immutable_array(),
            order,
        })
    }

    pub fn values(&self) -> &FrozenArray<T> {
        &self.values
    }
}

impl<T, C> Counted for SortedArray<T, C> {
    fn count(&self) -> usize {
        self.values.len()
    }
}

impl<T: Clone, C> Sequence for SortedArray<T, C> {
    type Item = T;
    type Cursor = ArrayCursor<T>;

    fn cursor(&self) -> ArrayCursor<T> {
        self.values.cursor()
    }
}

impl<T: Clone, C> Map<usize, T> for SortedArray<T, C> {
    fn lookup(&self, index: &usize) -> Option<T> {
        self.values.lookup(index)
    }
}

impl<T: Clone, C> Array<T> for SortedArray<T, C> {}

impl<T, C: Comparer<T>> Ordered<T> for SortedArray<T, C> {
    type Order = C;

    fn ordering(&self) -> &C {
        &self.order
    }
}

impl<T: Clone, C: Comparer<T>> Searchable<T, std::result::Result<usize, usize>>
    for SortedArray<T, C>
{
    fn find_key(&self, value: &T) -> std::result::Result<usize, usize> {
        binary_search_by(&self.values, value, &self.order)
    }
}

impl<T: Clone, C: Comparer<T>> OrderedArray<T> for SortedArray<T, C> {}

impl<T: Clone, C: Comparer<T>> Set<T> for SortedArray<T, C> {
    fn contains(&self, item: &T) -> bool {
        self.find_key(item).is_ok()
    }
}
