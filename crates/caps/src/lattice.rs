use std::rc::Rc;
use std::sync::Arc;

use crate::{Comparer, Counted, Error, Result, Sequence, Set};

/// A (possibly partial, possibly infinite) function from `K` to `V`.
///
/// `lookup` returns `None` outside the domain. Maps are not counted and not enumerable.
pub trait Map<K: ?Sized, V> {
    fn lookup(&self, key: &K) -> Option<V>;
}

/// A map where each key has a sequence of values.
pub trait MultiMap<K: ?Sized, V, S: Sequence<Item = V>>: Map<K, S> {}

/// Indices `0..count` are the domain. Lookup and count are O(1), and the sequence view
/// visits indices in increasing order.
///
/// This is an explicit claim: implementing the three parents is not enough, the index
/// order guarantee must hold too.
pub trait Array<T>: Map<usize, T> + Counted + Sequence<Item = T> {
    fn try_at(&self, index: usize) -> Result<T> {
        self.lookup(&index).ok_or(Error::OutOfRange {
            index,
            count: self.count(),
        })
    }
}

/// Carries the total order the collection is organised by.
pub trait Ordered<T> {
    type Order: Comparer<T>;

    fn ordering(&self) -> &Self::Order;
}

/// Finds the key of a value in O(log N) or better: an index for sorted arrays, a subtree
/// for search trees.
pub trait Searchable<V, K> {
    fn find_key(&self, value: &V) -> K;
}

/// An array sorted by its own ordering. `find_key` follows `slice::binary_search`:
/// `Ok(index)` when found, `Err(insertion_point)` otherwise.
pub trait OrderedArray<T>:
    Array<T> + Ordered<T> + Searchable<T, std::result::Result<usize, usize>>
{
}

/// A sequence whose traversal follows its ordering.
pub trait SortedSequence<T>: Sequence<Item = T> + Ordered<T> {}

/// Binary tree with a sequence view (usually in-order).
pub trait Tree<T>: Sequence<Item = T> + Sized {
    fn value(&self) -> T;

    fn left(&self) -> Option<Self>;

    fn right(&self) -> Option<Self>;
}

/// Every value in the left subtree sorts at or before the node, every value in the right
/// subtree at or after it. `find_key` yields the subtree rooted at a matching value.
pub trait SortedTree<T>: Tree<T> + Ordered<T> + Searchable<T, Option<Self>> {
    /// Returns a new tree holding `item`; `self` is unchanged.
    fn add(&self, item: T) -> Self;
}

/// Every node sorts at or after all values in both subtrees.
pub trait Heap<T>: Tree<T> + Ordered<T> {
    /// Returns a new heap holding `item`; `self` is unchanged.
    fn add(&self, item: T) -> Self;
}

/// LIFO view. Every mutator returns a new stack.
pub trait Stack<T>: Sized {
    fn is_empty(&self) -> bool;

    fn top(&self) -> Option<T>;

    /// Drops up to `n` items from the top.
    fn pop(&self, n: usize) -> Self;

    /// Pushes `items` in sequence order, so the last item ends on top.
    fn push<S: Sequence<Item = T>>(&self, items: &S) -> Self;
}

/// FIFO view. Every mutator returns a new queue.
pub trait Queue<T>: Sized {
    fn is_empty(&self) -> bool;

    fn front(&self) -> Option<T>;

    /// Drops up to `n` items from the front.
    fn pop_front(&self, n: usize) -> Self;

    /// Appends `items` in sequence order, so the last item ends at the back.
    fn push_back<S: Sequence<Item = T>>(&self, items: &S) -> Self;
}

pub trait Deque<T>: Queue<T> {
    fn back(&self) -> Option<T>;

    /// Prepends `items` one at a time, so the last item ends at the front.
    fn push_front<S: Sequence<Item = T>>(&self, items: &S) -> Self;

    /// Drops up to `n` items from the back.
    fn pop_back(&self, n: usize) -> Self;
}

pub trait PriorityQueue<K, V>: Ordered<K> + Stack<(K, V)> {}

/// Finite map with ordered keys. The keys form the `Set` view.
pub trait Dictionary<K, V>: Map<K, V> + Ordered<K> + Set<K> {
    type Pairs: SortedSequence<(K, V)>;

    /// Pairs in key order.
    fn to_sequence(&self) -> Self::Pairs;
}

pub trait MultiDictionary<K, V, S: Sequence<Item = V>>: Dictionary<K, S> {}

/// Dictionary that can be inverted into a value-to-keys dictionary.
pub trait BiDictionary<K, V>: Dictionary<K, V> {
    type Keys: Sequence<Item = K>;
    type Inverse: MultiDictionary<V, K, Self::Keys>;

    fn value_dictionary(&self) -> Self::Inverse;
}

/// Window `offset..offset + count` of another array, itself an array.
pub trait Slice<T>: Array<T> {
    type Source: Array<T>;

    fn source(&self) -> &Self::Source;

    fn offset(&self) -> usize;
}

/// Monotonically increasing integers: `lookup(&i) == Some(from + i)` for `i < count`.
pub trait Range: OrderedArray<i64> + Set<i64> {
    fn from(&self) -> i64;
}

pub trait Str: Array<char> {}

macro_rules! forward_map {
    ($($ptr:ty),*) => {
        $(
            impl<K: ?Sized, V, M: Map<K, V> + ?Sized> Map<K, V> for $ptr {
                fn lookup(&self, key: &K) -> Option<V> {
                    (**self).lookup(key)
                }
            }
        )*
    };
}

forward_map!(&M, Box<M>, Rc<M>, Arc<M>);
