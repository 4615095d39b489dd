//! Capability lattice for immutable collections.
//!
//! Every capability is a standalone trait. Composite kinds are intersections:
//!
//! - `Array<T>` = `Map<usize, T>` + `Counted` + `Sequence<Item = T>`, traversed in index order.
//! - `OrderedArray<T>` = `Array<T>` + `Ordered<T>` + `Searchable<T, Result<usize, usize>>`.
//! - `Dictionary<K, V>` = `Map<K, V>` + `Ordered<K>` + `Set<K>` + a sorted pair sequence.
//!
//! Values implementing these traits never change once built and may be read from any
//! number of threads. The only mutable collection contract is [`MutableArray`], which
//! is kept outside the lattice on purpose.

mod comparer;
mod error;
mod lattice;
mod mutable;
mod sequence;

pub mod set;

pub use comparer::{ByKey, Comparer, NaturalOrder, Reversed};
pub use error::{Error, Result};
pub use lattice::{
    Array, BiDictionary, Deque, Dictionary, Heap, Map, MultiDictionary, MultiMap, Ordered,
    OrderedArray, PriorityQueue, Queue, Range, Searchable, Slice, SortedSequence, SortedTree,
    Stack, Str, Tree,
};
pub use mutable::{MutableArray, MutableList};
pub use sequence::{Counted, CountedSequence, Cursor, Sequence, Walk};
pub use set::{Set, SetExt};
