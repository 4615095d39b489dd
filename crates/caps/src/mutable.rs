use crate::{Array, Result};

/// In-place mutable array with a one-way freeze.
///
/// - Live indices are `0..count()`.
/// - Once frozen, `set` and `swap` fail with [`Error::Frozen`](crate::Error::Frozen) and
///   leave the array unchanged. The frozen check comes before the bounds check.
/// - Mutators take `&mut self`, so the single-writer rule is checked by the compiler.
///
/// Deliberately not an [`Array`]: a mutable array must never be mistaken for an immutable one.
pub trait MutableArray {
    type Item;
    type Frozen: Array<Self::Item>;

    fn count(&self) -> usize;

    fn is_frozen(&self) -> bool;

    fn get(&self, index: usize) -> Result<&Self::Item>;

    fn set(&mut self, index: usize, value: Self::Item) -> Result<()>;

    fn swap(&mut self, a: usize, b: usize) -> Result<()>;

    /// Freezes the array and returns an immutable view of `0..count()`.
    fn to_immutable_array(&mut self) -> Self::Frozen;
}

pub trait MutableList: MutableArray {
    /// Appends at index `count()`.
    fn add(&mut self, value: Self::Item) -> Result<()>;
}
