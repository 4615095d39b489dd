use std::fmt;
use std::sync::Arc;

use caps::{Array, Counted, Cursor, Map, Sequence};

/// Immutable array produced by freezing a [`GrowableArray`](crate::GrowableArray).
///
/// Clones share the same storage. Values never change for the lifetime of any handle,
/// so a `FrozenArray<T>` can be read from many threads at once when `T: Sync`.
pub struct FrozenArray<T> {
    values: Arc<[T]>,
}

impl<T> FrozenArray<T> {
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            values: values.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrowing lookup; the capability view is [`Map::lookup`].
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> Clone for FrozenArray<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for FrozenArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq> Eq for FrozenArray<T> {}

impl<T> From<Vec<T>> for FrozenArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for FrozenArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FrozenArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> Counted for FrozenArray<T> {
    fn count(&self) -> usize {
        self.values.len()
    }
}

impl<T: Clone> Sequence for FrozenArray<T> {
    type Item = T;
    type Cursor = ArrayCursor<T>;

    fn cursor(&self) -> ArrayCursor<T> {
        ArrayCursor {
            values: Arc::clone(&self.values),
            index: 0,
        }
    }
}

impl<T: Clone> Map<usize, T> for FrozenArray<T> {
    fn lookup(&self, index: &usize) -> Option<T> {
        self.values.get(*index).cloned()
    }
}

impl<T: Clone> Array<T> for FrozenArray<T> {}

/// Position in a [`FrozenArray`]; holds its own handle to the storage.
pub struct ArrayCursor<T> {
    values: Arc<[T]>,
    index: usize,
}

impl<T> ArrayCursor<T> {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for ArrayCursor<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            index: self.index,
        }
    }
}

impl<T: Clone> Cursor for ArrayCursor<T> {
    type Item = T;

    fn has_value(&self) -> bool {
        self.index < self.values.len()
    }

    fn value(&self) -> Option<T> {
        self.values.get(self.index).cloned()
    }

    fn next(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            index: (self.index + 1).min(self.values.len()),
        }
    }
}
