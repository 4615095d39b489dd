use std::iter::FusedIterator;
use std::rc::Rc;
use std::sync::Arc;

/// Immutable position in a lazy sequence.
///
/// Advancing never touches the current cursor: `next` builds a fresh, independent one, so
/// any cursor can be kept, cloned, or handed to another thread and walked again.
///
/// - `value()` is `Some` exactly when `has_value()` is true.
/// - `next()` on an exhausted cursor returns another exhausted cursor.
pub trait Cursor: Sized {
    type Item;

    fn has_value(&self) -> bool;

    fn value(&self) -> Option<Self::Item>;

    fn next(&self) -> Self;
}

/// A repeatable, side-effect free traversal, possibly infinite.
///
/// Each call to `cursor` starts a new chain; chains never share mutable state.
pub trait Sequence {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    fn cursor(&self) -> Self::Cursor;

    /// Bridge to `std::iter::Iterator`. Bound it with `take` when the sequence is infinite.
    fn walk(&self) -> Walk<Self::Cursor> {
        Walk::new(self.cursor())
    }
}

/// A collection that knows its size in O(log N) or better.
pub trait Counted {
    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

pub trait CountedSequence: Counted + Sequence {}

impl<S: Counted + Sequence + ?Sized> CountedSequence for S {}

/// Iterator over the values of a cursor chain.
#[derive(Clone, Debug)]
pub struct Walk<C> {
    cursor: C,
}

impl<C: Cursor> Walk<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Cursor at the current position, unaffected by further iteration.
    pub fn position(&self) -> &C {
        &self.cursor
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_value() {
            return None;
        }
        let value = self.cursor.value()?;
        self.cursor = self.cursor.next();
        Some(value)
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

macro_rules! forward_sequence {
    ($($ptr:ty),*) => {
        $(
            impl<S: Sequence + ?Sized> Sequence for $ptr {
                type Item = S::Item;
                type Cursor = S::Cursor;

                fn cursor(&self) -> Self::Cursor {
                    (**self).cursor()
                }
            }

            impl<S: Counted + ?Sized> Counted for $ptr {
                fn count(&self) -> usize {
                    (**self).count()
                }
            }
        )*
    };
}

forward_sequence!(&S, Box<S>, Rc<S>, Arc<S>);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    struct NaturalsFrom(u64);

    impl Cursor for NaturalsFrom {
        type Item = u64;

        fn has_value(&self) -> bool {
            true
        }

        fn value(&self) -> Option<u64> {
            Some(self.0)
        }

        fn next(&self) -> Self {
            Self(self.0 + 1)
        }
    }

    struct Naturals;

    impl Sequence for Naturals {
        type Item = u64;
        type Cursor = NaturalsFrom;

        fn cursor(&self) -> NaturalsFrom {
            NaturalsFrom(0)
        }
    }

    #[test]
    fn infinite_sequence_walks_lazily() {
        let head: Vec<u64> = Naturals.walk().take(5).collect();
        assert_eq!(head, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn advancing_leaves_the_original_cursor_intact() {
        let start = Naturals.cursor();
        let third = start.next().next();
        assert_eq!(start.value(), Some(0));
        assert_eq!(third.value(), Some(2));
        assert_eq!(start.next().value(), Some(1));
    }

    #[test]
    fn walks_are_independent() {
        let mut a = Naturals.walk();
        let b = Naturals.walk();
        a.next();
        a.next();
        assert_eq!(a.position().value(), Some(2));
        assert_eq!(b.position().value(), Some(0));
    }

    #[test]
    fn forwarding_through_pointers() {
        let shared = Arc::new(Naturals);
        let boxed: Box<Naturals> = Box::new(Naturals);
        assert_eq!(shared.walk().nth(3), Some(3));
        assert_eq!(boxed.walk().nth(4), Some(4));
        assert_eq!((&Naturals).walk().next(), Some(0));
    }
}
