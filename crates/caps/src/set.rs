//! Sets as membership tests, and lazy boolean algebra over them.
//!
//! A derived set stores its operands and evaluates membership on demand: construction is
//! O(1) and a test costs the sum of the operand tests. Derived sets never gain `Counted` or
//! `Sequence`, since a complement is usually infinite.
//!
//! The free functions work for any operands. The [`SetExt`] methods read better in chains,
//! but `BTreeSet` and `HashSet` have inherent `union`/`intersection`/`difference`/
//! `symmetric_difference` methods that shadow them, so use the free functions there.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// Membership test only: no enumeration, no count, possibly infinite.
pub trait Set<T: ?Sized> {
    fn contains(&self, item: &T) -> bool;
}

/// Set defined by a predicate.
#[derive(Clone, Copy)]
pub struct FnSet<F> {
    predicate: F,
}

impl<F> FnSet<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<T: ?Sized, F> Set<T> for FnSet<F>
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EmptySet;

impl<T: ?Sized> Set<T> for EmptySet {
    fn contains(&self, _item: &T) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UniversalSet;

impl<T: ?Sized> Set<T> for UniversalSet {
    fn contains(&self, _item: &T) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Union<A, B> {
    a: A,
    b: B,
}

impl<T: ?Sized, A: Set<T>, B: Set<T>> Set<T> for Union<A, B> {
    fn contains(&self, item: &T) -> bool {
        self.a.contains(item) || self.b.contains(item)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Intersection<A, B> {
    a: A,
    b: B,
}

impl<T: ?Sized, A: Set<T>, B: Set<T>> Set<T> for Intersection<A, B> {
    fn contains(&self, item: &T) -> bool {
        self.a.contains(item) && self.b.contains(item)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Difference<A, B> {
    a: A,
    b: B,
}

impl<T: ?Sized, A: Set<T>, B: Set<T>> Set<T> for Difference<A, B> {
    fn contains(&self, item: &T) -> bool {
        self.a.contains(item) && !self.b.contains(item)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SymmetricDifference<A, B> {
    a: A,
    b: B,
}

impl<T: ?Sized, A: Set<T>, B: Set<T>> Set<T> for SymmetricDifference<A, B> {
    fn contains(&self, item: &T) -> bool {
        self.a.contains(item) != self.b.contains(item)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Complement<A> {
    a: A,
}

impl<T: ?Sized, A: Set<T>> Set<T> for Complement<A> {
    fn contains(&self, item: &T) -> bool {
        !self.a.contains(item)
    }
}

pub fn union<A, B>(a: A, b: B) -> Union<A, B> {
    Union { a, b }
}

pub fn intersection<A, B>(a: A, b: B) -> Intersection<A, B> {
    Intersection { a, b }
}

pub fn difference<A, B>(a: A, b: B) -> Difference<A, B> {
    Difference { a, b }
}

pub fn symmetric_difference<A, B>(a: A, b: B) -> SymmetricDifference<A, B> {
    SymmetricDifference { a, b }
}

pub fn complement<A>(a: A) -> Complement<A> {
    Complement { a }
}

pub trait SetExt<T: ?Sized>: Set<T> + Sized {
    fn union<B: Set<T>>(self, other: B) -> Union<Self, B> {
        union(self, other)
    }

    fn intersection<B: Set<T>>(self, other: B) -> Intersection<Self, B> {
        intersection(self, other)
    }

    fn difference<B: Set<T>>(self, other: B) -> Difference<Self, B> {
        difference(self, other)
    }

    fn symmetric_difference<B: Set<T>>(self, other: B) -> SymmetricDifference<Self, B> {
        symmetric_difference(self, other)
    }

    fn complement(self) -> Complement<Self> {
        complement(self)
    }
}

impl<T: ?Sized, S: Set<T>> SetExt<T> for S {}

impl<T: Ord> Set<T> for BTreeSet<T> {
    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }
}

impl<T: Eq + Hash, H: BuildHasher> Set<T> for HashSet<T, H> {
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

macro_rules! forward_set {
    ($($ptr:ty),*) => {
        $(
            impl<T: ?Sized, S: Set<T> + ?Sized> Set<T> for $ptr {
                fn contains(&self, item: &T) -> bool {
                    (**self).contains(item)
                }
            }
        )*
    };
}

forward_set!(&S, Box<S>, Rc<S>, Arc<S>);
