use std::cmp::Ordering;

/// Total order over `T`.
///
/// - `compare(a, b)` is `Less`, `Equal` or `Greater`.
/// - The order must be consistent (antisymmetric and transitive). Algorithms never detect a
///   broken comparer; their output is then unspecified but they still terminate.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// `a` sorts at or before `b`.
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order given by `T: Ord`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Natural order on a projected key.
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T: ?Sized, K: Ord, F> Comparer<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
        assert!(NaturalOrder.le(&2, &2));
        assert!(!NaturalOrder.le(&3, &2));
    }

    #[test]
    fn closures_are_comparers() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }

    #[test]
    fn by_key_projects_before_comparing() {
        let by_len = ByKey::new(|s: &&str| s.len());
        assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
        assert_eq!(by_len.compare(&"ab", &"yz"), Ordering::Equal);
    }

    #[test]
    fn reversed_flips_every_answer() {
        let rev = Reversed(NaturalOrder);
        for (a, b) in [(1, 2), (2, 2), (3, 2)] {
            assert_eq!(rev.compare(&a, &b), NaturalOrder.compare(&b, &a));
        }
    }
}
