use std::cmp::Ordering;

use caps::{Array, Comparer, NaturalOrder};

/// Binary search over an array sorted by `cmp`.
///
/// `Ok(index)` of some matching element, or `Err(index)` where `value` could be inserted
/// while keeping the order. O(log N) lookups.
pub fn binary_search_by<T, A, C>(array: &A, value: &T, cmp: &C) -> Result<usize, usize>
where
    A: Array<T> + ?Sized,
    C: Comparer<T> + ?Sized,
{
    let mut lo = 0;
    let mut hi = array.count();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match array.lookup(&mid).map(|probe| cmp.compare(&probe, value)) {
            Some(Ordering::Less) => lo = mid + 1,
            Some(Ordering::Equal) => return Ok(mid),
            Some(Ordering::Greater) | None => hi = mid,
        }
    }
    Err(lo)
}

pub fn binary_search<T: Ord, A: Array<T> + ?Sized>(array: &A, value: &T) -> Result<usize, usize> {
    binary_search_by(array, value, &NaturalOrder)
}

#[cfg(test)]
mod tests {
    use caps::Reversed;
    use growable_array::FrozenArray;

    use super::*;

    #[test]
    fn finds_present_values() {
        let array: FrozenArray<i32> = vec![1, 3, 5, 7, 9, 11].into();
        for (i, v) in array.iter().enumerate() {
            assert_eq!(binary_search(&array, v), Ok(i));
        }
    }

    #[test]
    fn reports_insertion_points() {
        let array: FrozenArray<i32> = vec![1, 3, 5, 7].into();
        assert_eq!(binary_search(&array, &0), Err(0));
        assert_eq!(binary_search(&array, &4), Err(2));
        assert_eq!(binary_search(&array, &8), Err(4));

        let empty: FrozenArray<i32> = Vec::new().into();
        assert_eq!(binary_search(&empty, &1), Err(0));
    }

    #[test]
    fn agrees_with_slice_search_under_custom_order() {
        let array: FrozenArray<u16> = (0..200).rev().step_by(3).collect();
        let cmp = Reversed(NaturalOrder);
        for probe in 0..205 {
            let expected = array.as_slice().binary_search_by(|x| cmp.compare(x, &probe));
            assert_eq!(
                binary_search_by(&array, &probe, &cmp).is_ok(),
                expected.is_ok(),
                "probe={probe}"
            );
            if let Err(at) = expected {
                assert_eq!(binary_search_by(&array, &probe, &cmp), Err(at));
            }
        }
    }
}
