use caps::{Comparer, Error, MutableArray, Result};

pub fn sort<A, C>(xs: &mut A, cmp: &C) -> Result<()>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item> + ?Sized,
{
    super::ensure_mutable(xs, "quick_sort")?;
    let count = xs.count();
    if count < 2 {
        return Ok(());
    }
    quick_sort_range(xs, 0, count - 1, cmp)
}

// Pivot stays the last element of the range. Recursing only into the smaller side keeps
// the stack at O(log N); time is still O(N^2) on adversarial input.
fn quick_sort_range<A, C>(xs: &mut A, mut lo: usize, mut hi: usize, cmp: &C) -> Result<()>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item> + ?Sized,
{
    while lo < hi {
        let p = partition(xs, lo, hi, cmp)?;
        if p - lo < hi - p {
            if p > lo {
                quick_sort_range(xs, lo, p - 1, cmp)?;
            }
            lo = p + 1;
        } else {
            quick_sort_range(xs, p + 1, hi, cmp)?;
            // p > lo here: p == lo would force hi <= p.
            hi = p - 1;
        }
    }
    Ok(())
}

/// Lomuto partition of `xs[lo..=hi]` around the pivot `xs[hi]`.
///
/// Afterwards every element left of the returned index compares `<= pivot`, every element
/// right of it `> pivot`, and the pivot sits at the returned index.
pub fn partition<A, C>(xs: &mut A, lo: usize, hi: usize, cmp: &C) -> Result<usize>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item> + ?Sized,
{
    if lo > hi {
        return Err(Error::OutOfRange {
            index: lo,
            count: xs.count(),
        });
    }
    let mut boundary = lo;
    for j in lo..hi {
        if cmp.le(xs.get(j)?, xs.get(hi)?) {
            xs.swap(boundary, j)?;
            boundary += 1;
        }
    }
    xs.swap(boundary, hi)?;
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use caps::NaturalOrder;
    use growable_array::GrowableArray;

    use super::*;

    fn array_of(values: &[i32]) -> GrowableArray<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn partition_with_smallest_pivot() {
        let mut xs = array_of(&[5, 3, 8, 1]);
        assert_eq!(partition(&mut xs, 0, 3, &NaturalOrder), Ok(0));
        assert_eq!(xs.as_slice()[0], 1);
        let mut rest = xs.as_slice()[1..].to_vec();
        rest.sort();
        assert_eq!(rest, vec![3, 5, 8]);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut xs = array_of(&[9, 4, 7, 1, 8, 5]);
        let p = partition(&mut xs, 0, 5, &NaturalOrder).unwrap();
        let values = xs.as_slice();
        assert_eq!(values[p], 5);
        assert!(values[..p].iter().all(|&v| v <= 5));
        assert!(values[p + 1..].iter().all(|&v| v > 5));
    }

    #[test]
    fn partition_of_inner_range_leaves_outside_untouched() {
        let mut xs = array_of(&[100, 3, 2, 1, -100]);
        let p = partition(&mut xs, 1, 3, &NaturalOrder).unwrap();
        assert_eq!(p, 1);
        assert_eq!(xs.as_slice(), &[100, 1, 2, 3, -100]);
    }

    #[test]
    fn partition_rejects_bad_ranges() {
        let mut xs = array_of(&[1, 2]);
        assert_eq!(
            partition(&mut xs, 1, 0, &NaturalOrder),
            Err(Error::OutOfRange { index: 1, count: 2 })
        );
        assert_eq!(
            partition(&mut xs, 0, 2, &NaturalOrder),
            Err(Error::OutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn descending_input_sorts() {
        let mut xs: GrowableArray<u32> = (0..4_000).rev().collect();
        sort(&mut xs, &NaturalOrder).unwrap();
        assert!(xs.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }
}
