use std::cmp::Ordering;

use caps::{Comparer, MutableArray, Result};

pub fn sort<A, C>(xs: &mut A, cmp: &C) -> Result<()>
where
    A: MutableArray + ?Sized,
    C: Comparer<A::Item> + ?Sized,
{
    super::ensure_mutable(xs, "bubble_sort")?;
    // After each pass the largest remaining value has settled at `end - 1`.
    let mut end = xs.count();
    loop {
        let mut swapped = false;
        for i in 1..end {
            if cmp.compare(xs.get(i - 1)?, xs.get(i)?) == Ordering::Greater {
                xs.swap(i - 1, i)?;
                swapped = true;
            }
        }
        if !swapped {
            return Ok(());
        }
        end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use caps::{ByKey, Comparer};
    use growable_array::GrowableArray;

    use super::*;

    #[test]
    fn equal_keys_keep_their_order() {
        let mut xs: GrowableArray<(u8, char)> =
            [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]
                .into_iter()
                .collect();
        sort(&mut xs, &ByKey::new(|p: &(u8, char)| p.0)).unwrap();
        assert_eq!(
            xs.as_slice(),
            &[(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn sorted_input_takes_a_single_pass() {
        struct Counting<'a>(&'a std::cell::Cell<usize>);

        impl Comparer<i32> for Counting<'_> {
            fn compare(&self, a: &i32, b: &i32) -> Ordering {
                self.0.set(self.0.get() + 1);
                a.cmp(b)
            }
        }

        let calls = std::cell::Cell::new(0);
        let mut xs: GrowableArray<i32> = (0..100).collect();
        sort(&mut xs, &Counting(&calls)).unwrap();
        assert_eq!(calls.get(), 99);
    }
}
