pub(crate) mod bubble_sort;
pub(crate) mod quick_sort;

use caps::{Error, MutableArray, Result};

fn ensure_mutable<A: MutableArray + ?Sized>(xs: &A, operation: &'static str) -> Result<()> {
    if xs.is_frozen() {
        return Err(Error::Frozen { operation });
    }
    Ok(())
}
