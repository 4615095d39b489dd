use caps::{Error, MutableArray, MutableList, Result, Sequence};
use tracing::{debug, trace};

use crate::{FrozenArray, GROWTH_PARAMS, GrowthParams};

#[derive(Clone, Debug)]
enum Storage<T> {
    Growable(Vec<T>),
    Frozen(FrozenArray<T>),
}

/// The one mutable collection: an amortised-growth array with a one-way freeze.
///
/// Starts empty with capacity 0. When full, `add` moves the live values into a buffer of
/// `params.next_capacity(capacity)` slots (16, then doubling). `to_immutable_array` hands
/// the live window over to a [`FrozenArray`]; from then on every mutator fails with
/// [`Error::Frozen`] and the array reads through the frozen storage.
#[derive(Clone, Debug)]
pub struct GrowableArray<T> {
    storage: Storage<T>,
    // Policy capacity, not `Vec::capacity()`: the two differ for zero-sized `T`.
    capacity: usize,
    params: GrowthParams,
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableArray<T> {
    pub fn new() -> Self {
        Self::with_params(GROWTH_PARAMS)
    }

    pub fn with_params(params: GrowthParams) -> Self {
        Self {
            storage: Storage::Growable(Vec::new()),
            capacity: 0,
            params,
        }
    }

    /// Collects a finite sequence. Never returns for an infinite one.
    pub fn from_sequence<S: Sequence<Item = T> + ?Sized>(seq: &S) -> Self {
        seq.walk().collect()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Slots reserved by the growth policy; `count() <= capacity()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        matches!(self.storage, Storage::Frozen(_))
    }

    pub fn params(&self) -> GrowthParams {
        self.params
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Growable(values) => values,
            Storage::Frozen(frozen) => frozen.as_slice(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let values = self.as_slice();
        values.get(index).ok_or(Error::OutOfRange {
            index,
            count: values.len(),
        })
    }

    pub fn add(&mut self, value: T) -> Result<()> {
        let Storage::Growable(values) = &mut self.storage else {
            return Err(Error::Frozen { operation: "add" });
        };
        push(values, &mut self.capacity, self.params, value);
        Ok(())
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let values = self.live_mut("set")?;
        let count = values.len();
        let slot = values
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, count })?;
        *slot = value;
        Ok(())
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let values = self.live_mut("swap")?;
        let count = values.len();
        for index in [a, b] {
            if index >= count {
                return Err(Error::OutOfRange { index, count });
            }
        }
        values.swap(a, b);
        Ok(())
    }

    /// Freezes the array. Calling it again returns another handle to the same storage.
    pub fn to_immutable_array(&mut self) -> FrozenArray<T> {
        let values = match &mut self.storage {
            Storage::Frozen(frozen) => return frozen.clone(),
            Storage::Growable(values) => std::mem::take(values),
        };
        debug!(
            count = values.len(),
            capacity = self.capacity,
            "freezing growable array"
        );
        let frozen = FrozenArray::from_vec(values);
        self.storage = Storage::Frozen(frozen.clone());
        frozen
    }

    fn live_mut(&mut self, operation: &'static str) -> Result<&mut Vec<T>> {
        match &mut self.storage {
            Storage::Growable(values) => Ok(values),
            Storage::Frozen(_) => Err(Error::Frozen { operation }),
        }
    }
}

#[inline]
fn push<T>(values: &mut Vec<T>, capacity: &mut usize, params: GrowthParams, value: T) {
    if values.len() == *capacity {
        let grown = params.next_capacity(*capacity);
        trace!(from = *capacity, to = grown, "growing backing storage");
        let mut next = Vec::with_capacity(grown);
        next.append(values);
        *values = next;
        *capacity = grown;
    }
    values.push(value);
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let params = GROWTH_PARAMS;
        let mut values = Vec::new();
        let mut capacity = 0;
        for value in iter {
            push(&mut values, &mut capacity, params, value);
        }
        Self {
            storage: Storage::Growable(values),
            capacity,
            params,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> MutableArray for GrowableArray<T> {
    type Item = T;
    type Frozen = FrozenArray<T>;

    fn count(&self) -> usize {
        GrowableArray::count(self)
    }

    fn is_frozen(&self) -> bool {
        GrowableArray::is_frozen(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        GrowableArray::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        GrowableArray::set(self, index, value)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        GrowableArray::swap(self, a, b)
    }

    fn to_immutable_array(&mut self) -> FrozenArray<T> {
        GrowableArray::to_immutable_array(self)
    }
}

impl<T: Clone> MutableList for GrowableArray<T> {
    fn add(&mut self, value: T) -> Result<()> {
        GrowableArray::add(self, value)
    }
}
