mod frozen;
mod growable;

pub use frozen::{ArrayCursor, FrozenArray};
pub use growable::GrowableArray;

/// Reallocation policy of [`GrowableArray`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GrowthParams {
    pub initial_capacity: usize,
    pub growth_factor: usize,
}

pub const GROWTH_PARAMS: GrowthParams = GrowthParams {
    initial_capacity: 16,
    growth_factor: 2,
};

impl Default for GrowthParams {
    fn default() -> Self {
        GROWTH_PARAMS
    }
}

impl GrowthParams {
    /// Capacity after the buffer of size `current` fills up; always larger than `current`.
    #[inline]
    pub fn next_capacity(&self, current: usize) -> usize {
        current
            .saturating_mul(self.growth_factor)
            .max(self.initial_capacity)
            .max(current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_growth_sequence() {
        let mut capacity = 0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            capacity = GROWTH_PARAMS.next_capacity(capacity);
            seen.push(capacity);
        }
        assert_eq!(seen, vec![16, 32, 64, 128]);
    }

    #[test]
    fn degenerate_params_still_grow() {
        let params = GrowthParams {
            initial_capacity: 0,
            growth_factor: 1,
        };
        assert_eq!(params.next_capacity(0), 1);
        assert_eq!(params.next_capacity(5), 6);
    }
}
