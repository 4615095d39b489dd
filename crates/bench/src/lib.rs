use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const QUADRATIC_SAMPLE_SIZE: usize = 10;
const QUADRATIC_WARM_UP_MS: u64 = 80;
const QUADRATIC_MEASURE_MS: u64 = 300;
const RUNTIME_SAMPLE_SIZE: usize = 15;
const RUNTIME_WARM_UP_MS: u64 = 200;
const RUNTIME_MEASURE_MS_SMALL: u64 = 300;
const RUNTIME_MEASURE_MS_LARGE: u64 = 1000;
const LARGE_INPUT: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Settings for inputs handled by an O(N log N) or linear routine.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(RUNTIME_WARM_UP_MS));
    if size < LARGE_INPUT {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(RUNTIME_MEASURE_MS_SMALL));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(RUNTIME_MEASURE_MS_LARGE));
    }
}

/// Settings for O(N^2) routines, which get flat sampling at every size.
pub fn apply_quadratic_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(QUADRATIC_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(QUADRATIC_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(QUADRATIC_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

#[derive(Clone, Copy, Debug)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Descending,
}

pub const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
        }
    }

    pub fn generate(self, size: usize, salt: u64) -> Vec<u64> {
        let mut rng = StdRng::seed_from_u64(mix_seed(RNG_SEED ^ (size as u64) ^ salt));
        match self {
            Self::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
            Self::NearlySorted1pctSwaps => {
                let mut data: Vec<u64> = (0..size as u64).collect();
                if size > 0 {
                    for _ in 0..(size / 100).max(1) {
                        let a = rng.random_range(0..size);
                        let b = rng.random_range(0..size);
                        data.swap(a, b);
                    }
                }
                data
            }
            Self::Descending => (0..size as u64).rev().collect(),
        }
    }
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
