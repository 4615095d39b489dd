use std::hint::black_box;

use bench::{apply_runtime_config, default_rng};
use caps::Sequence;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use growable_array::GrowableArray;
use rand::Rng;

const BENCH_SIZES: [usize; 4] = [1024, 16384, 65536, 262144];

fn bench_growable(c: &mut Criterion) {
    let mut rng = default_rng();

    let mut append = c.benchmark_group("growable_array/append");
    for &size in &BENCH_SIZES {
        apply_runtime_config(&mut append, size);
        let values: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();

        append.bench_function(BenchmarkId::new("add", size), |bencher| {
            bencher.iter(|| {
                let mut array = GrowableArray::new();
                for &v in &values {
                    array.add(v).unwrap();
                }
                black_box(array)
            });
        });

        append.bench_function(BenchmarkId::new("std_vec_push", size), |bencher| {
            bencher.iter(|| {
                let mut vec = Vec::new();
                for &v in &values {
                    vec.push(v);
                }
                black_box(vec)
            });
        });
    }
    append.finish();

    let mut traverse = c.benchmark_group("growable_array/traverse");
    for &size in &BENCH_SIZES {
        apply_runtime_config(&mut traverse, size);
        let mut array: GrowableArray<u64> = (0..size as u64).collect();
        let frozen = array.to_immutable_array();

        traverse.bench_function(BenchmarkId::new("walk", size), |bencher| {
            bencher.iter(|| black_box(frozen.walk().fold(0_u64, u64::wrapping_add)));
        });

        traverse.bench_function(BenchmarkId::new("slice_iter", size), |bencher| {
            bencher.iter(|| {
                black_box(frozen.iter().copied().fold(0_u64, u64::wrapping_add))
            });
        });
    }
    traverse.finish();
}

criterion_group!(benches, bench_growable);
criterion_main!(benches);
