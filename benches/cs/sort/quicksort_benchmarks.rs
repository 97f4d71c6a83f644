use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use lomuto::harness::{populate_list, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_SEED};
use lomuto::sort::{quicksort, randomized_quicksort_with_rng};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_input(size: usize) -> Vec<i64> {
    let mut rng = ChaCha20Rng::seed_from_u64(DEFAULT_SEED);
    populate_list(size, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, &mut rng)
        .expect("default value range is valid")
}

fn bench_pattern(c: &mut Criterion, name: &str, make_input: fn(usize) -> Vec<i64>) {
    let mut group = c.benchmark_group(name);

    for size in SIZES {
        let input = make_input(size);

        group.bench_with_input(BenchmarkId::new("deterministic", size), &input, |b, input| {
            b.iter(|| {
                let mut arr = input.clone();
                quicksort(&mut arr);
                black_box(arr);
            });
        });

        group.bench_with_input(BenchmarkId::new("randomized", size), &input, |b, input| {
            let mut rng = ChaCha20Rng::seed_from_u64(DEFAULT_SEED);
            b.iter(|| {
                let mut arr = input.clone();
                randomized_quicksort_with_rng(&mut arr, &mut rng);
                black_box(arr);
            });
        });
    }

    group.finish();
}

fn random_benchmarks(c: &mut Criterion) {
    bench_pattern(c, "quicksort_random", random_input);
}

// Sorted input is the worst case for last-element pivoting.
fn ascending_benchmarks(c: &mut Criterion) {
    bench_pattern(c, "quicksort_ascending", |size| (0..size as i64).collect());
}

fn descending_benchmarks(c: &mut Criterion) {
    bench_pattern(c, "quicksort_descending", |size| (0..size as i64).rev().collect());
}

criterion_group!(
    benches,
    random_benchmarks,
    ascending_benchmarks,
    descending_benchmarks
);
criterion_main!(benches);
