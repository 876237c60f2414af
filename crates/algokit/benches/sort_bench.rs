//! Criterion benchmarks for the comparator-driven quicksort.
//! Inputs: random, already sorted, and heavy-duplicate sequences of n in {16, 256, 4096}.
//! Results land under target/criterion.

use algokit::algorithms::{LcgRandom, QuickSort};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn random_input(n: usize, seed: u64) -> Vec<u64> {
    LcgRandom::new(seed).take(n).collect()
}

fn bench_quick_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_sort");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, &n| {
            let sorter = QuickSort::ascending();
            b.iter_batched(
                || random_input(n, 43),
                |mut v| sorter.sort(&mut v),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sorted", n), &n, |b, &n| {
            let sorter = QuickSort::ascending();
            b.iter_batched(
                || (0..n as u64).collect::<Vec<_>>(),
                |mut v| sorter.sort(&mut v),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("duplicates", n), &n, |b, &n| {
            let sorter = QuickSort::descending();
            b.iter_batched(
                || random_input(n, 44).into_iter().map(|x| x % 4).collect::<Vec<_>>(),
                |mut v| sorter.sort(&mut v),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quick_sort);
criterion_main!(benches);
