use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use randset::RandomizedSet;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomizedSet insert");
    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut set = RandomizedSet::with_capacity(size);
                for v in 0..size as i64 {
                    set.insert(black_box(v));
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomizedSet remove");
    for size in [1_000, 10_000, 100_000].iter() {
        let full: RandomizedSet<i64> = (0..*size as i64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut set = full.clone();
                // Front-to-back removal forces a swap on every call
                for v in 0..size as i64 {
                    set.remove(black_box(&v));
                }
                set
            });
        });
    }
    group.finish();
}

fn bench_get_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("RandomizedSet get_random");
    for size in [10, 1_000, 100_000].iter() {
        let mut set = RandomizedSet::with_seed(42);
        set.extend(0..*size as i64);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(*set.get_random().unwrap_or(&0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove, bench_get_random);
criterion_main!(benches);
