use criterion::{
    BenchmarkId, Criterion, Throughput, {criterion_group, criterion_main},
};
use solvx::{FibHasher, HashMap};
use std::hint::black_box;

fn mix_words(count: u64) -> u64 {
    let mut hasher = FibHasher::<u64>::new();
    for value in 0..count {
        hasher.add(value);
    }
    hasher.value()
}

fn hasher_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_hasher");
    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(mix_words(size as u64)))
        });
    }
    group.finish();
}

fn map_insert_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_map");
    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut map: HashMap<u64, u64> = HashMap::default();
                for k in 0..size as u64 {
                    map.insert(k, k * 2);
                }
                let mut sum = 0_u64;
                for k in 0..size as u64 {
                    sum = sum.wrapping_add(*map.get(&k).unwrap());
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, hasher_throughput, map_insert_lookup);
criterion_main!(benches);
