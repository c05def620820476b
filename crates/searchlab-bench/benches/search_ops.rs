//! Criterion micro-benchmarks for the search variants on warm haystacks.
//!
//! Complements the cycle-level sweep: criterion batches many calls, so
//! these numbers reflect throughput with the haystack resident in L1.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use searchlab_core::{random_array, sorted_array, Key, Pcg32, PcgSeed};
use searchlab_search::{SearchSuite, SearchVariant};

const SIZES: [usize; 5] = [4, 8, 16, 32, 64];
const QUERIES: usize = 100;

fn make_inputs(len: usize) -> (Vec<Key>, Vec<Key>) {
    let mut rng = Pcg32::new(PcgSeed::DEFAULT);
    let queries = random_array(&mut rng, QUERIES).unwrap();
    let haystack = sorted_array(&mut rng, len).unwrap();
    (haystack, queries)
}

/// Benchmark: every standard variant over a batch of 100 random keys.
fn bench_search_variants(c: &mut Criterion) {
    let suite = SearchSuite::standard();
    let mut group = c.benchmark_group("search_variants");
    group.throughput(Throughput::Elements(QUERIES as u64));
    for len in SIZES {
        let (haystack, queries) = make_inputs(len);
        for (name, variant) in suite.iter() {
            group.bench_with_input(BenchmarkId::new(name, len), &len, |b, _| {
                b.iter(|| {
                    let mut acc = 0isize;
                    for &k in &queries {
                        acc = acc.wrapping_add(variant.call_raw(black_box(&haystack), k));
                    }
                    black_box(acc)
                });
            });
        }
    }
    group.finish();
}

/// Benchmark: hit-only lookups, where linear search exits earliest.
fn bench_search_hits(c: &mut Criterion) {
    let suite = SearchSuite::standard();
    let mut group = c.benchmark_group("search_hits");
    for len in SIZES {
        let (haystack, _) = make_inputs(len);
        group.throughput(Throughput::Elements(haystack.len() as u64));
        for (name, variant) in suite.iter() {
            let SearchVariant::Ordered(f) = *variant else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(name, len), &haystack, |b, hay| {
                b.iter(|| {
                    for &k in hay {
                        black_box(f(black_box(hay), k));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search_variants, bench_search_hits);
criterion_main!(benches);
