//! Criterion benchmarks for the scoring pipeline.
//!
//! Measures scoring and ranking time across table sizes (8, 64, 512 vendors)
//! to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package scorecard-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scorecard_core::{ScoringConfig, rank_vendors, score_vendors};


use bench_support::{BENCHMARK_SEED, generate_vendor_table};

/// Table sizes to benchmark: the shipped dataset size and two larger books.
const TABLE_SIZES: &[usize] = &[8, 64, 512];

/// Benchmark the full score-and-rank pass for various table sizes.
fn bench_score_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_and_rank");
    let config = ScoringConfig::default();

    for &size in TABLE_SIZES {
        // Pre-generate inputs outside the benchmark loop.
        let records = generate_vendor_table(size, BENCHMARK_SEED);

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small table sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("vendors", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking scoring performance, result is intentionally discarded"
                )]
                let _ = score_vendors(&records, &config).map(|mut scored| {
                    rank_vendors(&mut scored);
                    scored
                });
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_and_rank);
criterion_main!(benches);
