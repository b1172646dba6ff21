//! Expression analysis benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench analyze
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sign_analysis::{analyze, analyze_procedure, Environment, Sign};

const SAMPLE: &str = "
a = 5
b = -2
c = a + b
d = a - b
e = a * b
f = d + e
g = f - b
h = g * 2
j = (a - b) * (b + 3)
k = (a + e) / b
";

fn bench_sample_procedure(c: &mut Criterion) {
    c.bench_function("sample_procedure", |b| b.iter(|| analyze_procedure(black_box(SAMPLE))));
}

fn bench_long_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_chain");
    let env: Environment = [("x", Sign::Positive), ("y", Sign::Negative)].into_iter().collect();

    for terms in [10, 100, 1000] {
        let text = (0..terms).map(|i| if i % 2 == 0 { "x" } else { "y" }).collect::<Vec<_>>().join("*");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(terms), &text, |b, text| {
            b.iter(|| analyze(black_box(text), &env))
        });
    }

    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_nesting");
    let env = Environment::new();

    for depth in [10, 1000, 100_000] {
        let text = format!("{}1{}", "(2-".repeat(depth), ")".repeat(depth));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &text, |b, text| {
            b.iter(|| analyze(black_box(text), &env))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample_procedure, bench_long_chain, bench_deep_nesting);
criterion_main!(benches);
