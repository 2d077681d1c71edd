//! Criterion benchmarks for the Fibonacci engine and decimal rendering.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibdrv_core::calculator::Calculator;
use fibdrv_core::fastdoubling::FastDoubling;

fn bench_fast_doubling(c: &mut Criterion) {
    let calc = FastDoubling::new();
    let ns: Vec<u64> = vec![100, 1_000, 10_000, 50_000];

    let mut group = c.benchmark_group("FastDoubling");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| calc.calculate(n).unwrap());
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let calc = FastDoubling::new();

    let mut group = c.benchmark_group("Render");
    for &n in &[100u64, 1_000, 10_000] {
        let value = calc.calculate(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &value, |b, value| {
            b.iter(|| value.to_decimal_string().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fast_doubling, bench_render);
criterion_main!(benches);
