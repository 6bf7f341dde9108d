use morph_core::{resample, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(80.0 + i as f64, 200.0 + (i as f64 * 0.05).sin() * 150.0))
        .collect()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    for &(n, m) in &[(10usize, 1_000usize), (1_000, 10), (5_000, 5_000), (2_000, 50_000)] {
        let old = gen_points(n);
        let new = gen_points(m);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_m{m}")), &(n, m), |b, _| {
            b.iter_batched(
                || (old.clone(), new.clone()),
                |(o, nw)| { let _ = black_box(resample(&o, &nw, 30)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
