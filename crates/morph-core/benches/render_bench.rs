use std::time::Instant;

use anyhow::Result;
use morph_core::{AnimationConfig, AnimationScheduler, Point, RenderOptions, Renderer, SkiaRenderer};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn gen_points(n: usize) -> Vec<Point> {
    let gap = 640.0 / (n.max(2) - 1) as f64;
    (0..n).map(|i| Point::new(80.0 + gap * i as f64, 220.0 + (i as f64 * 0.3).sin() * 150.0)).collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    for &n in &[10usize, 1_000usize] {
        group.bench_function(format!("frame_{n}"), |b| {
            let pts = gen_points(n);
            let mut r = SkiaRenderer::new(RenderOptions::default()).expect("surface");
            b.iter(|| -> Result<()> {
                r.render(black_box(&pts))?;
                Ok(())
            });
        });
    }
    group.bench_function("morph_30_steps_10_to_100", |b| {
        let mut r = SkiaRenderer::new(RenderOptions::default()).expect("surface");
        b.iter(|| -> Result<()> {
            let mut s = AnimationScheduler::new(AnimationConfig::default(), gen_points(10))?;
            s.animated_change(gen_points(100), Instant::now())?;
            while s.is_running() {
                s.tick(&mut r)?;
            }
            black_box(s.current_points().len());
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
