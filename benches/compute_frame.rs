use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{RasterDimensions, TileExecutor, Viewport, compute_frame_using};

fn bench_compute_frame(c: &mut Criterion) {
    let dims = RasterDimensions::new(400, 400).expect("valid dimensions");
    let viewport = Viewport::default();
    let mut group = c.benchmark_group("compute_frame");

    for executor in [TileExecutor::ScopedThreads, TileExecutor::Rayon] {
        for parallelism in [1, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("{executor:?}"), parallelism),
                &parallelism,
                |b, &parallelism| {
                    b.iter(|| compute_frame_using(black_box(dims), black_box(viewport), 100, parallelism, executor));
                },
            );
        }
    }

    group.finish();
}

/// Deep zoom near the boundary, where most pixels run many iterations.
fn bench_boundary_zoom(c: &mut Criterion) {
    let dims = RasterDimensions::new(400, 400).expect("valid dimensions");
    let viewport = Viewport::new(-0.75, -0.74, 0.1, 0.11).expect("valid viewport");

    c.bench_function("compute_frame_boundary_zoom", |b| {
        b.iter(|| compute_frame_using(dims, black_box(viewport), 1000, 8, TileExecutor::ScopedThreads));
    });
}

criterion_group!(benches, bench_compute_frame, bench_boundary_zoom);
criterion_main!(benches);
