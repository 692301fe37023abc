use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridsweep::*;

fn criterion_benchmark(c: &mut Criterion) {
    let tri: Shape = Triangle::new(10, 10, 18, 18, 2, 18).into();
    let edge_circle: Shape = Circle::new(15, 14, 2).into();
    let other_tri: Shape = Triangle::new(5, 12, 20, 14, 9, 25).into();
    let rect: Shape = Rect::new(0, 0, 4, 4).into();

    c.bench_function("tri circle test", |b| b.iter(|| black_box(&tri).shape_test(black_box(&edge_circle))));
    c.bench_function("tri tri test", |b| b.iter(|| black_box(&tri).shape_test(black_box(&other_tri))));
    c.bench_function("seg seg test", |b| b.iter(|| seg_seg_test(
        black_box(IVec2::new(0, 0)),
        black_box(IVec2::new(40, 40)),
        black_box(IVec2::new(0, 40)),
        black_box(IVec2::new(40, 0)),
        Config::DEFAULT.line_epsilon)));
    c.bench_function("resolve rect into tri", |b| b.iter(|| resolve(black_box(&rect), black_box(&tri), 20, 20)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
