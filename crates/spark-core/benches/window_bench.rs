use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spark_core::center_window;

fn bench_center_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("center_window");
    for &len in &[24usize, 168usize, 10_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                for now in 0..len {
                    let _ = black_box(center_window(len, 8, Some(now)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_center_window);
criterion_main!(benches);
