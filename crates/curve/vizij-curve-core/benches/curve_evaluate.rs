use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use vizij_curve_core::{Config, CurveEvaluator, Keyframe, KeyframeSnapshot, SegmentSearch};

fn build_keys(n: usize) -> Vec<Keyframe> {
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.1;
            Keyframe::with_tangents(t, t.sin(), t.cos(), t.cos())
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_evaluate");
    for &n in &[4usize, 32, 256] {
        let snapshot = KeyframeSnapshot::capture_shared(&build_keys(n));
        let end = n as f32 * 0.1;
        for (label, search) in [
            ("linear", SegmentSearch::Linear),
            ("binary", SegmentSearch::Binary),
        ] {
            let eval = CurveEvaluator::with_snapshot(
                snapshot.clone(),
                Config {
                    segment_search: search,
                    ..Config::default()
                },
            );
            group.bench_with_input(BenchmarkId::new(label, n), &eval, |b, eval| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for i in 0..64 {
                        acc += eval.evaluate(black_box(end * i as f32 / 64.0));
                    }
                    acc
                })
            });
        }
    }
    group.finish();
}

fn bench_capture(c: &mut Criterion) {
    let keys = build_keys(256);
    c.bench_function("capture_256", |b| {
        b.iter(|| KeyframeSnapshot::capture(black_box(&keys)))
    });
}

criterion_group!(benches, bench_evaluate, bench_capture);
criterion_main!(benches);
