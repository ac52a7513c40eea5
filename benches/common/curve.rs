use criterion::{black_box, Criterion};
use curvekde::sampler::PointSampler;
use crate::common::samples::CURVES;

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        b.iter(|| {
            for curve in CURVES.iter() {
                black_box(curve.evaluate(black_box(0.5)));
            }
        })
    });
}

pub fn castlejau(c: &mut Criterion) {
    c.bench_function("castlejau", |b| {
        b.iter(|| {
            for curve in CURVES.iter() {
                black_box(curve.castlejau_eval(black_box(0.5)));
            }
        })
    });
}

pub fn polyline(c: &mut Criterion) {
    c.bench_function("polyline", |b| {
        b.iter(|| {
            for curve in CURVES.iter() {
                black_box(curve.polyline(100));
            }
        })
    });
}

pub fn sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample 500");
    for (i, curve) in CURVES.iter().enumerate() {
        let mut sampler = PointSampler::seeded(0);
        group.bench_with_input(i.to_string(), curve, |b, curve| {
            b.iter(|| black_box(sampler.sample(curve, 500, 1.0)))
        });
    }
    group.finish();
}

pub fn all(c: &mut Criterion) {
    eval(c);
    castlejau(c);
    polyline(c);
    sample(c);
}
