use criterion::{criterion_group, criterion_main, Criterion};
use mueller::{analyze, transform, Calculation, Preset};
use std::hint::black_box;

fn bench_transform_and_analyze(c: &mut Criterion) {
    let matrix = *Preset::QuarterWavePlate.matrix().rows();
    let input = [1.0, 0.3, 0.4, 0.2];

    let mut group = c.benchmark_group("mueller");

    group.bench_function("transform", |b| {
        b.iter(|| transform(black_box(&matrix), black_box(&input)))
    });

    group.bench_function("analyze", |b| b.iter(|| analyze(black_box(&input))));

    group.bench_function("calculation", |b| {
        let preset = Preset::HorizontalPolarizer;
        b.iter(|| Calculation::run(black_box(preset.matrix()), black_box(preset.input_vector())))
    });

    group.finish();
}

criterion_group!(benches, bench_transform_and_analyze);
criterion_main!(benches);
