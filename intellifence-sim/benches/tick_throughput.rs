use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intellifence_sim::{Entropy, SeededEntropy, Simulation, TelemetryGenerator};
use intellifence_sim::types::TelemetrySample;

/// Benchmark one full tick with no subscribers
fn bench_step(c: &mut Criterion) {
    let sim = Simulation::builder().seed(1).build().unwrap();

    c.bench_function("step", |b| {
        b.iter(|| black_box(sim.step()));
    });
}

/// Benchmark the random walk alone
fn bench_generator(c: &mut Criterion) {
    let generator = TelemetryGenerator::default();
    let mut entropy = SeededEntropy::from_seed(1);
    let mut sample = TelemetrySample::baseline();

    c.bench_function("generator_tick", |b| {
        b.iter(|| {
            sample = generator.tick_at(black_box(&sample), &mut entropy as &mut dyn Entropy, 0);
        });
    });
}

/// Benchmark ticks with a growing number of subscribers
fn bench_step_with_observers(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_with_observers");

    for count in [1usize, 10, 100].iter() {
        let sim = Simulation::builder().seed(1).build().unwrap();
        for _ in 0..*count {
            sim.on_sample(|sample| {
                black_box(sample.voltage);
            });
            sim.on_alert(|alert| {
                black_box(alert.severity);
            });
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| black_box(sim.step()));
        });
    }
    group.finish();
}

/// Benchmark snapshot collection for a frame
fn bench_snapshot(c: &mut Criterion) {
    let sim = Simulation::builder().seed(1).build().unwrap();
    for _ in 0..100 {
        sim.step();
    }

    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(sim.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_generator,
    bench_step_with_observers,
    bench_snapshot
);
criterion_main!(benches);
