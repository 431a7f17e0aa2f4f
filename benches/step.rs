use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use discsim::core::{CollisionPassMode, Initializer, Simulation, StepConfig, Viewport};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for &n in &[250usize, 750, 2000] {
        for mode in [CollisionPassMode::DoubleVisit, CollisionPassMode::SingleVisitSymmetric] {
            let step = StepConfig {
                pass_mode: mode,
                ..StepConfig::default()
            };
            let mut sim = Simulation::with_options(
                n,
                2000,
                Viewport::default(),
                Some(42),
                Initializer::default(),
                step,
            )
            .expect("valid setup");
            group.bench_with_input(BenchmarkId::new(mode.to_string(), n), &n, |b, _| {
                b.iter(|| {
                    sim.step().expect("step");
                    black_box(sim.frame())
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
