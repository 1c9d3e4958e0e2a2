use criterion::{criterion_group, criterion_main, Criterion};
use env::{Env, HoverTask, TaskConfig};
use sim::SimConfig;

fn bench_hover_step(c: &mut Criterion) {
    let mut task = HoverTask::point_mass(SimConfig::default(), TaskConfig::default()).unwrap();
    let _ = task.reset();

    c.bench_function("hover_step", |b| {
        b.iter(|| {
            let (_obs, _reward, done) = task.step([500.0; 4]);
            if done {
                let _ = task.reset();
            }
        })
    });
}

criterion_group!(benches, bench_hover_step);
criterion_main!(benches);
