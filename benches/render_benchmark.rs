use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use mapty_tracker::models::{Coordinates, Workout, WorkoutId};
use mapty_tracker::services::view::{markers_geojson, render_workouts};
use std::hint::black_box;

const WORKOUT_COUNT: usize = 1000;

fn sample_workouts() -> Vec<Workout> {
    let now = Utc::now();
    (0..WORKOUT_COUNT)
        .map(|i| {
            let id = WorkoutId::new(format!("{:010}", i));
            let coords = Coordinates::new(38.7 + i as f64 * 1e-4, -9.1 - i as f64 * 1e-4);
            if i % 2 == 0 {
                Workout::running(id, now, coords, 5.0 + i as f64 * 0.01, 25.0, 170)
            } else {
                Workout::cycling(id, now, coords, 20.0, 60.0 + i as f64 * 0.1, 250.0)
            }
        })
        .collect()
}

fn benchmark_rendering(c: &mut Criterion) {
    let workouts = sample_workouts();

    let mut group = c.benchmark_group("view_rendering");

    group.bench_function("render_list", |b| {
        b.iter(|| render_workouts(black_box(&workouts)))
    });

    group.bench_function("markers_geojson", |b| {
        b.iter(|| markers_geojson(black_box(&workouts)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_rendering);
criterion_main!(benches);
