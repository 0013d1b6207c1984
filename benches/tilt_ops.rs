use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use tilt_2048::engine::{compact_column, is_game_over, Tile};
use tilt_2048::{Model, Side};

fn corpus() -> Vec<Model> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut models = Vec::new();
    // Empty and two-tile starts
    models.push(Model::new(4));
    let mut m = Model::new(4);
    m.add_random_tile(&mut rng);
    m.add_random_tile(&mut rng);
    models.push(m.clone());
    // Derive a variety of densities deterministically
    for i in 0..20 {
        let side = Side::ALL[i % Side::ALL.len()];
        if m.tilt(side) {
            m.add_random_tile(&mut rng);
        }
        models.push(m.clone());
    }
    models
}

fn bench_tilt(c: &mut Criterion) {
    for side in Side::ALL {
        c.bench_function(&format!("tilt/{side}"), |bch| {
            bch.iter_batched(
                corpus,
                |mut models| {
                    let mut acc = 0u64;
                    for m in models.iter_mut() {
                        m.tilt(side);
                        acc ^= m.score();
                    }
                    black_box(acc)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_column_and_rules(c: &mut Criterion) {
    let column: Vec<Tile> = [2, 2, 4, 4]
        .iter()
        .enumerate()
        .map(|(i, &v)| Tile::create(v, 0, 3 - i))
        .collect();
    c.bench_function("column/compact_full", |bch| {
        bch.iter(|| black_box(compact_column(black_box(&column), 4)))
    });
    c.bench_function("rules/is_game_over", |bch| {
        let models = corpus();
        bch.iter(|| {
            let mut over = 0usize;
            for m in &models {
                over += is_game_over(m.board(), 2048) as usize;
            }
            black_box(over)
        })
    });
}

criterion_group!(tilt_ops, bench_tilt, bench_column_and_rules);
criterion_main!(tilt_ops);
