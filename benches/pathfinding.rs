use criterion::{criterion_group, criterion_main, Criterion};
use env_logger::Env;
use nanorand::{Rng, WyRand};

use tile_pathfinding::prelude::*;

fn open_map(width: usize, height: usize) -> TileGrid {
    TileGrid::open(width, height)
}

/// Random map with roughly 10% walls and scattered penalties, fixed seed.
fn random_map(width: usize, height: usize) -> TileGrid {
    let mut rng = WyRand::new_seed(4);
    let mut cells = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        let roll = rng.generate_range(0_usize..10);
        cells.push(match roll {
            0 => (false, 0),
            1 | 2 => (true, 50),
            _ => (true, 0),
        });
    }
    TileGrid::from_fn(width, height, |(x, y)| cells[y * width + x])
}

fn bench_searches(c: &mut Criterion) {
    let _ = env_logger::Builder::from_env(Env::default()).is_test(true).try_init();

    let size = 128;
    let open = open_map(size, size);
    let mut random = random_map(size, size);
    let start = open.index_of((1, 1));
    let target = open.index_of((size - 2, size - 2));

    // keep the endpoints themselves out of the walls
    random.tile_mut(start).is_walkable = true;
    random.tile_mut(target).is_walkable = true;

    c.bench_function("open_128_diagonal", |b| {
        b.iter(|| {
            let mut grid = open.clone();
            a_star_search(&mut grid, start, target, &SearchConfig::default()).unwrap()
        })
    });

    c.bench_function("open_128_cardinal", |b| {
        b.iter(|| {
            let mut grid = open.clone();
            a_star_search(&mut grid, start, target, &SearchConfig::cardinal()).unwrap()
        })
    });

    c.bench_function("random_128_diagonal", |b| {
        b.iter(|| {
            let mut grid = random.clone();
            // walls may disconnect the endpoints; both outcomes are valid work
            let _ = a_star_search(&mut grid, start, target, &SearchConfig::default());
        })
    });
}

criterion_group!(benches, bench_searches);
criterion_main!(benches);
