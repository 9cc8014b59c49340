use std::hint::black_box;

use chrono::DateTime;
use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;

fn bench_flood_reveal(c: &mut Criterion) {
    let clock = FixedClock(DateTime::from_timestamp(0, 0).unwrap());
    // a single mine in the corner leaves one huge empty region
    let layout = MineLayout::from_mine_coords((30, 30), &[(29, 29)]).unwrap();
    let fresh = GameState::with_layout(layout);

    c.bench_function("flood_reveal_30x30", |b| {
        b.iter(|| {
            let mut state = fresh.clone();
            black_box(state.open(black_box((0, 0)), &clock).unwrap())
        })
    });
}

fn bench_mine_placement(c: &mut Criterion) {
    let options = GameOptions::new_unchecked(30, 30, 100);

    c.bench_function("place_mines_30x30_100", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let generator = RandomMinefieldGenerator::new(seed, (15, 15), StartExclusion::RowAndColumn);
            black_box(generator.generate(options))
        })
    });
}

criterion_group!(benches, bench_flood_reveal, bench_mine_placement);
criterion_main!(benches);
