use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use itertools::Itertools;
use trimazes::cells::GridCoordinate;
use trimazes::loader;
use trimazes::navigator::{simply_connected_step_limit, HandRule, Navigator};

/// A single long corridor: open left and right walls everywhere, horizontal
/// walls closed, so a walk from (1,1) crosses every cell.
fn corridor_text(length: usize) -> String {
    format!("1 {} {}", length, (0..length).map(|_| 4).join(" "))
}

fn bench_parse_grid(c: &mut Criterion) {
    c.bench_function("parse_grid", |b| {
        let text = corridor_text(300);
        b.iter(|| loader::parse_grid(&text))
    });
}

fn bench_right_hand_walk(c: &mut Criterion) {
    c.bench_function("right_hand_walk", |b| {
        let grid = loader::parse_grid(&corridor_text(300)).unwrap();
        let start = GridCoordinate::new(1, 1);
        b.iter(|| {
            Navigator::new(&grid, start, HandRule::RightHand)
                .unwrap()
                .walk(simply_connected_step_limit(&grid))
        })
    });
}

fn bench_left_hand_walk(c: &mut Criterion) {
    c.bench_function("left_hand_walk", |b| {
        let grid = loader::parse_grid(&corridor_text(300)).unwrap();
        let start = GridCoordinate::new(1, 300);
        b.iter(|| {
            Navigator::new(&grid, start, HandRule::LeftHand)
                .unwrap()
                .walk(simply_connected_step_limit(&grid))
        })
    });
}

criterion_group!(benches,
                 bench_parse_grid,
                 bench_right_hand_walk,
                 bench_left_hand_walk);
criterion_main!(benches);
