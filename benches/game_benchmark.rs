//! Benchmarks for the per-step hot paths and whole simulated games.
//!
//! The simulate command runs thousands of games, so defender ticks, move
//! resolution and the autopilot dominate its runtime.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use touchdown::game::{Player, resolve_move, tick};
use touchdown::rng::seeded;
use touchdown::{Autopilot, Direction, Field, GameConfig, Roster, SimParams, simulate};

/// A roster spawned the way the third down after two touchdowns would be.
fn crowded_roster(config: &GameConfig, field: &Field) -> Roster {
    let mut rng = seeded(42);
    let mut roster = Roster::new(Player::new(field.kickoff_spot()));
    roster.spawn(field, &config.spawn, 2, &mut rng);
    roster
}

fn bench_defender_tick(c: &mut Criterion) {
    let config = GameConfig::default();
    let field = Field::new(&config.field);
    let roster = crowded_roster(&config, &field);

    c.bench_function("defender_tick", |b| {
        let mut rng = seeded(7);
        b.iter(|| {
            let mut roster = roster.clone();
            black_box(tick(&mut roster, black_box(&field), &config.ai, &mut rng))
        });
    });
}

fn bench_resolve_move(c: &mut Criterion) {
    let config = GameConfig::default();
    let field = Field::new(&config.field);
    let roster = crowded_roster(&config, &field);

    c.bench_function("resolve_move", |b| {
        b.iter(|| {
            let mut roster = roster.clone();
            black_box(resolve_move(&mut roster, black_box(&field), Direction::Left))
        });
    });
}

fn bench_autopilot_choice(c: &mut Criterion) {
    let config = GameConfig::default();
    let field = Field::new(&config.field);
    let roster = crowded_roster(&config, &field);
    let autopilot = Autopilot::default();

    c.bench_function("autopilot_choose", |b| {
        b.iter(|| black_box(autopilot.choose(black_box(&roster), &field)));
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = GameConfig::default();
    let params = SimParams::default();

    c.bench_function("simulate_game", |b| {
        b.iter(|| black_box(simulate(config, black_box(42), &params)));
    });
}

fn bench_game_batch(c: &mut Criterion) {
    // Sequential, without rayon overhead
    let config = GameConfig::default();
    let params = SimParams::default();

    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let _ = black_box(simulate(config, black_box(seed), &params));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_defender_tick,
    bench_resolve_move,
    bench_autopilot_choice,
    bench_full_game,
    bench_game_batch
);
criterion_main!(benches);
