#![no_main]

//! Session timeline fuzzer.
//!
//! Drives a session with an arbitrary mix of key presses and clock
//! advances, then checks every invariant after each step. Knockdowns,
//! tackles, touchdowns, restarts and overlapping timers all fall out of
//! long enough inputs.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use touchdown::invariants::check_invariants;
use touchdown::{Direction, GameConfig, Input, Session};

/// A fuzzer-generated step.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzStep {
    Up,
    Down,
    Left,
    Right,
    Start,
    /// Advance the virtual clock, in milliseconds.
    Wait(u16),
}

#[derive(Arbitrary, Debug)]
struct SessionInput {
    seed: u64,
    /// Shrinks the clock so time-outs are reachable.
    duration_secs: u8,
    lunge_percent: u8,
    steps: Vec<FuzzStep>,
}

fuzz_target!(|input: SessionInput| {
    let mut config = GameConfig::default();
    config.timing.game_duration_secs = u32::from(input.duration_secs.max(1));
    config.ai.lunge_chance = f64::from(input.lunge_percent % 101) / 100.0;

    let Ok(mut session) = Session::new(config, input.seed) else {
        return;
    };

    for (i, step) in input.steps.iter().take(2000).enumerate() {
        match *step {
            FuzzStep::Up => session.handle(Input::Move(Direction::Up)),
            FuzzStep::Down => session.handle(Input::Move(Direction::Down)),
            FuzzStep::Left => session.handle(Input::Move(Direction::Left)),
            FuzzStep::Right => session.handle(Input::Move(Direction::Right)),
            FuzzStep::Start => session.handle(Input::Start),
            FuzzStep::Wait(ms) => session.advance(u64::from(ms)),
        }

        let violations = check_invariants(&session);
        assert!(
            violations.is_empty(),
            "Invariants violated after step {}: {:?}",
            i,
            violations
        );
    }
});
