//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use arith_engines::Engine;

/// Steps to wait for `done` before declaring the engine hung.
pub const TIMEOUT: u32 = 64;

/// Operand values at and around every boundary the engines care about.
pub const EDGE_VALUES: &[i32] = &[
    0,
    1,
    -1,
    2,
    -2,
    3,
    -3,
    7,
    -7,
    10,
    -10,
    0x5555_5555,
    -0x5555_5555,
    0x4000_0000,
    -0x4000_0000,
    0x4000_0001,
    0x3fff_ffff,
    i32::MAX,
    i32::MAX - 1,
    i32::MIN,
    i32::MIN + 1,
];

/// Drive one operation the way an external harness would: pulse `start`,
/// then poll `done` until it rises or [`TIMEOUT`] expires.
///
/// Returns the output together with the number of steps taken, counting the
/// accepting step.
pub fn drive<E: Engine>(engine: &mut E, request: E::Request) -> (E::Output, u32) {
    assert!(engine.is_idle(), "engine busy before start");

    engine.step(true, request);
    let mut steps = 1;

    while !engine.done() {
        assert!(steps < TIMEOUT, "engine hung after {steps} steps");
        engine.step(false, request);
        steps += 1;
    }

    (engine.output(), steps)
}

/// Like [`drive`], but presents `intruder` with `start` held high on every
/// step after the first.
pub fn drive_with_intruder<E: Engine>(
    engine: &mut E,
    request: E::Request,
    intruder: E::Request,
) -> E::Output {
    engine.step(true, request);
    let mut steps = 1;

    while !engine.done() {
        assert!(steps < TIMEOUT, "engine hung after {steps} steps");
        engine.step(true, intruder);
        steps += 1;
    }

    engine.output()
}
