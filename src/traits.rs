//! Traits provided by this crate

use crate::{Error, Result};
use core::fmt::Debug;

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// A cycle-timed execution unit driven through a `start`/`done` handshake.
///
/// All state advances happen in [`Engine::step`], once per discrete step.
/// Outputs are registered: they change only inside `step` and persist until
/// the next accepted operation overwrites them.
pub trait Engine {
    /// Operand pair sampled when `start` is accepted.
    type Request: Copy + Debug;

    /// Output register file, valid on the step `done` is asserted.
    type Output: Copy + Debug;

    /// Steps from the one that accepts `start` to the one that asserts
    /// `done`, inclusive.
    const LATENCY: u32;

    /// Return to idle, clearing every register and flag.
    fn reset(&mut self);

    /// Advance one step with the given `start` level and operands.
    ///
    /// A `start` presented while the engine is busy is ignored.
    fn step(&mut self, start: bool, request: Self::Request);

    /// Is the engine able to accept a new operation?
    fn is_idle(&self) -> bool;

    /// Was `done` asserted by the most recent step?
    fn done(&self) -> bool;

    /// Current contents of the output registers.
    fn output(&self) -> Self::Output;

    /// Whether a `start` presented on the next step would be accepted.
    ///
    /// Edge-triggered engines return `false` while `start` is still held high
    /// from an earlier step.
    fn accepts_start(&self) -> bool {
        self.is_idle()
    }

    /// Drive one complete operation: assert `start` for one step, then poll
    /// `done` for at most `max_steps` steps in total.
    ///
    /// If `start` was left asserted by an earlier caller, one step with
    /// `start` deasserted is presented first so the engine sees a fresh edge.
    /// That step does not count against `max_steps`.
    ///
    /// Returns [`Error::Busy`] if an operation is already in flight and
    /// [`Error::Timeout`] if `done` is not observed in time.
    fn run(&mut self, request: Self::Request, max_steps: u32) -> Result<Self::Output> {
        if !self.is_idle() {
            return Err(Error::Busy);
        }

        if !self.accepts_start() {
            self.step(false, request);
        }

        let mut steps = 0;
        let mut start = true;

        while steps < max_steps {
            self.step(start, request);
            steps += 1;
            start = false;

            if self.done() {
                return Ok(self.output());
            }
        }

        Err(Error::Timeout { steps })
    }

    /// [`Engine::run`] bounded by [`Engine::LATENCY`].
    fn execute(&mut self, request: Self::Request) -> Result<Self::Output> {
        self.run(request, Self::LATENCY)
    }
}

/// Leading-indicator count: how many bits below the sign bit are equal to it.
///
/// This is the number of redundant sign bits in the two's complement
/// representation, so `0` and `-1` report `BITS - 1`.
pub trait LeadingSignBits: Copy {
    /// Count the redundant sign bits of `self`.
    fn leading_sign_bits(self) -> u32;
}

/// Random generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a random value using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}
