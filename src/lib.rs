//! Cycle-timed models of fixed-width signed integer execution units.
//!
//! # About
//! This library models two arithmetic units the way they behave in hardware
//! rather than as instantaneous function calls: each one is a finite-state
//! engine advanced one discrete step at a time, with an explicit
//! `start`/`done` handshake.
//!
//! - [`Divider`]: a 32÷32 radix-4 digit-recurrence divider producing a
//!   truncated quotient and a remainder whose sign follows the dividend. The
//!   partial remainder is held in carry-save form for the whole recurrence and
//!   collapsed exactly once.
//! - [`Multiplier`]: a 32×32 radix-4 Booth multiplier producing an exact
//!   64-bit product from 16 partial products collapsed by a fixed six-level
//!   carry-save [`ReductionTree`].
//!
//! Both engines share the [`carry_save_add`] primitive and the
//! [`LeadingSignBits`] counter.
//!
//! # Handshake
//! A caller presents `start` together with an operand pair. An idle engine
//! latches the operands, computes for a fixed number of steps
//! ([`Engine::LATENCY`]) and then raises `done` for exactly one step with its
//! outputs valid. A `start` presented while the engine is busy is ignored.
//! [`Engine::reset`] is the only way to abort an operation in flight.
//!
//! ```
//! use arith_engines::{DivRequest, Divider, Engine};
//!
//! let mut divider = Divider::new();
//! let out = divider.execute(DivRequest::new(-105, 10)).unwrap();
//! assert_eq!((out.quotient(), out.remainder()), (-10, -5));
//! ```
//!
//! # Status
//! This library is new and unaudited. Results are checked against Rust's own
//! `wrapping_div`, `wrapping_rem` and widening multiplication.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[macro_use]
mod macros;

mod csa;
mod div;
mod error;
mod lzc;
mod mul;
mod traits;

#[cfg(feature = "rand_core")]
mod rand;

pub use crate::{
    csa::{CarrySave, carry_save_add},
    div::{DivOutput, DivRequest, DivState, Divider, digit::Digit},
    error::{Error, Result},
    mul::{MulOutput, MulRequest, MulState, Multiplier, booth, tree::ReductionTree},
    traits::*,
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;
