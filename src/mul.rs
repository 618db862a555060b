//! Radix-4 Booth multiplier.

pub mod booth;
pub(crate) mod tree;

use self::{booth::PARTIAL_PRODUCTS, tree::ReductionTree};
use crate::{CarrySave, Engine, LeadingSignBits};

/// Operands of a multiplication.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MulRequest {
    /// Multiplicand `A`, latched when `start` is accepted.
    pub multiplicand: i32,
    /// Multiplier `B`, recoded on the accepting step.
    pub multiplier: i32,
}

impl MulRequest {
    /// Create a new multiplication request.
    pub const fn new(multiplicand: i32, multiplier: i32) -> Self {
        Self {
            multiplicand,
            multiplier,
        }
    }
}

/// Output registers of the [`Multiplier`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MulOutput {
    product: i64,
    leading_bits_a: u8,
    leading_bits_b: u8,
}

impl MulOutput {
    /// Exact 64-bit product.
    pub const fn product(&self) -> i64 {
        self.product
    }

    /// Redundant sign bits of the multiplicand (`0..=31`). Advisory only.
    pub const fn leading_bits_a(&self) -> u8 {
        self.leading_bits_a
    }

    /// Redundant sign bits of the multiplier (`0..=31`). Advisory only.
    pub const fn leading_bits_b(&self) -> u8 {
        self.leading_bits_b
    }
}

/// Control state of the [`Multiplier`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum MulState {
    /// Waiting for a rising edge on `start`.
    #[default]
    Idle,
    /// Holding the reduced pair for the final addition.
    Busy,
}

/// 32×32→64 signed multiplier.
///
/// On the step that sees a rising edge of `start` while idle, the
/// multiplicand is latched, the multiplier is Booth-recoded into
/// [`PARTIAL_PRODUCTS`] partial products and the [`ReductionTree`] output is
/// captured. On the next step the captured pair is added with full carry
/// propagation and `done` is asserted.
#[derive(Clone, Debug, Default)]
pub struct Multiplier {
    state: MulState,
    start_prev: bool,
    multiplicand: i32,
    reduced: CarrySave<i64>,
    reduction_valid: bool,
    leading_bits_b: u8,
    output: MulOutput,
    done: bool,
}

impl Multiplier {
    /// Partial products generated per operation.
    pub const PARTIAL_PRODUCTS: usize = PARTIAL_PRODUCTS;

    /// Create a multiplier in its reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current control state.
    pub fn state(&self) -> MulState {
        self.state
    }

    /// Pair captured from the reduction tree, if one is waiting for the final
    /// addition.
    pub fn reduced(&self) -> Option<CarrySave<i64>> {
        self.reduction_valid.then_some(self.reduced)
    }

    fn latch(&mut self, request: MulRequest) {
        self.multiplicand = request.multiplicand;

        let partials = booth::partial_products(self.multiplicand, request.multiplier);
        self.reduced = ReductionTree::<PARTIAL_PRODUCTS>::reduce(partials);
        self.reduction_valid = true;
        self.leading_bits_b = leading_bits(request.multiplier);
        trace_step!(
            multiplicand = request.multiplicand,
            multiplier = request.multiplier,
            "multiplication accepted"
        );

        self.state = MulState::Busy;
    }

    fn finish(&mut self) {
        debug_assert!(self.reduction_valid);

        self.output = MulOutput {
            product: self.reduced.resolve(),
            leading_bits_a: leading_bits(self.multiplicand),
            leading_bits_b: self.leading_bits_b,
        };
        self.reduction_valid = false;
        self.done = true;
        trace_step!(product = self.output.product, "multiplication done");

        self.state = MulState::Idle;
    }
}

impl Engine for Multiplier {
    type Request = MulRequest;
    type Output = MulOutput;

    const LATENCY: u32 = 2;

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self, start: bool, request: MulRequest) {
        self.done = false;

        let rising = start && !self.start_prev;
        self.start_prev = start;

        match self.state {
            MulState::Idle => {
                if rising {
                    self.latch(request);
                }
            }
            MulState::Busy => self.finish(),
        }
    }

    fn is_idle(&self) -> bool {
        self.state == MulState::Idle
    }

    fn accepts_start(&self) -> bool {
        self.is_idle() && !self.start_prev
    }

    fn done(&self) -> bool {
        self.done
    }

    fn output(&self) -> MulOutput {
        self.output
    }
}

fn leading_bits(value: i32) -> u8 {
    // at most 31: fits the 5-bit output
    value.leading_sign_bits() as u8
}
