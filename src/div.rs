//! Radix-4 digit-recurrence divider.

pub(crate) mod digit;
mod divisor;
mod remainder;

use self::{
    digit::Digit,
    divisor::NormalizedDivisor,
    remainder::{ESTIMATE_BITS, PartialRemainder, REMAINDER_BITS},
};
use crate::Engine;
use subtle::{Choice, ConditionallySelectable, CtOption};

/// Sign-extend the low `bits` bits of `value`.
#[inline(always)]
pub(crate) const fn sign_extend(value: i64, bits: u32) -> i64 {
    let shift = i64::BITS - bits;
    (value << shift) >> shift
}

/// Operands of a division.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DivRequest {
    /// Dividend.
    pub dividend: i32,
    /// Divisor.
    pub divisor: i32,
}

impl DivRequest {
    /// Create a new division request.
    pub const fn new(dividend: i32, divisor: i32) -> Self {
        Self { dividend, divisor }
    }
}

/// Output registers of the [`Divider`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DivOutput {
    quotient: i32,
    remainder: i32,
    division_by_zero: bool,
}

impl DivOutput {
    /// Quotient, truncated toward zero.
    ///
    /// Don't-care when [`DivOutput::division_by_zero`] is set.
    pub const fn quotient(&self) -> i32 {
        self.quotient
    }

    /// Remainder, with the sign of the dividend.
    ///
    /// Don't-care when [`DivOutput::division_by_zero`] is set.
    pub const fn remainder(&self) -> i32 {
        self.remainder
    }

    /// Was the operation short-circuited by a zero divisor?
    pub const fn division_by_zero(&self) -> bool {
        self.division_by_zero
    }

    /// `(quotient, remainder)`, present only if the divisor was non-zero.
    pub fn checked(&self) -> CtOption<(i32, i32)> {
        CtOption::new(
            (self.quotient, self.remainder),
            !Choice::from(u8::from(self.division_by_zero)),
        )
    }
}

/// Control state of the [`Divider`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum DivState {
    /// Waiting for `start`.
    #[default]
    Idle,
    /// Computing signs, magnitudes and divisor multiples.
    Preparing,
    /// Running recurrence step `step` of [`Divider::ITERATIONS`].
    Iterating {
        /// Zero-based step index.
        step: u32,
    },
    /// Collapsing and correcting the partial remainder.
    PostProcessing,
    /// Applying signs and asserting `done`.
    Finishing,
}

/// 32÷32 signed divider with a redundant partial remainder.
///
/// The divisor is normalized once, then each of [`Divider::ITERATIONS`]
/// steps retires two quotient bits by choosing a digit in `{-2, ..., 2}` from
/// a short estimate of the carry-save remainder. Digits reach the quotient
/// accumulator one step after they are selected. The remainder is collapsed
/// once at the end, where a negative result costs one corrective addition of
/// the divisor.
///
/// Quotients truncate toward zero and remainders take the sign of the
/// dividend, matching [`i32::wrapping_div`] and [`i32::wrapping_rem`]
/// (including `i32::MIN / -1`, which yields `i32::MIN` and `0`).
///
/// A zero divisor asserts `done` on the accepting step with
/// [`DivOutput::division_by_zero`] set; the quotient then reads all ones and
/// the remainder reads the dividend.
#[derive(Clone, Debug, Default)]
pub struct Divider {
    state: DivState,
    request: DivRequest,
    quotient_negative: bool,
    remainder_negative: bool,
    divisor: NormalizedDivisor,
    partial: PartialRemainder,
    accumulator: u32,
    pending: Option<Digit>,
    magnitude: u32,
    output: DivOutput,
    done: bool,
}

impl Divider {
    /// Recurrence steps: two quotient bits each.
    pub const ITERATIONS: u32 = 16;

    /// Width of the carry-save partial remainder registers.
    pub const REMAINDER_BITS: u32 = REMAINDER_BITS;

    /// Width of the estimate the digit selection looks at.
    pub const ESTIMATE_BITS: u32 = ESTIMATE_BITS;

    /// Create a divider in its reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current control state.
    pub fn state(&self) -> DivState {
        self.state
    }

    /// Quotient accumulator contents (magnitude, before sign correction).
    pub fn accumulator(&self) -> u32 {
        self.accumulator
    }

    /// Digit selected on the previous step and not yet accumulated.
    pub fn pending_digit(&self) -> Option<Digit> {
        self.pending
    }

    fn accept(&mut self, request: DivRequest) {
        self.output.division_by_zero = false;
        self.request = request;

        if request.divisor == 0 {
            trace_step!(dividend = request.dividend, "division by zero");
            self.output = DivOutput {
                quotient: -1,
                remainder: request.dividend,
                division_by_zero: true,
            };
            self.done = true;
            return;
        }

        trace_step!(
            dividend = request.dividend,
            divisor = request.divisor,
            "division accepted"
        );
        self.state = DivState::Preparing;
    }

    fn prepare(&mut self) {
        let DivRequest { dividend, divisor } = self.request;

        self.quotient_negative = (dividend < 0) ^ (divisor < 0);
        self.remainder_negative = dividend < 0;
        self.divisor = NormalizedDivisor::new(divisor.unsigned_abs());
        self.partial =
            PartialRemainder::new(u64::from(dividend.unsigned_abs()) << self.divisor.shift());
        self.accumulator = 0;
        self.pending = None;

        self.state = DivState::Iterating { step: 0 };
    }

    fn iterate(&mut self, step: u32) {
        if let Some(digit) = self.pending.take() {
            self.accumulate(digit);
        }

        let (partial, digit) = self.partial.step(&self.divisor);
        self.partial = partial;
        self.pending = Some(digit);
        trace_step!(step, digit = digit.value(), "recurrence step");

        self.state = if step + 1 == Self::ITERATIONS {
            DivState::PostProcessing
        } else {
            DivState::Iterating { step: step + 1 }
        };
    }

    fn post_process(&mut self) {
        if let Some(digit) = self.pending.take() {
            self.accumulate(digit);
        }

        let remainder = self.partial.resolve();
        let overshoot = Choice::from(u8::from(remainder < 0));
        let remainder = i64::conditional_select(
            &remainder,
            &(remainder + self.divisor.value()),
            overshoot,
        );
        self.accumulator = u32::conditional_select(
            &self.accumulator,
            &self.accumulator.wrapping_sub(1),
            overshoot,
        );
        trace_step!(
            corrected = bool::from(overshoot),
            quotient = self.accumulator,
            "remainder collapsed"
        );

        debug_assert!((0..self.divisor.value()).contains(&remainder));
        self.magnitude = (remainder >> self.divisor.shift()) as u32;

        self.state = DivState::Finishing;
    }

    fn finish(&mut self) {
        let quotient = negate_if(self.accumulator, self.quotient_negative);
        let remainder = negate_if(self.magnitude, self.remainder_negative);

        self.output = DivOutput {
            quotient: quotient as i32,
            remainder: remainder as i32,
            division_by_zero: false,
        };
        self.done = true;
        trace_step!(
            quotient = self.output.quotient,
            remainder = self.output.remainder,
            "division done"
        );

        self.state = DivState::Idle;
    }

    fn accumulate(&mut self, digit: Digit) {
        self.accumulator = (self.accumulator << 2).wrapping_add_signed(i32::from(digit.value()));
    }
}

impl Engine for Divider {
    type Request = DivRequest;
    type Output = DivOutput;

    const LATENCY: u32 = Self::ITERATIONS + 4;

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn step(&mut self, start: bool, request: DivRequest) {
        self.done = false;

        match self.state {
            DivState::Idle => {
                if start {
                    self.accept(request);
                }
            }
            DivState::Preparing => self.prepare(),
            DivState::Iterating { step } => self.iterate(step),
            DivState::PostProcessing => self.post_process(),
            DivState::Finishing => self.finish(),
        }
    }

    fn is_idle(&self) -> bool {
        self.state == DivState::Idle
    }

    fn done(&self) -> bool {
        self.done
    }

    fn output(&self) -> DivOutput {
        self.output
    }
}

fn negate_if(magnitude: u32, negative: bool) -> u32 {
    u32::conditional_select(
        &magnitude,
        &magnitude.wrapping_neg(),
        Choice::from(u8::from(negative)),
    )
}

#[cfg(test)]
mod tests {
    use super::{DivRequest, DivState, Divider, sign_extend};
    use crate::{Digit, Engine};

    fn divide(dividend: i32, divisor: i32) -> (i32, i32) {
        let out = Divider::new()
            .execute(DivRequest::new(dividend, divisor))
            .unwrap();
        assert!(!out.division_by_zero());
        (out.quotient(), out.remainder())
    }

    #[test]
    fn sign_extend_low_bits() {
        assert_eq!(sign_extend(0x1ff, 9), -1);
        assert_eq!(sign_extend(0x0ff, 9), 255);
        assert_eq!(sign_extend(1 << 35, 36), -(1 << 35));
    }

    #[test]
    fn signs() {
        assert_eq!(divide(100, 10), (10, 0));
        assert_eq!(divide(105, -10), (-10, 5));
        assert_eq!(divide(-105, 10), (-10, -5));
        assert_eq!(divide(-105, -10), (10, -5));
    }

    #[test]
    fn extremes() {
        assert_eq!(divide(i32::MIN, -1), (i32::MIN, 0));
        assert_eq!(divide(i32::MIN, 1), (i32::MIN, 0));
        assert_eq!(divide(i32::MIN, i32::MIN), (1, 0));
        assert_eq!(divide(i32::MAX, i32::MIN), (0, i32::MAX));
        assert_eq!(divide(i32::MIN, i32::MAX), (-1, -1));
        assert_eq!(divide(i32::MAX, 1), (i32::MAX, 0));
        assert_eq!(divide(0, i32::MIN), (0, 0));
    }

    #[test]
    fn state_sequence() {
        let mut divider = Divider::new();
        let request = DivRequest::new(7, 2);

        divider.step(true, request);
        assert_eq!(divider.state(), DivState::Preparing);
        assert!(!divider.done());

        divider.step(false, request);
        assert_eq!(divider.state(), DivState::Iterating { step: 0 });

        for step in 1..Divider::ITERATIONS {
            divider.step(false, request);
            assert_eq!(divider.state(), DivState::Iterating { step });
        }

        divider.step(false, request);
        assert_eq!(divider.state(), DivState::PostProcessing);

        divider.step(false, request);
        assert_eq!(divider.state(), DivState::Finishing);
        assert!(!divider.done());

        divider.step(false, request);
        assert_eq!(divider.state(), DivState::Idle);
        assert!(divider.done());
        assert_eq!(divider.output().quotient(), 3);
        assert_eq!(divider.output().remainder(), 1);

        divider.step(false, request);
        assert!(!divider.done());
        assert_eq!(divider.output().quotient(), 3);
    }

    #[test]
    fn digit_reaches_accumulator_one_step_later() {
        let mut divider = Divider::new();
        // the leading digit of 2^31 / 1 is +2: shifted remainder 2 vs divisor 1
        let request = DivRequest::new(i32::MIN, 1);

        divider.step(true, request);
        divider.step(false, request);
        assert_eq!(divider.pending_digit(), None);

        divider.step(false, request);
        let first = divider.pending_digit().unwrap();
        assert_eq!(divider.accumulator(), 0);

        divider.step(false, request);
        assert_eq!(
            divider.accumulator(),
            0u32.wrapping_add_signed(i32::from(first.value()))
        );
        assert!(divider.pending_digit().is_some());
    }

    #[test]
    fn division_by_zero_same_step() {
        let mut divider = Divider::new();
        divider.step(true, DivRequest::new(100, 0));

        assert!(divider.done());
        assert!(divider.is_idle());
        assert!(divider.output().division_by_zero());
        assert!(bool::from(divider.output().checked().is_none()));
    }

    #[test]
    fn error_flag_clears_on_next_start() {
        let mut divider = Divider::new();
        assert!(divider.execute(DivRequest::new(1, 0)).unwrap().division_by_zero());

        let mut request = DivRequest::new(9, 3);
        divider.step(true, request);
        assert!(!divider.output().division_by_zero());

        request.divisor = 0;
        while !divider.done() {
            divider.step(false, request);
        }
        assert_eq!(divider.output().checked().unwrap(), (3, 0));
    }

    #[test]
    fn start_while_busy_is_ignored() {
        let mut divider = Divider::new();
        divider.step(true, DivRequest::new(1000, 7));

        let intruder = DivRequest::new(-1, 0);
        for _ in 1..Divider::LATENCY {
            divider.step(true, intruder);
        }

        assert!(divider.done());
        assert_eq!(divider.output().checked().unwrap(), (142, 6));
    }

    #[test]
    fn reset_aborts() {
        let mut divider = Divider::new();
        let request = DivRequest::new(1000, 7);
        for _ in 0..5 {
            divider.step(true, request);
        }
        assert!(!divider.is_idle());

        divider.reset();
        assert!(divider.is_idle());
        assert_eq!(divider.state(), DivState::Idle);
        assert_eq!(divider.accumulator(), 0);
        assert_eq!(divider.pending_digit(), None);
        assert_eq!(divider.output(), Default::default());
    }

    #[test]
    fn leading_digit_uses_full_digit_set() {
        // 2^31 normalizes to 2^62 against 2^31: first estimate sits at twice the divisor
        let mut divider = Divider::new();
        let request = DivRequest::new(i32::MIN, 1);
        divider.step(true, request);
        divider.step(false, request);
        divider.step(false, request);
        assert_eq!(divider.pending_digit(), Some(Digit::Two));
    }
}
