//! Normalized divisor and its precomputed multiples.

use super::{digit::Digit, remainder::REMAINDER_BITS, sign_extend};
use crate::LeadingSignBits;

/// Divisor magnitude shifted so that its leading one sits at bit 31, along
/// with everything the recurrence derives from it once per operation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct NormalizedDivisor {
    /// `|divisor| << shift`, in `[2^31, 2^32)`.
    value: i64,

    /// Normalization shift, in `[0, 31]`.
    shift: u32,

    /// Vector fed to the carry-save adder for each digit, indexed by
    /// [`Digit::index`]. Positive digits hold the one's complement of the
    /// multiple; the missing `+1` is injected into the carry vector.
    multiples: [i64; 5],

    /// Selection bounds `[-3d, -d, d, 3d]`, compared against twice the
    /// remainder estimate.
    bounds: [i64; 4],
}

impl NormalizedDivisor {
    /// Normalize a non-zero divisor magnitude.
    pub(crate) fn new(magnitude: u32) -> Self {
        debug_assert_ne!(magnitude, 0);

        let magnitude = i64::from(magnitude);
        let shift = magnitude.leading_sign_bits() - 31;
        let value = magnitude << shift;
        let double = value << 1;

        let multiples = [
            double,
            value,
            0,
            sign_extend(!value, REMAINDER_BITS),
            sign_extend(!double, REMAINDER_BITS),
        ];

        Self {
            value,
            shift,
            multiples,
            bounds: [-3 * value, -value, value, 3 * value],
        }
    }

    /// Normalized divisor value.
    #[inline]
    pub(crate) const fn value(&self) -> i64 {
        self.value
    }

    /// Normalization shift applied to both operands.
    #[inline]
    pub(crate) const fn shift(&self) -> u32 {
        self.shift
    }

    /// Carry-save addend that subtracts `digit × divisor`.
    #[inline]
    pub(crate) const fn multiple(&self, digit: Digit) -> i64 {
        self.multiples[digit.index()]
    }

    /// Bounds for [`Digit::select`].
    #[inline]
    pub(crate) const fn bounds(&self) -> &[i64; 4] {
        &self.bounds
    }
}
