//! Redundant partial remainder of the digit recurrence.

use super::{digit::Digit, divisor::NormalizedDivisor, sign_extend};
use crate::CarrySave;

/// Width of the sum and carry registers: 32 bits plus 4 guard bits.
pub(crate) const REMAINDER_BITS: u32 = 36;

/// Width of the truncated estimate used for digit selection.
pub(crate) const ESTIMATE_BITS: u32 = 9;

/// Weight of the least significant bit seen by the estimate.
const ESTIMATE_SHIFT: u32 = REMAINDER_BITS - ESTIMATE_BITS;

/// Partial remainder `w·2^64 = (sum + carry)·2^32 + low`.
///
/// The upper part is kept as a carry-save pair of [`REMAINDER_BITS`]-bit
/// values that is never collapsed mid-recurrence. `low` holds the dividend
/// bits not yet shifted in; subtracting a multiple of the divisor never
/// touches them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PartialRemainder {
    pair: CarrySave<i64>,
    low: u32,
}

impl PartialRemainder {
    /// Initial remainder for a normalized dividend magnitude.
    pub(crate) fn new(dividend: u64) -> Self {
        Self {
            pair: CarrySave::from_value((dividend >> 32) as i64),
            low: dividend as u32,
        }
    }

    /// One radix-4 step: shift in two dividend bits, select a digit from the
    /// truncated estimate and subtract its multiple of the divisor.
    pub(crate) fn step(&self, divisor: &NormalizedDivisor) -> (Self, Digit) {
        let shifted = self.pair.shl(2);
        let shifted = truncate(CarrySave {
            sum: shifted.sum | i64::from(self.low >> 30),
            carry: shifted.carry,
        });

        let digit = Digit::select(estimate(&shifted), divisor.bounds());

        let mut next = shifted.accumulate(divisor.multiple(digit));
        // the carry vector's LSB is always free after the shift
        next.carry |= i64::from(digit.is_positive());

        let remainder = Self {
            pair: truncate(next),
            low: self.low << 2,
        };

        (remainder, digit)
    }

    /// Collapse the pair with one carry-propagating addition.
    pub(crate) fn resolve(&self) -> i64 {
        sign_extend(self.pair.resolve(), REMAINDER_BITS)
    }

    /// Dividend bits not yet consumed.
    #[cfg(test)]
    pub(crate) const fn low(&self) -> u32 {
        self.low
    }
}

/// Sum of the top [`ESTIMATE_BITS`] of both vectors, scaled back to full
/// weight. Underestimates the pair by less than `2^(ESTIMATE_SHIFT + 1)`.
fn estimate(pair: &CarrySave<i64>) -> i64 {
    let top = (pair.sum >> ESTIMATE_SHIFT) + (pair.carry >> ESTIMATE_SHIFT);
    sign_extend(top, ESTIMATE_BITS) << ESTIMATE_SHIFT
}

fn truncate(pair: CarrySave<i64>) -> CarrySave<i64> {
    CarrySave {
        sum: sign_extend(pair.sum, REMAINDER_BITS),
        carry: sign_extend(pair.carry, REMAINDER_BITS),
    }
}
