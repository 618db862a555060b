//! Radix-4 quotient digits and their selection rule.

use core::fmt;

/// A signed quotient digit from the redundant radix-4 set `{-2, -1, 0, 1, 2}`.
///
/// With digits bounded by 2 the partial remainder stays within `2/3` of the
/// divisor, and the regions in which two neighbouring digits are both valid
/// overlap by `1/3` of the divisor. That overlap is what lets the selection
/// work from a truncated estimate of the remainder.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Digit {
    /// `-2`
    MinusTwo = -2,
    /// `-1`
    MinusOne = -1,
    /// `0`
    #[default]
    Zero = 0,
    /// `+1`
    One = 1,
    /// `+2`
    Two = 2,
}

impl Digit {
    /// All digits in increasing order.
    pub const ALL: [Digit; 5] = [
        Digit::MinusTwo,
        Digit::MinusOne,
        Digit::Zero,
        Digit::One,
        Digit::Two,
    ];

    /// Signed value of this digit.
    #[inline(always)]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Is this digit strictly positive?
    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.value() > 0
    }

    /// Position of this digit in [`Digit::ALL`].
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        (self.value() + 2) as usize
    }

    /// Choose the digit for a shifted partial remainder estimate.
    ///
    /// `bounds` holds `[-3d, -d, d, 3d]` for the normalized divisor `d`, and
    /// is compared against twice the estimate: the digit `k` is picked when
    /// `(k - 1/2)·d <= estimate < (k + 1/2)·d`.
    #[inline]
    pub(crate) fn select(estimate: i64, bounds: &[i64; 4]) -> Self {
        let twice = estimate << 1;
        let rank = bounds.iter().filter(|&&bound| twice >= bound).count();
        Self::ALL[rank]
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.value())
    }
}
