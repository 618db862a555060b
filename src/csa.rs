//! Carry-save (redundant) arithmetic.

use num_traits::{PrimInt, WrappingAdd};

/// A number held as two same-width vectors whose ordinary sum is its value.
///
/// Updates through [`carry_save_add`] never propagate a carry across the
/// word; the value is only collapsed by [`CarrySave::resolve`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CarrySave<T> {
    /// Bitwise sum vector.
    pub sum: T,

    /// Carry vector, already shifted into the position it adds at.
    pub carry: T,
}

impl<T: PrimInt> CarrySave<T> {
    /// Redundant form of a plain value: the value as sum, zero carry.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self {
            sum: value,
            carry: T::zero(),
        }
    }

    /// Shift both vectors left by `shift` bits.
    #[inline]
    pub fn shl(&self, shift: usize) -> Self {
        Self {
            sum: self.sum << shift,
            carry: self.carry << shift,
        }
    }

    /// Fold a third vector into this pair with one carry-save step.
    #[inline]
    pub fn accumulate(&self, addend: T) -> Self {
        carry_save_add(self.sum, self.carry, addend)
    }
}

impl<T: PrimInt + WrappingAdd> CarrySave<T> {
    /// Collapse the pair with one carry-propagating addition.
    ///
    /// The addition wraps at the width of `T`.
    #[inline]
    pub fn resolve(&self) -> T {
        self.sum.wrapping_add(&self.carry)
    }
}

/// 3:2 carry-save adder.
///
/// Returns `a ^ b ^ c` as the sum and the bitwise majority of the inputs
/// shifted left by one as the carry. The carry out of the top bit is
/// discarded: callers must leave enough guard bits above the values they
/// care about.
#[inline(always)]
pub fn carry_save_add<T: PrimInt>(a: T, b: T, c: T) -> CarrySave<T> {
    CarrySave {
        sum: a ^ b ^ c,
        carry: ((a & b) | (a & c) | (b & c)) << 1,
    }
}
