//! Leading-sign-bit counters.

use crate::LeadingSignBits;

impl LeadingSignBits for i32 {
    #[inline(always)]
    fn leading_sign_bits(self) -> u32 {
        // Folding the sign into the value turns sign-bit runs into zero runs.
        (self ^ (self >> (i32::BITS - 1))).leading_zeros() - 1
    }
}

impl LeadingSignBits for i64 {
    #[inline(always)]
    fn leading_sign_bits(self) -> u32 {
        (self ^ (self >> (i64::BITS - 1))).leading_zeros() - 1
    }
}

#[cfg(test)]
mod tests {
    use crate::LeadingSignBits;

    #[test]
    fn i32_extremes() {
        assert_eq!(0i32.leading_sign_bits(), 31);
        assert_eq!((-1i32).leading_sign_bits(), 31);
        assert_eq!(i32::MAX.leading_sign_bits(), 0);
        assert_eq!(i32::MIN.leading_sign_bits(), 0);
    }

    #[test]
    fn i32_small_values() {
        assert_eq!(1i32.leading_sign_bits(), 30);
        assert_eq!((-2i32).leading_sign_bits(), 30);
        assert_eq!(12i32.leading_sign_bits(), 27);
        assert_eq!((-9i32).leading_sign_bits(), 27);
        assert_eq!(0x4000_0000i32.leading_sign_bits(), 0);
        assert_eq!((-0x4000_0000i32).leading_sign_bits(), 1);
    }

    #[test]
    fn i32_fits_five_bits() {
        for value in [0, 1, -1, 7, -8, 1 << 20, i32::MIN, i32::MAX] {
            assert!(value.leading_sign_bits() < 32);
        }
    }

    #[test]
    fn i64_matches_widened_i32() {
        for value in [0i32, 1, -1, 12, -9, i32::MIN, i32::MAX] {
            assert_eq!(
                i64::from(value).leading_sign_bits(),
                value.leading_sign_bits() + 32
            );
        }
    }

    #[test]
    fn i64_divisor_magnitudes() {
        assert_eq!(1i64.leading_sign_bits(), 62);
        assert_eq!((1i64 << 31).leading_sign_bits(), 31);
        assert_eq!(i64::MIN.leading_sign_bits(), 0);
    }
}
