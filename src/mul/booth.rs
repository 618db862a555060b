//! Radix-4 Booth recoding.
//!
//! The multiplier is extended with a zero below its least significant bit and
//! read as 16 overlapping 3-bit windows with a stride of two. Each window
//! selects a signed multiple of the multiplicand:
//!
//! | window | multiple |
//! |--------|----------|
//! | `000`  | `0`      |
//! | `001`  | `+1`     |
//! | `010`  | `+1`     |
//! | `011`  | `+2`     |
//! | `100`  | `-2`     |
//! | `101`  | `-1`     |
//! | `110`  | `-1`     |
//! | `111`  | `0`      |

use crate::Digit;
use subtle::{Choice, ConditionallySelectable};

/// Number of partial products for a 32-bit multiplier.
pub const PARTIAL_PRODUCTS: usize = 16;

const WINDOWS: [Digit; 8] = [
    Digit::Zero,
    Digit::One,
    Digit::One,
    Digit::Two,
    Digit::MinusTwo,
    Digit::MinusOne,
    Digit::MinusOne,
    Digit::Zero,
];

/// Recode `multiplier` into one signed multiple per window, least
/// significant window first.
pub fn recode(multiplier: i32) -> [Digit; PARTIAL_PRODUCTS] {
    // Sign-extending before the shift replicates the sign above bit 31.
    let extended = (i64::from(multiplier) << 1) as u64;
    core::array::from_fn(|i| WINDOWS[((extended >> (2 * i)) & 0b111) as usize])
}

/// Partial product `digit × multiplicand`, sign-extended to 64 bits and
/// shifted to window `position`.
///
/// Negative multiples are formed as the bitwise complement plus one.
pub fn partial_product(multiplicand: i32, digit: Digit, position: usize) -> i64 {
    let multiplicand = i64::from(multiplicand);
    let magnitude = match digit {
        Digit::Zero => 0,
        Digit::One | Digit::MinusOne => multiplicand,
        Digit::Two | Digit::MinusTwo => multiplicand << 1,
    };
    let negative = Choice::from(u8::from(digit.value() < 0));
    let multiple = i64::conditional_select(&magnitude, &(!magnitude).wrapping_add(1), negative);

    multiple << (2 * position)
}

/// All partial products of `multiplicand × multiplier`.
pub fn partial_products(multiplicand: i32, multiplier: i32) -> [i64; PARTIAL_PRODUCTS] {
    let digits = recode(multiplier);
    core::array::from_fn(|i| partial_product(multiplicand, digits[i], i))
}
