//! Random number generator support

use crate::{DivRequest, MulRequest, Random};
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl Random for DivRequest {
    /// Uniform operands. The divisor may be zero.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_u32() as i32, rng.next_u32() as i32)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "rand_core")))]
impl Random for MulRequest {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_u32() as i32, rng.next_u32() as i32)
    }
}
