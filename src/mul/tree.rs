//! Carry-save reduction tree.

use crate::{CarrySave, carry_save_add};
use core::iter;
use num_traits::PrimInt;

/// Fixed-depth network of 3:2 carry-save adders collapsing `N` vectors into
/// a [`CarrySave`] pair.
///
/// Every level combines consecutive groups of three vectors, emitting each
/// group's sum and carry in order, and passes any leftover vectors through
/// unchanged. For 16 inputs the widths are `16, 11, 8, 6, 4, 3, 2`.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReductionTree<const N: usize>;

impl<const N: usize> ReductionTree<N> {
    /// Number of 3:2 levels between the inputs and the final pair.
    pub const LEVELS: usize = levels(N);

    /// Number of vectors at each level, starting with the inputs.
    pub fn widths() -> impl Iterator<Item = usize> {
        iter::successors(Some(N), |&width| (width > 2).then(|| next_width(width)))
    }

    /// Reduce `vectors` to two whose wrapping sum equals the wrapping sum of
    /// the inputs.
    pub fn reduce<T: PrimInt>(vectors: [T; N]) -> CarrySave<T> {
        let mut level = vectors;
        let mut width = N;

        while width > 2 {
            let mut next = [T::zero(); N];
            width = reduce_level(&level[..width], &mut next);
            level = next;
        }

        CarrySave {
            sum: level.first().copied().unwrap_or_else(T::zero),
            carry: level.get(1).copied().unwrap_or_else(T::zero),
        }
    }
}

/// One level of the tree. Returns the number of vectors written to `out`.
fn reduce_level<T: PrimInt>(inputs: &[T], out: &mut [T]) -> usize {
    let mut written = 0;

    let mut groups = inputs.chunks_exact(3);
    for group in groups.by_ref() {
        let pair = carry_save_add(group[0], group[1], group[2]);
        out[written] = pair.sum;
        out[written + 1] = pair.carry;
        written += 2;
    }

    for &leftover in groups.remainder() {
        out[written] = leftover;
        written += 1;
    }

    written
}

const fn next_width(width: usize) -> usize {
    (width / 3) * 2 + width % 3
}

const fn levels(mut width: usize) -> usize {
    let mut levels = 0;
    while width > 2 {
        width = next_width(width);
        levels += 1;
    }
    levels
}
