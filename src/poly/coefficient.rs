use std::fmt::{Debug, Display};
use std::ops::{AddAssign, MulAssign, SubAssign};

use num_traits::{PrimInt, Signed};

/// Exponent of a single term.
pub type Power = usize;

/// Coefficient domain of a [`SparsePolynomial`](super::sparse_poly::SparsePolynomial).
///
/// Any signed primitive integer qualifies. Division is the truncating (toward zero)
/// integer division of the underlying type, and overflow follows the usual Rust
/// integer semantics.
pub trait Coefficient:
    'static
    + Sized
    + PrimInt
    + Signed
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + Sync
    + Send
    + Display
    + Debug
{
}

impl<T> Coefficient for T where
    T: 'static
        + PrimInt
        + Signed
        + AddAssign
        + SubAssign
        + MulAssign
        + Sync
        + Send
        + Display
        + Debug
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::sparse_poly::SparsePolynomial;

    fn square_of_binomial<C: Coefficient>() -> Vec<(Power, C)> {
        let one = C::one();
        let p = SparsePolynomial::from_terms([(1, one), (0, one)]);
        (&p * &p).canonical_form()
    }

    #[test]
    fn every_signed_primitive_is_a_coefficient() {
        assert_eq!(square_of_binomial::<i8>(), vec![(2, 1), (1, 2), (0, 1)]);
        assert_eq!(square_of_binomial::<i16>(), vec![(2, 1), (1, 2), (0, 1)]);
        assert_eq!(square_of_binomial::<i32>(), vec![(2, 1), (1, 2), (0, 1)]);
        assert_eq!(square_of_binomial::<i64>(), vec![(2, 1), (1, 2), (0, 1)]);
        assert_eq!(square_of_binomial::<i128>(), vec![(2, 1), (1, 2), (0, 1)]);
        assert_eq!(square_of_binomial::<isize>(), vec![(2, 1), (1, 2), (0, 1)]);
    }
}
