/// Derives the owned/borrowed combinations of a binary operator from its
/// `Op<&SparsePolynomial<C>> for SparsePolynomial<C>` implementation.
macro_rules! forward_owned_binop {
    (impl $trait:ident, $method:ident) => {
        impl<C: Coefficient> $trait<SparsePolynomial<C>> for SparsePolynomial<C> {
            type Output = SparsePolynomial<C>;

            #[inline]
            fn $method(self, rhs: SparsePolynomial<C>) -> SparsePolynomial<C> {
                $trait::$method(self, &rhs)
            }
        }

        impl<C: Coefficient> $trait<&SparsePolynomial<C>> for &SparsePolynomial<C> {
            type Output = SparsePolynomial<C>;

            #[inline]
            fn $method(self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
                $trait::$method(self.clone(), rhs)
            }
        }

        impl<C: Coefficient> $trait<SparsePolynomial<C>> for &SparsePolynomial<C> {
            type Output = SparsePolynomial<C>;

            #[inline]
            fn $method(self, rhs: SparsePolynomial<C>) -> SparsePolynomial<C> {
                $trait::$method(self.clone(), &rhs)
            }
        }
    };
}

pub mod coefficient;
pub mod division;
pub mod mul;
pub mod sparse_poly;
