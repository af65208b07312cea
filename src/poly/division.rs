use std::collections::HashMap;
use std::ops::Rem;

use num_traits::Zero;

use super::coefficient::Coefficient;
use super::sparse_poly::{add_term, SparsePolynomial};
use crate::utils::errors::PolyError;

impl<C: Coefficient> SparsePolynomial<C> {
    /// Long division of `self` by `divisor`, returning `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder`.
    ///
    /// Each step divides the leading coefficients with truncation toward zero. Division
    /// stops once the remainder's degree drops below the divisor's, or once the leading
    /// coefficients no longer divide to a nonzero quotient term. For a divisor whose
    /// leading coefficient is not a unit, the remainder may therefore keep a degree at or
    /// above the divisor's.
    #[tracing::instrument(skip_all, name = "SparsePolynomial::checked_div_rem")]
    pub fn checked_div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let (divisor_power, divisor_coeff) =
            divisor.leading_term().ok_or(PolyError::DivisionByZero)?;

        let mut quotient = HashMap::new();
        let mut remainder = self.clone();
        while let Some((power, coeff)) = remainder.leading_term() {
            if power < divisor_power {
                break;
            }
            let step_coeff = coeff / divisor_coeff;
            if step_coeff.is_zero() {
                tracing::trace!(power, "leading coefficient not divisible, stopping");
                break;
            }
            let step_power = power - divisor_power;
            tracing::trace!(step_power, %step_coeff, "division step");

            let step = Self::monomial(step_power, step_coeff);
            remainder -= &step.mul_sequential(divisor);
            add_term(&mut quotient, step_power, step_coeff);
        }

        Ok((Self::from_accumulated(quotient), remainder.normalized()))
    }

    /// Remainder of [`Self::checked_div_rem`].
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// # Panics
    ///
    /// Panics if `divisor` has no nonzero term.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        match self.checked_div_rem(divisor) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if the divisor has no nonzero term.
impl<C: Coefficient> Rem<&SparsePolynomial<C>> for &SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn rem(self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
        self.div_rem(rhs).1
    }
}

impl<C: Coefficient> Rem<&SparsePolynomial<C>> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn rem(self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
        &self % rhs
    }
}

impl<C: Coefficient> Rem<SparsePolynomial<C>> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn rem(self, rhs: SparsePolynomial<C>) -> SparsePolynomial<C> {
        &self % &rhs
    }
}

impl<C: Coefficient> Rem<SparsePolynomial<C>> for &SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn rem(self, rhs: SparsePolynomial<C>) -> SparsePolynomial<C> {
        self % &rhs
    }
}
