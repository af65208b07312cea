use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use itertools::Itertools;
use num_traits::{pow, Zero};

use super::coefficient::{Coefficient, Power};

/// A univariate polynomial with integer coefficients, stored as a map from exponent to
/// coefficient.
///
/// Arithmetic never leaves an entry with a zero coefficient behind, with one exception:
/// the zero polynomial is represented by the single entry `{0 -> 0}`. Entries built
/// through [`SparsePolynomial::from_terms`] are stored as given, explicit zeros included,
/// until an operation touches their slot.
#[derive(Debug, Clone)]
pub struct SparsePolynomial<C: Coefficient = i64> {
    pub(crate) terms: HashMap<Power, C>,
}

impl<C: Coefficient> SparsePolynomial<C> {
    /// The zero polynomial, `{0 -> 0}`.
    pub fn new() -> Self {
        Self {
            terms: HashMap::from([(0, C::zero())]),
        }
    }

    /// Builds a polynomial from `(exponent, coefficient)` pairs. Later pairs overwrite
    /// earlier ones with the same exponent. Zero coefficients are kept.
    pub fn from_terms<I: IntoIterator<Item = (Power, C)>>(terms: I) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    pub fn monomial(power: Power, coeff: C) -> Self {
        Self::from_terms([(power, coeff)])
    }

    pub fn constant(coeff: C) -> Self {
        Self::monomial(0, coeff)
    }

    /// Wraps an accumulator produced by an arithmetic kernel, reinstating `{0 -> 0}` when
    /// every term cancelled.
    pub(crate) fn from_accumulated(terms: HashMap<Power, C>) -> Self {
        if terms.is_empty() {
            Self::new()
        } else {
            Self { terms }
        }
    }

    /// Drops zero entries, falling back to `{0 -> 0}`.
    pub(crate) fn normalized(mut self) -> Self {
        self.terms.retain(|_, coeff| !coeff.is_zero());
        Self::from_accumulated(self.terms)
    }

    /// Number of stored entries, including explicit zeros.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Stored entries in unspecified order, including explicit zeros.
    pub fn terms(&self) -> impl Iterator<Item = (Power, C)> + '_ {
        self.terms.iter().map(|(&power, &coeff)| (power, coeff))
    }

    pub fn coeff(&self, power: Power) -> C {
        self.terms.get(&power).copied().unwrap_or_else(C::zero)
    }

    pub fn is_zero(&self) -> bool {
        self.terms.values().all(|coeff| coeff.is_zero())
    }

    /// Highest-exponent term with a nonzero coefficient.
    pub fn leading_term(&self) -> Option<(Power, C)> {
        self.terms()
            .filter(|(_, coeff)| !coeff.is_zero())
            .max_by_key(|(power, _)| *power)
    }

    /// Highest exponent with a nonzero coefficient, or 0 if there is none.
    pub fn degree(&self) -> Power {
        self.leading_term().map_or(0, |(power, _)| power)
    }

    /// Nonzero terms sorted by strictly descending exponent, or `[(0, 0)]` for the zero
    /// polynomial.
    pub fn canonical_form(&self) -> Vec<(Power, C)> {
        let form: Vec<(Power, C)> = self
            .terms()
            .filter(|(_, coeff)| !coeff.is_zero())
            .sorted_by(|a, b| b.0.cmp(&a.0))
            .collect();
        if form.is_empty() {
            vec![(0, C::zero())]
        } else {
            form
        }
    }

    /// Evaluates the polynomial at `x` with Horner's rule over the canonical form.
    pub fn evaluate(&self, x: C) -> C {
        let form = self.canonical_form();
        let mut prev_power = form[0].0;
        let mut eval = C::zero();
        for (power, coeff) in form {
            eval = eval * pow(x, prev_power - power) + coeff;
            prev_power = power;
        }
        eval * pow(x, prev_power)
    }

    /// Writes the canonical rendering to `out`, followed by a newline.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Writes the canonical rendering to stdout, followed by a newline.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Folds every entry of `rhs` into `self` with `merge`. A zero receiver starts from
    /// an empty map, and a result where everything cancelled becomes `{0 -> 0}`.
    fn merge_poly(&mut self, rhs: &Self, merge: fn(&mut HashMap<Power, C>, Power, C)) {
        if self.is_zero() {
            self.terms.clear();
        }
        for (&power, &coeff) in &rhs.terms {
            merge(&mut self.terms, power, coeff);
        }
        if self.terms.is_empty() {
            self.terms.insert(0, C::zero());
        }
    }
}

/// Folds `coeff` into the `power` slot with `op`, removing the slot if it ends at zero.
fn merge_term<C: Coefficient>(
    terms: &mut HashMap<Power, C>,
    power: Power,
    coeff: C,
    op: impl FnOnce(&mut C, C),
) {
    match terms.entry(power) {
        Entry::Occupied(mut entry) => {
            op(entry.get_mut(), coeff);
            if entry.get().is_zero() {
                entry.remove();
            }
        }
        Entry::Vacant(entry) => {
            let mut value = C::zero();
            op(&mut value, coeff);
            if !value.is_zero() {
                entry.insert(value);
            }
        }
    }
}

#[inline]
pub(crate) fn add_term<C: Coefficient>(terms: &mut HashMap<Power, C>, power: Power, coeff: C) {
    merge_term(terms, power, coeff, |acc, c| *acc += c);
}

#[inline]
pub(crate) fn sub_term<C: Coefficient>(terms: &mut HashMap<Power, C>, power: Power, coeff: C) {
    merge_term(terms, power, coeff, |acc, c| *acc -= c);
}

impl<C: Coefficient> Default for SparsePolynomial<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coefficient> FromIterator<(Power, C)> for SparsePolynomial<C> {
    fn from_iter<I: IntoIterator<Item = (Power, C)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<C: Coefficient> From<Vec<(Power, C)>> for SparsePolynomial<C> {
    fn from(terms: Vec<(Power, C)>) -> Self {
        Self::from_terms(terms)
    }
}

impl<C: Coefficient, const N: usize> From<[(Power, C); N]> for SparsePolynomial<C> {
    fn from(terms: [(Power, C); N]) -> Self {
        Self::from_terms(terms)
    }
}

impl<C: Coefficient> PartialEq for SparsePolynomial<C> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_form() == other.canonical_form()
    }
}

impl<C: Coefficient> Eq for SparsePolynomial<C> {}

impl<C: Coefficient> fmt::Display for SparsePolynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.canonical_form();
        write!(
            f,
            "{}",
            form.iter().format_with(" + ", |(power, coeff), g| {
                g(&format_args!("{coeff}x^{power}"))
            })
        )
    }
}

impl<C: Coefficient> AddAssign<&Self> for SparsePolynomial<C> {
    fn add_assign(&mut self, rhs: &Self) {
        self.merge_poly(rhs, add_term);
    }
}

impl<C: Coefficient> SubAssign<&Self> for SparsePolynomial<C> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.merge_poly(rhs, sub_term);
    }
}

impl<C: Coefficient> Add<&SparsePolynomial<C>> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn add(mut self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
        self += rhs;
        self
    }
}

impl<C: Coefficient> Sub<&SparsePolynomial<C>> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn sub(mut self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
        self -= rhs;
        self
    }
}

forward_owned_binop!(impl Add, add);
forward_owned_binop!(impl Sub, sub);

/// Adds `rhs` into the constant slot. A constant slot that ends at zero is removed only
/// while other entries remain.
impl<C: Coefficient> Add<C> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn add(mut self, rhs: C) -> SparsePolynomial<C> {
        let constant = self.terms.entry(0).or_insert_with(C::zero);
        *constant += rhs;
        if constant.is_zero() && self.terms.len() > 1 {
            self.terms.remove(&0);
        }
        self
    }
}

impl<C: Coefficient> Add<C> for &SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn add(self, rhs: C) -> SparsePolynomial<C> {
        self.clone() + rhs
    }
}

macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Add<SparsePolynomial<$t>> for $t {
                type Output = SparsePolynomial<$t>;

                fn add(self, rhs: SparsePolynomial<$t>) -> SparsePolynomial<$t> {
                    rhs + self
                }
            }

            impl Add<&SparsePolynomial<$t>> for $t {
                type Output = SparsePolynomial<$t>;

                fn add(self, rhs: &SparsePolynomial<$t>) -> SparsePolynomial<$t> {
                    rhs + self
                }
            }

            impl std::ops::Mul<SparsePolynomial<$t>> for $t {
                type Output = SparsePolynomial<$t>;

                fn mul(self, rhs: SparsePolynomial<$t>) -> SparsePolynomial<$t> {
                    rhs * self
                }
            }

            impl std::ops::Mul<&SparsePolynomial<$t>> for $t {
                type Output = SparsePolynomial<$t>;

                fn mul(self, rhs: &SparsePolynomial<$t>) -> SparsePolynomial<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(i8, i16, i32, i64, i128, isize);
