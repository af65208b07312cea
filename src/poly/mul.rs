use std::collections::HashMap;
use std::ops::{Mul, Range};
use std::sync::{Mutex, PoisonError};

use num_traits::Zero;

use super::coefficient::{Coefficient, Power};
use super::sparse_poly::{add_term, SparsePolynomial};
use crate::utils::thread::{available_workers, chunk_ranges, run_scoped};

/// Left-operand term count at which multiplication switches to the parallel strategy.
pub const PARALLEL_THRESHOLD: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulStrategy {
    Sequential,
    Parallel,
}

/// Tuning knobs for polynomial multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulConfig {
    /// Left-operand entry count at or above which the parallel strategy is used.
    pub threshold: usize,
    /// Number of chunks the left operand is split into on the parallel path.
    pub num_workers: usize,
}

impl Default for MulConfig {
    fn default() -> Self {
        Self {
            threshold: PARALLEL_THRESHOLD,
            num_workers: available_workers(),
        }
    }
}

impl MulConfig {
    pub fn with_workers(num_workers: usize) -> Self {
        Self {
            num_workers,
            ..Self::default()
        }
    }

    pub fn strategy_for(&self, num_terms: usize) -> MulStrategy {
        if num_terms < self.threshold {
            MulStrategy::Sequential
        } else {
            MulStrategy::Parallel
        }
    }
}

impl<C: Coefficient> SparsePolynomial<C> {
    /// Multiplies `self` by `rhs`, picking the strategy from the number of entries in
    /// `self`.
    pub fn mul_with(&self, rhs: &Self, config: &MulConfig) -> Self {
        let strategy = config.strategy_for(self.len());
        tracing::debug!(
            lhs_terms = self.len(),
            rhs_terms = rhs.len(),
            ?strategy,
            "SparsePolynomial::mul"
        );
        match strategy {
            MulStrategy::Sequential => self.mul_sequential(rhs),
            MulStrategy::Parallel => self.mul_parallel(rhs, config.num_workers),
        }
    }

    /// Accumulates every pairwise product into a single map on the calling thread.
    #[tracing::instrument(skip_all, name = "SparsePolynomial::mul_sequential")]
    pub fn mul_sequential(&self, rhs: &Self) -> Self {
        let mut terms = HashMap::new();
        for (&lhs_power, &lhs_coeff) in &self.terms {
            for (&rhs_power, &rhs_coeff) in &rhs.terms {
                add_term(&mut terms, lhs_power + rhs_power, lhs_coeff * rhs_coeff);
            }
        }
        Self::from_accumulated(terms)
    }

    /// Splits the entries of `self` into `num_workers` contiguous chunks and convolves
    /// each chunk against all of `rhs` concurrently. Each worker folds its private
    /// result into the shared accumulator under a lock local to this call. Returns once
    /// every worker has finished.
    #[tracing::instrument(skip_all, name = "SparsePolynomial::mul_parallel")]
    pub fn mul_parallel(&self, rhs: &Self, num_workers: usize) -> Self {
        let lhs_terms: Vec<(Power, C)> = self.terms().collect();
        let chunks = chunk_ranges(lhs_terms.len(), num_workers);
        tracing::debug!(
            num_chunks = chunks.len(),
            chunk_len = lhs_terms.len() / chunks.len(),
            "partitioned left operand"
        );

        let result: Mutex<HashMap<Power, C>> = Mutex::new(HashMap::new());
        let work = |range: Range<usize>| {
            let local = convolve(&lhs_terms[range], &rhs.terms);
            let mut shared = result.lock().unwrap_or_else(PoisonError::into_inner);
            for (power, coeff) in local {
                add_term(&mut shared, power, coeff);
            }
        };

        run_scoped(chunks, work);

        Self::from_accumulated(result.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Products of `lhs` against every term of `rhs`. Cancelled slots are left in place;
/// the merge step removes them.
fn convolve<C: Coefficient>(lhs: &[(Power, C)], rhs: &HashMap<Power, C>) -> HashMap<Power, C> {
    let mut local = HashMap::with_capacity(lhs.len() * rhs.len());
    for &(lhs_power, lhs_coeff) in lhs {
        for (&rhs_power, &rhs_coeff) in rhs {
            *local.entry(lhs_power + rhs_power).or_insert_with(C::zero) += lhs_coeff * rhs_coeff;
        }
    }
    local
}

impl<C: Coefficient> Mul<&SparsePolynomial<C>> for &SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn mul(self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
        self.mul_with(rhs, &MulConfig::default())
    }
}

impl<C: Coefficient> Mul<SparsePolynomial<C>> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn mul(self, rhs: SparsePolynomial<C>) -> SparsePolynomial<C> {
        &self * &rhs
    }
}

impl<C: Coefficient> Mul<&SparsePolynomial<C>> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn mul(self, rhs: &SparsePolynomial<C>) -> SparsePolynomial<C> {
        &self * rhs
    }
}

impl<C: Coefficient> Mul<SparsePolynomial<C>> for &SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn mul(self, rhs: SparsePolynomial<C>) -> SparsePolynomial<C> {
        self * &rhs
    }
}

/// Scales every coefficient by `rhs`. Scaling by zero yields `{0 -> 0}`.
impl<C: Coefficient> Mul<C> for SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn mul(mut self, rhs: C) -> SparsePolynomial<C> {
        if rhs.is_zero() {
            return SparsePolynomial::new();
        }
        self.terms.retain(|_, coeff| {
            *coeff *= rhs;
            !coeff.is_zero()
        });
        self
    }
}

impl<C: Coefficient> Mul<C> for &SparsePolynomial<C> {
    type Output = SparsePolynomial<C>;

    fn mul(self, rhs: C) -> SparsePolynomial<C> {
        self.clone() * rhs
    }
}
