//! Inclusion-exclusion counting formulas.
//!
//! All formulas are pure functions of an [`AttributeMatrix`]. `n` and `m` always
//! come from the matrix the formula is called on.
//!
//! - [`union`][AttributeMatrix::union]: `|A_1 ∪ ... ∪ A_n| = Σ_{S≠∅} (-1)^{|S|+1} cov(S)`.
//! - [`complement`][AttributeMatrix::complement]: `m - union`.
//! - [`at_least_k`][AttributeMatrix::at_least_k]: `P_k = Σ_{|S|=k} cov(S)`.
//! - [`exactly_k`][AttributeMatrix::exactly_k]: `Q_k = Σ_{|S|=k} exact_cov(S)`.
//! - [`generalized_exactly_k`][AttributeMatrix::generalized_exactly_k]:
//!   `Q_t = Σ_{k=t}^{n} (-1)^{k-t} C(k, t) P_k`.
//!
//! Level 0 follows the vacuous convention `P_0 = Q_0 = m`. The generalized
//! formula is evaluated as written at every level, so at level 0 it yields the
//! number of objects with no attribute at all, i.e.
//! [`complement`][AttributeMatrix::complement]. For `t >= 1` it equals `Q_t`.

use log::{debug, trace};
use num_bigint::BigInt;

use crate::error::{non_negative, IepError, Result};
use crate::matrix::AttributeMatrix;
use crate::subset::{subsets, subsets_of_size, Sign};
use crate::utils::binomial;

impl AttributeMatrix {
    /// Number of objects having at least one attribute.
    pub fn union(&self) -> u64 {
        let n = self.num_attributes();
        debug!("union(n = {}, m = {})", n, self.num_objects());

        let mut total: i128 = 0;
        for s in subsets(n) {
            let cov = i128::from(self.coverage(s));
            trace!("union: {}{} -> {}", s.sign(), s, cov);
            match s.sign() {
                Sign::Plus => total += cov,
                Sign::Minus => total -= cov,
            }
        }
        debug_assert!((0..=self.num_objects() as i128).contains(&total));
        total as u64
    }

    /// Number of objects having none of the attributes.
    pub fn complement(&self) -> u64 {
        debug!("complement(n = {}, m = {})", self.num_attributes(), self.num_objects());
        self.num_objects() as u64 - self.union()
    }

    /// `P_k`: the sum of coverages over all size-`k` attribute subsets.
    ///
    /// Each object with `d` attributes is counted `C(d, k)` times. Returns `m`
    /// for `k == 0` and `0` for `k > n`.
    pub fn at_least_k(&self, k: i64) -> Result<u64> {
        let k = non_negative("k", k)?;
        debug!("at_least_k(k = {})", k);

        if k == 0 {
            return Ok(self.num_objects() as u64);
        }
        let mut total: u64 = 0;
        for s in subsets_of_size(self.num_attributes(), k) {
            total = total.checked_add(self.coverage(s)).ok_or(IepError::Overflow)?;
        }
        Ok(total)
    }

    /// `Q_k`: the number of objects having exactly `k` attributes.
    ///
    /// Returns `m` for `k == 0` and `0` for `k > n`.
    pub fn exactly_k(&self, k: i64) -> Result<u64> {
        let k = non_negative("k", k)?;
        debug!("exactly_k(k = {})", k);

        if k == 0 {
            return Ok(self.num_objects() as u64);
        }
        Ok(subsets_of_size(self.num_attributes(), k)
            .map(|s| self.exact_coverage(s))
            .sum())
    }

    /// `Q_t` computed from the `P_k` alone:
    ///
    /// ```text
    /// Q_t = Σ_{k=t}^{n} (-1)^{k-t} · C(k, t) · P_k
    /// ```
    ///
    /// Equal to [`exactly_k(target_k)`][AttributeMatrix::exactly_k] for
    /// `target_k >= 1`. At `target_k == 0` the sum is `m - P_1 + P_2 - ...`, which
    /// is [`complement`][AttributeMatrix::complement].
    pub fn generalized_exactly_k(&self, target_k: i64) -> Result<u64> {
        let t = non_negative("target_k", target_k)?;
        debug!("generalized_exactly_k(target_k = {})", t);

        let mut total = BigInt::ZERO;
        for k in t..=self.num_attributes() {
            let p = self.at_least_k(k as i64)?;
            let term = BigInt::from(p) * BigInt::from(binomial(k, t));
            match Sign::alternating(k - t) {
                Sign::Plus => total += term,
                Sign::Minus => total -= term,
            }
        }
        debug!("generalized_exactly_k(target_k = {}) = {}", t, total);
        u64::try_from(total).map_err(|_| IepError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn textbook() -> AttributeMatrix {
        AttributeMatrix::from_rows([
            [1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0],
            [1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0],
            [1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 0],
            [1, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_union_complement() {
        let a = textbook();
        assert_eq!(a.union(), 12);
        assert_eq!(a.complement(), 1);
    }

    #[test]
    fn test_at_least_k() {
        let a = textbook();
        let p: Vec<u64> = (0..=5).map(|k| a.at_least_k(k).unwrap()).collect();
        assert_eq!(p, vec![13, 26, 22, 10, 2, 0]);
    }

    #[test]
    fn test_exactly_k() {
        let a = textbook();
        let q: Vec<u64> = (1..=5).map(|k| a.exactly_k(k).unwrap()).collect();
        assert_eq!(q, vec![4, 4, 2, 2, 0]);
        assert_eq!(a.exactly_k(0), Ok(13));
    }

    #[test]
    fn test_generalized_exactly_k() {
        let a = textbook();
        for k in 1..=5 {
            assert_eq!(a.generalized_exactly_k(k), a.exactly_k(k), "k = {}", k);
        }
    }

    #[test]
    fn test_generalized_level_zero_is_complement() {
        let a = textbook();
        // m - P_1 + P_2 - P_3 + P_4 = 13 - 26 + 22 - 10 + 2
        assert_eq!(a.generalized_exactly_k(0), Ok(1));
        assert_eq!(a.generalized_exactly_k(0), Ok(a.complement()));
        assert_eq!(a.exactly_k(0), Ok(13));
    }

    #[test]
    fn test_single_row() {
        let a = AttributeMatrix::from_rows([[1, 0, 1]]).unwrap();
        assert_eq!(a.union(), 2);
        assert_eq!(a.complement(), 1);
        assert_eq!(a.at_least_k(1), Ok(2));
        assert_eq!(a.exactly_k(1), Ok(2));
        assert_eq!(a.generalized_exactly_k(1), Ok(2));
        assert_eq!(a.generalized_exactly_k(0), Ok(1));
        assert_eq!(a.at_least_k(2), Ok(0));
    }

    #[test]
    fn test_negative_parameters() {
        let a = textbook();
        let err = |name| -> Result<u64> { Err(IepError::NegativeParameter { name, value: -1 }) };
        assert_eq!(a.at_least_k(-1), err("k"));
        assert_eq!(a.exactly_k(-1), err("k"));
        assert_eq!(a.generalized_exactly_k(-1), err("target_k"));
    }

    #[test]
    fn test_no_objects() {
        let a = AttributeMatrix::from_rows(vec![Vec::<u8>::new(); 3]).unwrap();
        assert_eq!(a.union(), 0);
        assert_eq!(a.complement(), 0);
        for k in 0..=4 {
            assert_eq!(a.at_least_k(k), Ok(0));
            assert_eq!(a.exactly_k(k), Ok(0));
            assert_eq!(a.generalized_exactly_k(k), Ok(0));
        }
    }

    #[test]
    fn test_all_ones() {
        // Every object has all n attributes: P_k = C(n, k) * m, Q_n = m.
        let a = AttributeMatrix::from_rows(vec![vec![1u8; 5]; 4]).unwrap();
        assert_eq!(a.union(), 5);
        assert_eq!(a.complement(), 0);
        assert_eq!(a.at_least_k(2), Ok(30));
        assert_eq!(a.exactly_k(4), Ok(5));
        assert_eq!(a.exactly_k(3), Ok(0));
        assert_eq!(a.generalized_exactly_k(4), Ok(5));
        assert_eq!(a.generalized_exactly_k(2), Ok(0));
        assert_eq!(a.generalized_exactly_k(0), Ok(0));
    }
}
