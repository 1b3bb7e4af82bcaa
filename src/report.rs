//! All inclusion-exclusion counts of one matrix, computed together.

use std::fmt;

use log::info;

use crate::error::Result;
use crate::matrix::AttributeMatrix;

/// Every count the library defines, for one matrix.
///
/// `at_least`, `exactly` and `generalized` are indexed by `k` in `0..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IepReport {
    pub num_attributes: usize,
    pub num_objects: usize,
    pub union: u64,
    pub complement: u64,
    pub at_least: Vec<u64>,
    pub exactly: Vec<u64>,
    pub generalized: Vec<u64>,
}

impl IepReport {
    pub fn new(matrix: &AttributeMatrix) -> Result<Self> {
        let n = matrix.num_attributes();
        let levels = 0..=n as i64;

        let report = Self {
            num_attributes: n,
            num_objects: matrix.num_objects(),
            union: matrix.union(),
            complement: matrix.complement(),
            at_least: levels.clone().map(|k| matrix.at_least_k(k)).collect::<Result<_>>()?,
            exactly: levels.clone().map(|k| matrix.exactly_k(k)).collect::<Result<_>>()?,
            generalized: levels.map(|k| matrix.generalized_exactly_k(k)).collect::<Result<_>>()?,
        };
        info!(
            "IepReport(n = {}, m = {}): union = {}, complement = {}",
            n, report.num_objects, report.union, report.complement
        );
        Ok(report)
    }

    /// Checks the identities relating the counts:
    ///
    /// - `union + complement == m`
    /// - `generalized[0] == complement`
    /// - `generalized[k] == exactly[k]` for every `k >= 1`
    /// - `complement + Σ_{k≥1} exactly[k] == m`
    pub fn is_consistent(&self) -> bool {
        let m = self.num_objects as u64;
        let buckets: u64 = self.complement + self.exactly.iter().skip(1).sum::<u64>();
        self.union + self.complement == m
            && self.generalized.first() == Some(&self.complement)
            && self.generalized[1..] == self.exactly[1..]
            && buckets == m
    }
}

impl fmt::Display for IepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "attributes (n): {}", self.num_attributes)?;
        writeln!(f, "objects (m):    {}", self.num_objects)?;
        writeln!(f, "union:          {}", self.union)?;
        writeln!(f, "complement:     {}", self.complement)?;
        writeln!(f, "{:>3} {:>10} {:>10} {:>12}", "k", "P_k", "Q_k", "theorem Q_k")?;
        for k in 0..=self.num_attributes {
            writeln!(
                f,
                "{:>3} {:>10} {:>10} {:>12}",
                k, self.at_least[k], self.exactly[k], self.generalized[k]
            )?;
        }
        Ok(())
    }
}
