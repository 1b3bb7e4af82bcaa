//! Coverage of attribute subsets.
//!
//! The coverage of a subset `S` is the number of objects having every attribute
//! in `S`, i.e. `Σ_j Π_{r∈S} A[r][j]`. It is computed as a word-wise AND of the
//! selected rows followed by a popcount.

use crate::bitset::BitRow;
use crate::matrix::AttributeMatrix;
use crate::subset::AttributeSubset;

impl AttributeMatrix {
    /// Per-object 0/1 vector: bit `j` is set iff object `j` has all attributes in `subset`.
    ///
    /// # Panics
    ///
    /// Panics if `subset` is drawn from a universe of a different size.
    pub fn coverage_vector(&self, subset: AttributeSubset) -> BitRow {
        assert_eq!(
            subset.universe(),
            self.num_attributes(),
            "subset universe does not match the number of attributes"
        );
        let mut rows = subset.rows();
        // Subsets are non-empty: the first row seeds the conjunction.
        let mut acc = match rows.next() {
            Some(r) => self.row(r).clone(),
            None => BitRow::ones(self.num_objects()),
        };
        for r in rows {
            acc.and_assign(self.row(r));
        }
        acc
    }

    /// Number of objects having every attribute in `subset`.
    pub fn coverage(&self, subset: AttributeSubset) -> u64 {
        if subset.len() == 1 {
            if let Some(r) = subset.rows().next() {
                return self.row(r).count_ones() as u64;
            }
        }
        self.coverage_vector(subset).count_ones() as u64
    }

    /// Number of objects having every attribute in `subset` and none outside it.
    ///
    /// This is `Σ_j [Π_{r∈S} A[r][j]] · [Π_{r∉S} (1 - A[r][j])]`: the positive
    /// conjunction over `subset` masked by the negative conjunction over its
    /// complement.
    pub fn exact_coverage(&self, subset: AttributeSubset) -> u64 {
        let positive = self.coverage_vector(subset);
        let mut negative = BitRow::ones(self.num_objects());
        for r in subset.complement_rows() {
            negative.and_not_assign(self.row(r));
        }
        let mut both = positive;
        both.and_assign(&negative);
        both.count_ones() as u64
    }
}
