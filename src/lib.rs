//! # iep-rs: Inclusion-Exclusion counting in Rust
//!
//! **`iep-rs`** computes the counts defined by the **Inclusion-Exclusion Principle** over a finite
//! universe of objects, each of which has some subset of `n` binary attributes.
//!
//! ## Input
//!
//! The input is an [`AttributeMatrix`][crate::matrix::AttributeMatrix]: a 0/1 matrix whose rows are
//! attributes and whose columns are objects. Entry `(r, j)` is 1 iff object `j` has attribute `r`.
//! The matrix is validated once on construction and is immutable afterwards.
//!
//! ## Counts
//!
//! - **Union**: objects with at least one attribute, `|A_1 ∪ ... ∪ A_n|`.
//! - **Complement**: objects with no attribute, `m - union`.
//! - **`P_k`**: the sum over all size-`k` attribute subsets of the number of objects having all of them.
//! - **`Q_k`**: objects with exactly `k` attributes.
//! - **Generalized `Q_k`**: `Q_k` recovered from the `P_k` alone via an alternating binomial sum.
//!
//! ## Basic Usage
//!
//! ```rust
//! use iep_rs::matrix::AttributeMatrix;
//!
//! let a = AttributeMatrix::from_rows([
//!     [1, 0, 1, 1],
//!     [0, 0, 1, 1],
//! ])?;
//!
//! assert_eq!(a.union(), 3);
//! assert_eq!(a.complement(), 1);
//! assert_eq!(a.at_least_k(2)?, 2);
//! assert_eq!(a.exactly_k(1)?, 1);
//! assert_eq!(a.generalized_exactly_k(1)?, 1);
//! # Ok::<(), iep_rs::error::IepError>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`subset`]**: lazy enumeration of non-empty attribute subsets, with signs.
//! - **[`coverage`]**: how many objects have all attributes of a subset.
//! - **[`count`]**: the counting formulas.
//! - **[`report`]**: every count for one matrix at once.

pub mod bitset;
pub mod count;
pub mod coverage;
pub mod error;
pub mod matrix;
pub mod report;
pub mod subset;
pub mod utils;
