//! Enumeration of non-empty attribute subsets.
//!
//! A subset of the `n` attribute indices is encoded as an `n`-bit mask `i` in
//! `1..2^n`. Bits are read from the most significant of the `n` bits: row `j`
//! belongs to the subset iff bit `n - 1 - j` of the mask is set. Enumeration
//! walks masks in ascending order, which makes it deterministic.
//!
//! [`Subsets`] yields every non-empty subset; [`SubsetsOfSize`] yields only the
//! subsets of one size, jumping between them directly instead of filtering.

use std::fmt;
use std::iter::FusedIterator;

use crate::matrix::MAX_ATTRIBUTES;

/// The inclusion-exclusion sign of a subset: `+1` for odd size, `-1` for even.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Sign of a term with `size` factors.
    pub fn of_size(size: usize) -> Self {
        if size % 2 == 1 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    /// `(-1)^exponent`.
    pub fn alternating(exponent: usize) -> Self {
        if exponent % 2 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// A non-empty set of attribute (row) indices out of `0..n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttributeSubset {
    mask: u64,
    n: usize,
}

impl AttributeSubset {
    /// Creates a subset from its `n`-bit mask.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is zero, has bits above `n`, or `n > MAX_ATTRIBUTES`.
    pub fn from_mask(mask: u64, n: usize) -> Self {
        assert!(n <= MAX_ATTRIBUTES, "too many attributes: {}", n);
        assert!(mask != 0, "subset must be non-empty");
        assert!(mask >> n == 0, "mask {:#b} has bits beyond {} attributes", mask, n);
        Self { mask, n }
    }

    /// Creates a subset from row indices.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or contains an index `>= n`.
    pub fn from_rows(rows: impl IntoIterator<Item = usize>, n: usize) -> Self {
        let mut mask = 0;
        for row in rows {
            assert!(row < n, "row {} out of range for {} attributes", row, n);
            mask |= 1u64 << (n - 1 - row);
        }
        Self::from_mask(mask, n)
    }

    /// The underlying bitmask.
    pub fn mask(self) -> u64 {
        self.mask
    }

    /// Size of the universe this subset is drawn from.
    pub fn universe(self) -> usize {
        self.n
    }

    /// Number of rows in the subset.
    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Always false: subsets are non-empty.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Inclusion-exclusion sign of this subset.
    pub fn sign(self) -> Sign {
        Sign::of_size(self.len())
    }

    /// Returns true if `row` is in the subset.
    pub fn contains(self, row: usize) -> bool {
        row < self.n && (self.mask >> (self.n - 1 - row)) & 1 == 1
    }

    /// Row indices in ascending order.
    pub fn rows(self) -> impl Iterator<Item = usize> {
        (0..self.n).filter(move |&row| self.contains(row))
    }

    /// Row indices not in the subset, in ascending order.
    pub fn complement_rows(self) -> impl Iterator<Item = usize> {
        (0..self.n).filter(move |&row| !self.contains(row))
    }
}

impl fmt::Display for AttributeSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "}}")
    }
}

/// Mask with the low `n` bits set.
fn full_mask(n: usize) -> u64 {
    if n == 0 {
        0
    } else {
        u64::MAX >> (64 - n)
    }
}

/// Iterator over all `2^n - 1` non-empty subsets of `0..n`, in ascending mask order.
#[derive(Debug, Clone)]
pub struct Subsets {
    next: u64,
    last: u64,
    n: usize,
}

impl Subsets {
    /// # Panics
    ///
    /// Panics if `n > MAX_ATTRIBUTES`.
    pub fn new(n: usize) -> Self {
        assert!(n <= MAX_ATTRIBUTES, "too many attributes: {}", n);
        Self {
            next: 1,
            last: full_mask(n),
            n,
        }
    }
}

impl Iterator for Subsets {
    type Item = AttributeSubset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some(AttributeSubset { mask, n: self.n })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(r) => (r, Some(r)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Subsets {}

/// Iterator over the subsets of `0..n` with exactly `k` elements, in ascending mask order.
///
/// Successive masks are produced with Gosper's hack, so only `C(n, k)` steps are
/// taken. Empty when `k == 0` or `k > n`.
#[derive(Debug, Clone)]
pub struct SubsetsOfSize {
    next: Option<u64>,
    n: usize,
}

impl SubsetsOfSize {
    /// # Panics
    ///
    /// Panics if `n > MAX_ATTRIBUTES`.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(n <= MAX_ATTRIBUTES, "too many attributes: {}", n);
        let next = (1..=n).contains(&k).then(|| full_mask(k));
        Self { next, n }
    }
}

impl Iterator for SubsetsOfSize {
    type Item = AttributeSubset;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.next?;
        // Gosper's hack: next larger integer with the same popcount.
        let lowest = mask & mask.wrapping_neg();
        let ripple = mask + lowest;
        let succ = (((ripple ^ mask) >> 2) / lowest) | ripple;
        self.next = (succ >> self.n == 0).then_some(succ);
        Some(AttributeSubset { mask, n: self.n })
    }
}

impl FusedIterator for SubsetsOfSize {}

/// All non-empty subsets of `0..n`.
pub fn subsets(n: usize) -> Subsets {
    Subsets::new(n)
}

/// All subsets of `0..n` of size `k`.
pub fn subsets_of_size(n: usize, k: usize) -> SubsetsOfSize {
    SubsetsOfSize::new(n, k)
}
