//! The 0/1 attribute-membership matrix.
//!
//! Rows are attributes, columns are objects: entry `(r, j)` is 1 iff object `j`
//! has attribute `r`. A matrix is validated once on construction and never
//! changes afterwards, so every counting operation is a pure function of it.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::bitset::BitRow;
use crate::error::{IepError, Result};

/// Largest number of attributes a subset bitmask can index.
pub const MAX_ATTRIBUTES: usize = 63;

/// Text form of a row with no objects.
const EMPTY_ROW: &str = "-";

/// A validated rectangular 0/1 matrix with `n >= 1` rows and `m >= 0` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatrix {
    rows: Vec<BitRow>,
    num_objects: usize,
}

impl AttributeMatrix {
    /// Builds a matrix from integer rows.
    ///
    /// Fails if there are no rows, if rows differ in length, if any entry is
    /// not 0 or 1, or if there are more than [`MAX_ATTRIBUTES`] rows.
    ///
    /// ```
    /// use iep_rs::matrix::AttributeMatrix;
    ///
    /// let a = AttributeMatrix::from_rows([[1, 0, 1], [0, 0, 1]]).unwrap();
    /// assert_eq!(a.num_attributes(), 2);
    /// assert_eq!(a.num_objects(), 3);
    /// ```
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Into<i64>,
    {
        let mut bit_rows = Vec::new();
        for (r, row) in rows.into_iter().enumerate() {
            let mut bits = Vec::new();
            for (column, value) in row.into_iter().enumerate() {
                let value: i64 = value.into();
                match value {
                    0 => bits.push(false),
                    1 => bits.push(true),
                    value => return Err(IepError::InvalidEntry { row: r, column, value }),
                }
            }
            bit_rows.push(BitRow::from_bits(bits));
        }
        Self::from_bit_rows(bit_rows)
    }

    /// Builds a matrix from boolean rows.
    pub fn from_bits<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = bool>,
    {
        Self::from_bit_rows(rows.into_iter().map(BitRow::from_bits).collect())
    }

    fn from_bit_rows(rows: Vec<BitRow>) -> Result<Self> {
        let first = rows.first().ok_or(IepError::EmptyMatrix)?;
        let num_objects = first.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_objects) {
            return Err(IepError::RaggedMatrix {
                row,
                expected: num_objects,
                found: r.len(),
            });
        }
        if rows.len() > MAX_ATTRIBUTES {
            return Err(IepError::TooManyAttributes {
                found: rows.len(),
                max: MAX_ATTRIBUTES,
            });
        }
        debug!("AttributeMatrix(n = {}, m = {})", rows.len(), num_objects);
        Ok(Self { rows, num_objects })
    }

    /// Number of attributes (rows), `n`.
    pub fn num_attributes(&self) -> usize {
        self.rows.len()
    }

    /// Number of objects (columns), `m`.
    pub fn num_objects(&self) -> usize {
        self.num_objects
    }

    /// Returns whether object `column` has attribute `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.rows[row].contains(column)
    }

    /// The membership row of one attribute.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &BitRow {
        &self.rows[row]
    }

    /// All membership rows, in attribute order.
    pub fn rows(&self) -> &[BitRow] {
        &self.rows
    }

    /// How many attributes each object has.
    pub fn attribute_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.num_objects];
        for row in &self.rows {
            for j in row.iter() {
                counts[j] += 1;
            }
        }
        counts
    }
}

impl fmt::Display for AttributeMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            if row.is_empty() {
                writeln!(f, "{}", EMPTY_ROW)?;
                continue;
            }
            let mut first = true;
            for bit in row.bits() {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                write!(f, "{}", u8::from(bit))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses one attribute per line.
///
/// Entries are separated by whitespace or commas. Blank lines and anything
/// after `#` are ignored. A line holding only `-` is a row with no objects.
impl FromStr for AttributeMatrix {
    type Err = IepError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line == EMPTY_ROW {
                rows.push(Vec::new());
                continue;
            }
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| {
                    t.parse::<i64>().map_err(|e| IepError::Parse {
                        line: i + 1,
                        message: format!("bad entry '{}': {}", t, e),
                    })
                })
                .collect::<Result<Vec<i64>>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let a = AttributeMatrix::from_rows([[1, 0, 1], [0, 1, 1]]).unwrap();
        assert_eq!(a.num_attributes(), 2);
        assert_eq!(a.num_objects(), 3);
        assert!(a.get(0, 0));
        assert!(!a.get(0, 1));
        assert!(a.get(1, 2));
        assert_eq!(a.row(1).iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_empty_matrix() {
        let rows: Vec<Vec<u8>> = vec![];
        assert_eq!(AttributeMatrix::from_rows(rows), Err(IepError::EmptyMatrix));
    }

    #[test]
    fn test_no_objects() {
        let rows: Vec<Vec<u8>> = vec![vec![], vec![]];
        let a = AttributeMatrix::from_rows(rows).unwrap();
        assert_eq!(a.num_attributes(), 2);
        assert_eq!(a.num_objects(), 0);
    }

    #[test]
    fn test_ragged() {
        let res = AttributeMatrix::from_rows(vec![vec![1, 0, 1], vec![0, 1]]);
        assert_eq!(
            res,
            Err(IepError::RaggedMatrix {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_entry() {
        let res = AttributeMatrix::from_rows([[1, 0], [2, 1]]);
        assert_eq!(res, Err(IepError::InvalidEntry { row: 1, column: 0, value: 2 }));
        let res = AttributeMatrix::from_rows([[-1, 0]]);
        assert_eq!(res, Err(IepError::InvalidEntry { row: 0, column: 0, value: -1 }));
    }

    #[test]
    fn test_too_many_attributes() {
        let rows = vec![vec![0u8; 2]; MAX_ATTRIBUTES + 1];
        assert_eq!(
            AttributeMatrix::from_rows(rows),
            Err(IepError::TooManyAttributes {
                found: MAX_ATTRIBUTES + 1,
                max: MAX_ATTRIBUTES
            })
        );
    }

    #[test]
    fn test_from_bits() {
        let a = AttributeMatrix::from_bits([[true, false], [true, true]]).unwrap();
        let b = AttributeMatrix::from_rows([[1, 0], [1, 1]]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_attribute_counts() {
        let a = AttributeMatrix::from_rows([[1, 0, 1, 0], [1, 1, 0, 0], [1, 0, 0, 0]]).unwrap();
        assert_eq!(a.attribute_counts(), vec![3, 1, 1, 0]);
    }

    #[test]
    fn test_parse() {
        let text = "# two attributes\n1 0 1\n\n0,1,1  # trailing\n";
        let a: AttributeMatrix = text.parse().unwrap();
        assert_eq!(a, AttributeMatrix::from_rows([[1, 0, 1], [0, 1, 1]]).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        let res = "1 0\n1 x\n".parse::<AttributeMatrix>();
        assert!(matches!(res, Err(IepError::Parse { line: 2, .. })));
        let res = "1 0\n1 3\n".parse::<AttributeMatrix>();
        assert_eq!(res, Err(IepError::InvalidEntry { row: 1, column: 1, value: 3 }));
        let res = "# nothing\n".parse::<AttributeMatrix>();
        assert_eq!(res, Err(IepError::EmptyMatrix));
    }

    #[test]
    fn test_display_roundtrip() {
        let a = AttributeMatrix::from_rows([[1, 0, 1], [0, 1, 1]]).unwrap();
        let s = a.to_string();
        assert_eq!(s, "1 0 1\n0 1 1\n");
        assert_eq!(s.parse::<AttributeMatrix>().unwrap(), a);
    }

    #[test]
    fn test_display_roundtrip_no_objects() {
        let a = AttributeMatrix::from_rows(vec![Vec::<u8>::new(); 2]).unwrap();
        let s = a.to_string();
        assert_eq!(s, "-\n-\n");
        assert_eq!(s.parse::<AttributeMatrix>(), Ok(a));
    }

    #[test]
    fn test_parse_mixed_empty_row() {
        let res = "1 0\n-\n".parse::<AttributeMatrix>();
        assert_eq!(
            res,
            Err(IepError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 0
            })
        );
    }
}
