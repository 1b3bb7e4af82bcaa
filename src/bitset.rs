//! Fixed-length bit rows for attribute membership.
//!
//! Each row of an attribute matrix is stored as a [`BitRow`]: bit `j` is set
//! iff object `j` has the attribute. Coverage of a subset of attributes is then
//! a word-wise AND of rows followed by a popcount.

/// A fixed-length bit vector backed by a vector of u64 words.
///
/// Bits at positions `>= len` in the last word are always clear, so
/// [`count_ones`][BitRow::count_ones] never sees phantom objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitRow {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of valid bits
    len: usize,
}

impl BitRow {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    fn num_words(len: usize) -> usize {
        len.div_ceil(Self::BITS_PER_WORD)
    }

    /// Creates a row of `len` set bits.
    pub fn ones(len: usize) -> Self {
        let mut row = Self {
            words: vec![u64::MAX; Self::num_words(len)],
            len,
        };
        row.clear_tail();
        row
    }

    /// Creates a row from a sequence of booleans.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut words = Vec::new();
        let mut len = 0;
        for bit in bits {
            let (word_idx, bit_idx) = Self::word_and_bit(len);
            if word_idx == words.len() {
                words.push(0);
            }
            if bit {
                words[word_idx] |= 1u64 << bit_idx;
            }
            len += 1;
        }
        Self { words, len }
    }

    /// Returns the number of bits (set or clear) in the row.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the row holds no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, bit)
    }

    /// Clears the unused high bits of the last word.
    fn clear_tail(&mut self) {
        let rem = self.len % Self::BITS_PER_WORD;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    /// Returns true if the bit at the given index is set.
    ///
    /// Indices past the end read as clear.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 == 1
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Keeps only bits also set in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn and_assign(&mut self, other: &BitRow) {
        assert_eq!(self.len, other.len, "row length mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= *b;
        }
    }

    /// Keeps only bits clear in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn and_not_assign(&mut self, other: &BitRow) {
        assert_eq!(self.len, other.len, "row length mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !*b;
        }
    }

    /// Returns an iterator over all set bit indices.
    pub fn iter(&self) -> BitRowIter<'_> {
        BitRowIter {
            row: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Returns an iterator over every bit as a bool, in index order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.contains(i))
    }
}

/// Iterator over set bits in a [`BitRow`].
pub struct BitRowIter<'a> {
    row: &'a BitRow,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitRowIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitRow::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.row.words.len() {
                return None;
            }
            self.current_word = self.row.words[self.word_idx];
        }
    }
}
