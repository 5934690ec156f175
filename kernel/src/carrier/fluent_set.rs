//! `FluentSet`: fixed-universe bit set over grounded fluent indices.
//!
//! Every state, condition and effect in the planning model is a `FluentSet`
//! over the same universe `0..len`, where `len` is the number of grounded
//! fluents declared by the problem. Storage is little-endian 64-bit words;
//! bits at or above `len` are always zero.
//!
//! # Equality semantics
//!
//! Two sets are equal only if they share the universe size *and* the
//! member bits. Sets built for different problems never compare equal.

const WORD_BITS: usize = 64;

/// Fixed-universe bit set over fluent indices `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FluentSet {
    len: usize,
    words: Vec<u64>,
}

impl FluentSet {
    /// Create an empty set over the universe `0..len`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            words: vec![0; len.div_ceil(WORD_BITS)],
        }
    }

    /// Create a set over `0..len` containing `indices`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    #[must_use]
    pub fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(len);
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Universe size (number of addressable fluents).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the universe itself is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of members.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Membership test. Indices outside the universe are never members.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len && self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Add `index`. Panics if out of range.
    pub fn insert(&mut self, index: usize) {
        assert!(
            index < self.len,
            "fluent index {index} out of range 0..{}",
            self.len
        );
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    /// Remove `index`. Panics if out of range.
    pub fn remove(&mut self, index: usize) {
        assert!(
            index < self.len,
            "fluent index {index} out of range 0..{}",
            self.len
        );
        self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
    }

    /// Iterate members in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let tz = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + tz)
            })
        })
    }

    /// True if every member of `self` is a member of `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.zip_words(other).all(|(a, b)| a & !b == 0)
    }

    /// True if `self` and `other` share no member.
    #[must_use]
    pub fn is_disjoint_from(&self, other: &Self) -> bool {
        self.zip_words(other).all(|(a, b)| a & b == 0)
    }

    /// `|self \ other|`: members of `self` absent from `other`.
    #[must_use]
    pub fn count_missing_from(&self, other: &Self) -> usize {
        self.zip_words(other)
            .map(|(a, b)| (a & !b).count_ones() as usize)
            .sum()
    }

    /// `|self ∩ other|`: members of `self` present in `other`.
    #[must_use]
    pub fn count_present_in(&self, other: &Self) -> usize {
        self.zip_words(other)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// In-place union.
    pub fn union_with(&mut self, other: &Self) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a |= *b;
        }
    }

    /// In-place difference (`self \= other`).
    pub fn difference_with(&mut self, other: &Self) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a &= !*b;
        }
    }

    /// Serialize the member words (little-endian), prefixed by the
    /// universe size as a `u64`.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(8 + self.words.len() * 8);
        buf.extend_from_slice(&(self.len as u64).to_le_bytes());
        for word in &self.words {
            buf.extend_from_slice(&word.to_le_bytes());
        }
        buf
    }

    /// Word pairs; a missing word on either side reads as zero.
    fn zip_words<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (u64, u64)> + 'a {
        let n = self.words.len().max(other.words.len());
        (0..n).map(move |i| {
            (
                self.words.get(i).copied().unwrap_or(0),
                other.words.get(i).copied().unwrap_or(0),
            )
        })
    }
}
