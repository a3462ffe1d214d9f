//! Word Buffer Implementation.
//!
//! This module provides the backing storage for the data-memory array: a
//! zero-initialised, explicitly sized byte buffer viewed as 4-byte words in
//! little-endian lane order (lane 0 is the lowest-addressed byte). All access
//! is bounds-checked and returns `None` past the end rather than panicking.

use crate::common::constants::{MAX_WORDS, WORD_BYTES};

/// A fixed-size byte buffer addressed in whole words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBuffer {
    bytes: Box<[u8]>,
}

impl WordBuffer {
    /// Creates a zeroed buffer holding `words` 32-bit words.
    ///
    /// # Arguments
    ///
    /// * `words` - Capacity in words, capped at [`MAX_WORDS`].
    ///
    /// # Returns
    ///
    /// A new `WordBuffer` of `min(words, MAX_WORDS) * 4` bytes.
    pub fn new(words: usize) -> Self {
        let len = words
            .min(MAX_WORDS)
            .checked_mul(WORD_BYTES)
            .unwrap_or(usize::MAX);
        Self {
            bytes: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Returns the capacity in words.
    pub fn len_words(&self) -> usize {
        self.bytes.len() / WORD_BYTES
    }

    /// Returns the lanes of word `index`, or `None` if it is out of range.
    pub fn word(&self, index: usize) -> Option<&[u8; WORD_BYTES]> {
        let start = index.checked_mul(WORD_BYTES)?;
        self.bytes.get(start..start.checked_add(WORD_BYTES)?)?.try_into().ok()
    }

    /// Returns the lanes of word `index` for mutation, or `None` if it is out of range.
    pub fn word_mut(&mut self, index: usize) -> Option<&mut [u8; WORD_BYTES]> {
        let start = index.checked_mul(WORD_BYTES)?;
        self.bytes
            .get_mut(start..start.checked_add(WORD_BYTES)?)?
            .try_into()
            .ok()
    }

    /// Returns the whole buffer as bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over every word as its four lanes.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8; WORD_BYTES]> + '_ {
        self.bytes
            .chunks_exact(WORD_BYTES)
            .filter_map(|chunk| chunk.try_into().ok())
    }
}
