//! Data Storage Array.
//!
//! This module implements the word-addressable store behind the data memory. It provides:
//! 1. **Buffer:** Zeroed backing storage (`WordBuffer`) sized at construction.
//! 2. **Masked Writes:** Per-lane updates gated by a [`ByteEnable`] mask; the only mutation path.
//! 3. **Word Reads:** The full word containing a byte address, always reflecting the last committed write.

/// Word-addressed backing buffer.
pub mod buffer;

use self::buffer::WordBuffer;
use crate::common::{AccessType, ByteAddr, MemError};
use crate::core::lsu::ByteEnable;

/// Byte-enable gated storage of `N` 32-bit words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageArray {
    buffer: WordBuffer,
}

impl StorageArray {
    /// Creates a zeroed array of `words` words.
    pub fn new(words: usize) -> Self {
        Self {
            buffer: WordBuffer::new(words),
        }
    }

    /// Number of words in the array.
    pub fn len_words(&self) -> usize {
        self.buffer.len_words()
    }

    /// Returns the full word containing `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::AddressOutOfRange`] if `addr >> 2` is past the end.
    pub fn read(&self, addr: ByteAddr) -> Result<u32, MemError> {
        self.buffer
            .word(addr.word_index())
            .map(|lanes| u32::from_le_bytes(*lanes))
            .ok_or_else(|| self.out_of_range(addr, AccessType::Read))
    }

    /// Overwrites the lanes of the word containing `addr` selected by `byte_enable`.
    ///
    /// Lane `i` of the word takes byte `i` of `payload` when `byte_enable[i]` is set;
    /// every other lane is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::AddressOutOfRange`] if `addr >> 2` is past the end;
    /// the array is not modified.
    pub fn write(
        &mut self,
        addr: ByteAddr,
        payload: u32,
        byte_enable: ByteEnable,
    ) -> Result<(), MemError> {
        let fault = self.out_of_range(addr, AccessType::Write);
        let word = self.buffer.word_mut(addr.word_index()).ok_or(fault)?;

        for ((lane, byte), enabled) in word
            .iter_mut()
            .zip(payload.to_le_bytes())
            .zip(byte_enable.lanes())
        {
            if enabled {
                *lane = byte;
            }
        }
        tracing::trace!(%addr, mask = %byte_enable, "word write {payload:#010x}");
        Ok(())
    }

    /// Checks that `len` words starting at word index `base_word` lie inside the array.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::SpanOutOfRange`] naming the span by word index.
    pub fn check_span(&self, base_word: usize, len: usize) -> Result<(), MemError> {
        let end = base_word.checked_add(len);
        if end.is_none_or(|end| end > self.len_words()) {
            return Err(MemError::SpanOutOfRange {
                base_word,
                len,
                words: self.len_words(),
            });
        }
        Ok(())
    }

    /// Writes whole words starting at word index `base_word`.
    ///
    /// The span is range-checked as a whole before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::SpanOutOfRange`] if the words do not fit.
    pub fn fill_words(&mut self, base_word: usize, words: &[u32]) -> Result<(), MemError> {
        self.check_span(base_word, words.len())?;
        for (offset, &value) in words.iter().enumerate() {
            if let Some(lanes) = self.buffer.word_mut(base_word + offset) {
                *lanes = value.to_le_bytes();
            }
        }
        Ok(())
    }

    /// Returns word `index` if it exists.
    pub fn word(&self, index: usize) -> Option<u32> {
        self.buffer.word(index).map(|lanes| u32::from_le_bytes(*lanes))
    }

    /// Iterates over every word in index order.
    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.buffer
            .chunks()
            .map(|lanes| u32::from_le_bytes(*lanes))
    }

    /// Returns the raw contents in address order.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    fn out_of_range(&self, addr: ByteAddr, access: AccessType) -> MemError {
        MemError::AddressOutOfRange {
            addr,
            access,
            words: self.len_words(),
        }
    }
}
