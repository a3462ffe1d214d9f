//! Byte address type.
//!
//! This module defines the strong type for data-memory byte addresses. It provides the following:
//! 1. **Type Safety:** Keeps byte addresses apart from word indices and raw data values.
//! 2. **Lane Decoding:** Extracts the byte lane (`addr[1:0]`) and halfword lane (`addr[1]`).
//! 3. **Word Indexing:** Maps a byte address onto the storage word that contains it.

use std::fmt;

use super::constants::{BYTE_LANE_MASK, WORD_SHIFT};

/// A 32-bit byte address into the data-memory address space.
///
/// The low two bits select a lane within a 32-bit word; the remaining
/// bits select the word itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteAddr(pub u32);

impl ByteAddr {
    /// Creates a new byte address from a raw 32-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 32-bit address value.
    ///
    /// # Returns
    ///
    /// A new `ByteAddr` instance wrapping the provided address.
    #[inline(always)]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Index of the word containing this byte (`addr >> 2`).
    #[inline(always)]
    pub const fn word_index(self) -> usize {
        (self.0 >> WORD_SHIFT) as usize
    }

    /// Byte lane within the word (`addr[1:0]`), in `0..=3`.
    #[inline(always)]
    pub const fn byte_lane(self) -> usize {
        (self.0 & BYTE_LANE_MASK) as usize
    }

    /// Halfword lane within the word (`addr[1]`): `0` for bytes 0-1, `1` for bytes 2-3.
    #[inline(always)]
    pub const fn half_lane(self) -> usize {
        ((self.0 >> 1) & 1) as usize
    }
}

impl From<u32> for ByteAddr {
    fn from(addr: u32) -> Self {
        Self(addr)
    }
}

impl fmt::Display for ByteAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
