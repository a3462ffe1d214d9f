//! Data-memory geometry constants.
//!
//! Word and lane dimensions shared by the store encoder, the storage array,
//! and the load decoder.

/// Bytes per storage word.
pub const WORD_BYTES: usize = 4;

/// Largest storage array a 32-bit byte address can reach (`2^32 / 4` words).
pub const MAX_WORDS: usize = 1 << 30;

/// Shift converting a byte address into a word index.
pub const WORD_SHIFT: u32 = 2;

/// Mask selecting the byte lane bits (`addr[1:0]`) of an address.
pub const BYTE_LANE_MASK: u32 = 0b11;

/// Byte-enable mask with every lane of a word set.
pub const FULL_WORD_ENABLE: u8 = 0b1111;

/// Byte-enable mask for the lower halfword (lanes 0 and 1).
pub const LOW_HALF_ENABLE: u8 = 0b0011;

/// Width in bits of one byte lane.
pub const LANE_BITS: u32 = 8;

/// Width in bits of one halfword lane.
pub const HALF_BITS: u32 = 16;
