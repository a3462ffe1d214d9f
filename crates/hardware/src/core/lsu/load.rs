//! Load decoder.
//!
//! Slices the byte or halfword addressed by `addr[1:0]` out of the word read
//! from storage and widens it to 32 bits, sign- or zero-extending according
//! to the load width. Purely combinational.

use crate::common::ByteAddr;
use crate::common::constants::{HALF_BITS, LANE_BITS};
use crate::core::signals::LoadType;

/// Returns byte lane `addr[1:0]` of `word` (lane 0 is bits 7:0).
#[inline(always)]
pub const fn select_byte(word: u32, addr: ByteAddr) -> u8 {
    (word >> (addr.byte_lane() as u32 * LANE_BITS)) as u8
}

/// Returns `word[31:16]` when `addr[1]` is set, otherwise `word[15:0]`.
#[inline(always)]
pub const fn select_half(word: u32, addr: ByteAddr) -> u16 {
    (word >> (addr.half_lane() as u32 * HALF_BITS)) as u16
}

/// Decodes a load from the word containing `addr`.
///
/// # Arguments
///
/// * `width` - The load width and extension mode.
/// * `addr`  - Byte address of the load; only `addr[1:0]` is consulted.
/// * `word`  - The full word read from the storage array.
///
/// # Returns
///
/// The 32-bit value delivered to the register file.
pub const fn decode_load(width: LoadType, addr: ByteAddr, word: u32) -> u32 {
    match width {
        LoadType::Lb => select_byte(word, addr) as i8 as i32 as u32,
        LoadType::Lbu => select_byte(word, addr) as u32,
        LoadType::Lh => select_half(word, addr) as i16 as i32 as u32,
        LoadType::Lhu => select_half(word, addr) as u32,
        LoadType::Lw => word,
    }
}

/// Decodes a load given the raw 3-bit `load_type` control code.
///
/// Codes outside the load set produce `0`.
pub const fn decode_load_code(code: u8, addr: ByteAddr, word: u32) -> u32 {
    match LoadType::from_code(code) {
        Some(width) => decode_load(width, addr, word),
        None => 0,
    }
}
