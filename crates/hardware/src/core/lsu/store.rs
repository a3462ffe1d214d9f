//! Store encoder.
//!
//! Maps a store width, a byte address, and the 32-bit register value onto a
//! word-aligned write payload plus a 4-bit byte-enable mask. The mapping is
//! purely combinational and is re-evaluated for every store.

use std::fmt;

use crate::common::ByteAddr;
use crate::common::constants::{
    FULL_WORD_ENABLE, HALF_BITS, LANE_BITS, LOW_HALF_ENABLE, WORD_BYTES,
};
use crate::core::signals::StoreType;

/// Per-lane write enables for one word; bit `i` set means byte lane `i` is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteEnable(u8);

impl ByteEnable {
    /// All four lanes enabled.
    pub const ALL: Self = Self(FULL_WORD_ENABLE);

    /// Builds a mask from its 4-bit encoding.
    ///
    /// Returns `None` if any bit above lane 3 is set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !FULL_WORD_ENABLE == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// The 4-bit encoding.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if byte lane `lane` is written.
    #[inline(always)]
    pub const fn is_enabled(self, lane: usize) -> bool {
        lane < WORD_BYTES && (self.0 >> lane) & 1 != 0
    }

    /// The mask expanded to one flag per byte lane.
    pub const fn lanes(self) -> [bool; WORD_BYTES] {
        [
            self.is_enabled(0),
            self.is_enabled(1),
            self.is_enabled(2),
            self.is_enabled(3),
        ]
    }

    /// Number of lanes written.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for ByteEnable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// Word-aligned write request produced by [`encode_store`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedStore {
    /// Data positioned in its destination lanes; bytes outside `byte_enable` are zero.
    pub payload: u32,
    /// Lanes of the target word to overwrite.
    pub byte_enable: ByteEnable,
}

/// Encodes a store into a lane-positioned payload and byte-enable mask.
///
/// - `Sb` writes `value[7:0]` into lane `addr[1:0]`.
/// - `Sh` writes `value[15:0]` into lanes {0,1} when `addr[1] == 0`, else {2,3}.
///   `addr[0]` is ignored; alignment is checked by the caller.
/// - `Sw` writes `value` verbatim into all four lanes.
///
/// # Arguments
///
/// * `width` - The store width.
/// * `addr`  - Byte address of the store.
/// * `value` - Source register value.
///
/// # Returns
///
/// The payload and mask to apply to the word at `addr >> 2`.
pub fn encode_store(width: StoreType, addr: ByteAddr, value: u32) -> EncodedStore {
    match width {
        StoreType::Sb => {
            let lane = addr.byte_lane() as u32;
            EncodedStore {
                payload: (value & 0xFF) << (lane * LANE_BITS),
                byte_enable: ByteEnable(1 << lane),
            }
        }
        StoreType::Sh => {
            let half = addr.half_lane() as u32;
            EncodedStore {
                payload: (value & 0xFFFF) << (half * HALF_BITS),
                byte_enable: ByteEnable(LOW_HALF_ENABLE << (half * 2)),
            }
        }
        StoreType::Sw => EncodedStore {
            payload: value,
            byte_enable: ByteEnable::ALL,
        },
    }
}
