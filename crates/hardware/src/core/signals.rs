//! Data-memory control signals and access widths.
//!
//! This module defines the signals that drive one memory cycle. It performs:
//! 1. **Width Classification:** Enumerates load widths (LB/LH/LW/LBU/LHU) and store widths (SB/SH/SW).
//! 2. **Code Conversion:** Maps the bit-exact `load_type`/`store_type` control codes to and from the enums.
//! 3. **Cycle Inputs:** Bundles enables, width codes, address, and store data for a single clock edge.

use std::fmt;

use crate::common::{AccessType, ByteAddr, MemError};

/// Load access width and extension mode.
///
/// Codes are the 3-bit `load_type` control values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadType {
    /// Load byte, sign-extended (`000`).
    Lb,

    /// Load halfword, sign-extended (`001`).
    Lh,

    /// Load word (`010`).
    Lw,

    /// Load byte, zero-extended (`011`).
    Lbu,

    /// Load halfword, zero-extended (`100`).
    Lhu,
}

impl LoadType {
    /// All load widths in code order.
    pub const ALL: [Self; 5] = [Self::Lb, Self::Lh, Self::Lw, Self::Lbu, Self::Lhu];

    /// Decodes a 3-bit `load_type` control value.
    ///
    /// Returns `None` for `101`, `110`, `111` and any value wider than three bits.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0b000 => Some(Self::Lb),
            0b001 => Some(Self::Lh),
            0b010 => Some(Self::Lw),
            0b011 => Some(Self::Lbu),
            0b100 => Some(Self::Lhu),
            _ => None,
        }
    }

    /// Encodes back to the 3-bit control value.
    pub const fn code(self) -> u8 {
        match self {
            Self::Lb => 0b000,
            Self::Lh => 0b001,
            Self::Lw => 0b010,
            Self::Lbu => 0b011,
            Self::Lhu => 0b100,
        }
    }

    /// Number of bytes the load reads from the word.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Lb | Self::Lbu => 1,
            Self::Lh | Self::Lhu => 2,
            Self::Lw => 4,
        }
    }

    /// Returns true if the loaded value is sign-extended to 32 bits.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Lb | Self::Lh)
    }

    /// Assembler mnemonic (lowercase).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
        }
    }
}

impl TryFrom<u8> for LoadType {
    type Error = MemError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(MemError::InvalidWidthCode {
            access: AccessType::Read,
            code,
        })
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Store access width.
///
/// Codes are the 2-bit `store_type` control values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreType {
    /// Store byte (`00`).
    Sb,

    /// Store halfword (`01`).
    Sh,

    /// Store word (`10`).
    Sw,
}

impl StoreType {
    /// All store widths in code order.
    pub const ALL: [Self; 3] = [Self::Sb, Self::Sh, Self::Sw];

    /// Decodes a 2-bit `store_type` control value.
    ///
    /// Returns `None` for `11` and any value wider than two bits.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0b00 => Some(Self::Sb),
            0b01 => Some(Self::Sh),
            0b10 => Some(Self::Sw),
            _ => None,
        }
    }

    /// Encodes back to the 2-bit control value.
    pub const fn code(self) -> u8 {
        match self {
            Self::Sb => 0b00,
            Self::Sh => 0b01,
            Self::Sw => 0b10,
        }
    }

    /// Number of bytes the store writes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Sb => 1,
            Self::Sh => 2,
            Self::Sw => 4,
        }
    }

    /// Assembler mnemonic (lowercase).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
        }
    }
}

impl TryFrom<u8> for StoreType {
    type Error = MemError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(MemError::InvalidWidthCode {
            access: AccessType::Write,
            code,
        })
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Inputs sampled on one clock edge.
///
/// Width codes are kept raw so that out-of-set values reach the data memory
/// exactly as the control lines presented them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemSignals {
    /// Read enable.
    pub mem_read: bool,
    /// Write enable.
    pub mem_write: bool,
    /// 3-bit load width code.
    pub load_type: u8,
    /// 2-bit store width code.
    pub store_type: u8,
    /// Byte address from the address-generation stage.
    pub address: u32,
    /// Register value to store (`rs2`).
    pub store_data: u32,
}

impl MemSignals {
    /// A cycle with neither enable asserted.
    pub const fn idle() -> Self {
        Self {
            mem_read: false,
            mem_write: false,
            load_type: 0,
            store_type: 0,
            address: 0,
            store_data: 0,
        }
    }

    /// A load cycle of the given width.
    pub const fn load(width: LoadType, address: u32) -> Self {
        Self {
            mem_read: true,
            load_type: width.code(),
            address,
            ..Self::idle()
        }
    }

    /// A store cycle of the given width.
    pub const fn store(width: StoreType, address: u32, store_data: u32) -> Self {
        Self {
            mem_write: true,
            store_type: width.code(),
            address,
            store_data,
            ..Self::idle()
        }
    }

    /// The address as a typed byte address.
    pub const fn addr(&self) -> ByteAddr {
        ByteAddr::new(self.address)
    }

    /// Returns true if neither enable is asserted.
    pub const fn is_idle(&self) -> bool {
        !self.mem_read && !self.mem_write
    }
}
