//! Data-memory fault definitions.
//!
//! This module defines the error taxonomy for a single memory access. It provides:
//! 1. **Range Faults:** Addresses that fall outside the allocated word array.
//! 2. **Encoding Faults:** Width codes outside the enumerated load/store sets.
//! 3. **Contract Faults:** Conflicting enables and misaligned accesses.
//!
//! Every variant is local to one access: a faulting cycle leaves the storage
//! array exactly as it was.

use thiserror::Error;

use super::addr::ByteAddr;
use super::data::AccessType;

/// Fault raised by one data-memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemError {
    /// The address maps to a word outside the allocated array.
    ///
    /// Never wrapped or truncated; the access is dropped.
    #[error("{access} address {addr} out of range (memory holds {words} words)")]
    AddressOutOfRange {
        /// The faulting byte address.
        addr: ByteAddr,
        /// Whether the access was a load or a store.
        access: AccessType,
        /// Number of words in the storage array.
        words: usize,
    },

    /// A load or store width code outside the enumerated set.
    #[error("invalid {access} width code {code:#05b}")]
    InvalidWidthCode {
        /// Whether the code was a load or a store width.
        access: AccessType,
        /// The raw code as presented on the control lines.
        code: u8,
    },

    /// `mem_read` and `mem_write` were asserted in the same cycle.
    #[error("mem_read and mem_write both asserted at {addr}")]
    ConflictingEnables {
        /// Address presented during the conflicting cycle.
        addr: ByteAddr,
    },

    /// A preload span that does not fit in the array.
    ///
    /// Reported by word index; the span may lie past the 32-bit byte address space.
    #[error("preload of {len} words at word {base_word:#x} exceeds memory ({words} words)")]
    SpanOutOfRange {
        /// Word index of the first word of the span.
        base_word: usize,
        /// Number of words in the span.
        len: usize,
        /// Number of words in the storage array.
        words: usize,
    },

    /// A halfword or word access that is not naturally aligned.
    #[error("misaligned {access} at {addr}")]
    Misaligned {
        /// The faulting byte address.
        addr: ByteAddr,
        /// Whether the access was a load or a store.
        access: AccessType,
    },
}

impl MemError {
    /// Short, stable name of the fault kind (used as a statistics key).
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddressOutOfRange { .. } => "address_out_of_range",
            Self::SpanOutOfRange { .. } => "span_out_of_range",
            Self::InvalidWidthCode { .. } => "invalid_width_code",
            Self::ConflictingEnables { .. } => "conflicting_enables",
            Self::Misaligned { .. } => "misaligned",
        }
    }
}
