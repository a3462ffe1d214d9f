//! Common utilities and types used throughout the data-memory model.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Address Types:** A strong type for byte addresses with lane decoding.
//! 2. **Constants:** Word and lane geometry.
//! 3. **Memory Access:** Classification of accesses into loads and stores.
//! 4. **Error Handling:** The per-access fault taxonomy.

/// Byte address type definition.
pub mod addr;

/// Word and lane geometry constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for data-memory accesses.
pub mod error;

pub use addr::ByteAddr;
pub use constants::WORD_BYTES;
pub use data::AccessType;
pub use error::MemError;
