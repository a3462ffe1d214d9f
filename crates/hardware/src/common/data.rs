//! Memory Access Types.
//!
//! This module defines the classification of data-memory accesses. These types are used for:
//! 1. **Fault Reporting:** Telling a rejected load apart from a rejected store.
//! 2. **Statistics Tracking:** Categorizing accesses for the per-run counters.

use std::fmt;

/// Type of data-memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access (a load feeding the register file).
    Read,

    /// Data write access (a store driven by register data).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("load"),
            Self::Write => f.write_str("store"),
        }
    }
}
