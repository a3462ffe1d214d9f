//! Data-path logic between address generation and storage.
//!
//! This module contains the stateless parts of the data memory:
//! 1. **Signals:** Per-cycle control inputs and the load/store width enums.
//! 2. **LSU:** The store encoder, load decoder, and alignment policy.

/// Load/Store Unit (store encoder, load decoder, alignment).
pub mod lsu;

/// Control signals and access widths.
pub mod signals;

pub use signals::{LoadType, MemSignals, StoreType};
