//! RV32 data-memory model.
//!
//! This crate models the load/store data path of a RISC-V core between address
//! generation and a word-addressed storage array:
//! 1. **Store encoding:** Width + address + register value → lane-positioned payload and byte-enable mask.
//! 2. **Storage:** A fixed-size word array whose only mutation path is a byte-enable gated write.
//! 3. **Load decoding:** Lane selection and sign/zero extension for LB/LH/LW/LBU/LHU.
//! 4. **Composition:** A clocked [`DataMemory`] taking per-cycle control signals.
//! 5. **Driving:** Memory images, access scripts, configuration, and statistics.

/// Common types and constants (addresses, access types, faults).
pub mod common;
/// Model configuration (defaults, policies, JSON loading).
pub mod config;
/// Stateless data-path logic (signals, store encoder, load decoder).
pub mod core;
/// Memory images and access scripts.
pub mod sim;
/// Storage array and the clocked data memory.
pub mod soc;
/// Access statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// Load and store widths and the per-cycle control signals.
pub use crate::core::{LoadType, MemSignals, StoreType};
/// Clocked data memory; construct with `DataMemory::new`.
pub use crate::soc::DataMemory;
