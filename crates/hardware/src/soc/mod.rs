//! Data memory composition.
//!
//! This module organizes the stateful side of the model: the byte-enable gated
//! storage array and the clocked [`DataMemory`] that owns it and drives the
//! store encoder and load decoder.

/// Clocked data memory (composition root).
pub mod data_memory;

/// Storage array and its backing buffer.
pub mod memory;

pub use data_memory::DataMemory;
pub use memory::StorageArray;
