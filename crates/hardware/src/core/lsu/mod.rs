//! Load/Store Unit (LSU).
//!
//! This module provides the combinational halves of the data-memory path:
//! - [`store`]: Store encoder (payload positioning and byte-enable mask).
//! - [`load`]: Load decoder (lane selection and sign/zero extension).
//! - [`unaligned`]: Alignment checks and the misaligned-access policy.

/// Load decoder (lane selection, sign/zero extension).
pub mod load;

/// Store encoder (lane positioning, byte-enable generation).
pub mod store;

/// Misaligned access detection and policy.
pub mod unaligned;

pub use load::{decode_load, decode_load_code};
pub use store::{ByteEnable, EncodedStore, encode_store};
