//! Misaligned access handling.
//!
//! This module provides the alignment check applied before a halfword or word
//! access reaches the encoder or decoder, and resolves misaligned accesses
//! according to the configured [`MisalignedPolicy`]. Accesses never straddle a
//! word: under the lane policy the low address bits are simply reinterpreted.

use crate::common::{AccessType, ByteAddr, MemError};
use crate::config::MisalignedPolicy;

/// Checks whether an access of `size` bytes at `addr` is naturally aligned.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The access width in bytes (1, 2, or 4).
///
/// # Returns
///
/// `true` if the access is naturally aligned.
pub const fn is_aligned(addr: ByteAddr, size: u32) -> bool {
    if size <= 1 {
        return true;
    }
    addr.val() & (size - 1) == 0
}

/// Applies the misaligned-access policy to one access.
///
/// # Arguments
///
/// * `addr`   - The byte address of the access.
/// * `size`   - The access width in bytes.
/// * `access` - Whether the access is a load or a store.
/// * `policy` - The configured misaligned-access policy.
///
/// # Errors
///
/// Returns [`MemError::Misaligned`] when the access is misaligned and the
/// policy is [`MisalignedPolicy::Trap`].
pub const fn check_alignment(
    addr: ByteAddr,
    size: u32,
    access: AccessType,
    policy: MisalignedPolicy,
) -> Result<(), MemError> {
    match policy {
        MisalignedPolicy::Trap if !is_aligned(addr, size) => {
            Err(MemError::Misaligned { addr, access })
        }
        _ => Ok(()),
    }
}
