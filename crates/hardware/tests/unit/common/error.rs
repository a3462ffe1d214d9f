//! Fault type tests.

use rvmem_core::common::{AccessType, ByteAddr, MemError};

#[test]
fn out_of_range_message_names_address_and_size() {
    let err = MemError::AddressOutOfRange {
        addr: ByteAddr::new(0x1000),
        access: AccessType::Write,
        words: 1024,
    };
    assert_eq!(
        err.to_string(),
        "store address 0x00001000 out of range (memory holds 1024 words)"
    );
}

#[test]
fn width_code_message_shows_binary() {
    let err = MemError::InvalidWidthCode {
        access: AccessType::Write,
        code: 0b11,
    };
    assert_eq!(err.to_string(), "invalid store width code 0b011");
}

#[test]
fn kinds_are_distinct() {
    let addr = ByteAddr::new(0);
    let errors = [
        MemError::AddressOutOfRange {
            addr,
            access: AccessType::Read,
            words: 1,
        },
        MemError::InvalidWidthCode {
            access: AccessType::Read,
            code: 7,
        },
        MemError::ConflictingEnables { addr },
        MemError::Misaligned {
            addr,
            access: AccessType::Read,
        },
    ];
    let mut kinds: Vec<_> = errors.iter().map(MemError::kind).collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), errors.len());
}
