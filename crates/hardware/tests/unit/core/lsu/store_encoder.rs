//! # Store Encoder Tests
//!
//! Verifies that each store width places its payload in the addressed lanes
//! and raises exactly the matching byte enables.

use rstest::rstest;
use rvmem_core::common::ByteAddr;
use rvmem_core::core::lsu::{ByteEnable, encode_store};
use rvmem_core::core::signals::StoreType;

#[rstest]
#[case(0x10, 0x0000_0078, 0b0001)]
#[case(0x11, 0x0000_7800, 0b0010)]
#[case(0x12, 0x0078_0000, 0b0100)]
#[case(0x13, 0x7800_0000, 0b1000)]
fn byte_store_lanes(#[case] addr: u32, #[case] payload: u32, #[case] mask: u8) {
    let enc = encode_store(StoreType::Sb, ByteAddr::new(addr), 0x1234_5678);
    assert_eq!(enc.payload, payload);
    assert_eq!(enc.byte_enable.bits(), mask);
}

#[rstest]
#[case(0x20, 0x0000_5678, 0b0011)]
#[case(0x22, 0x5678_0000, 0b1100)]
fn half_store_lanes(#[case] addr: u32, #[case] payload: u32, #[case] mask: u8) {
    let enc = encode_store(StoreType::Sh, ByteAddr::new(addr), 0x1234_5678);
    assert_eq!(enc.payload, payload);
    assert_eq!(enc.byte_enable.bits(), mask);
}

#[test]
fn half_store_ignores_address_bit_zero() {
    // Alignment is enforced upstream; the encoder keys only on addr[1].
    let low = encode_store(StoreType::Sh, ByteAddr::new(0x21), 0xBEEF);
    let high = encode_store(StoreType::Sh, ByteAddr::new(0x23), 0xBEEF);
    assert_eq!(low, encode_store(StoreType::Sh, ByteAddr::new(0x20), 0xBEEF));
    assert_eq!(high, encode_store(StoreType::Sh, ByteAddr::new(0x22), 0xBEEF));
}

#[test]
fn word_store_is_verbatim() {
    let enc = encode_store(StoreType::Sw, ByteAddr::new(0x40), 0xAABB_CCDD);
    assert_eq!(enc.payload, 0xAABB_CCDD);
    assert_eq!(enc.byte_enable, ByteEnable::ALL);
    assert_eq!(enc.byte_enable.count(), 4);
}

#[rstest]
fn mask_width_matches_store_width(
    #[values(StoreType::Sb, StoreType::Sh, StoreType::Sw)] width: StoreType,
    #[values(0x40, 0x41, 0x42, 0x43)] addr: u32,
) {
    let enc = encode_store(width, ByteAddr::new(addr), u32::MAX);
    assert_eq!(enc.byte_enable.count(), width.bytes());
}

#[test]
fn upper_source_bits_are_discarded() {
    let enc = encode_store(StoreType::Sb, ByteAddr::new(0), 0xFFFF_FF01);
    assert_eq!(enc.payload, 0x01);
    let enc = encode_store(StoreType::Sh, ByteAddr::new(0), 0xFFFF_0002);
    assert_eq!(enc.payload, 0x0002);
}

#[test]
fn byte_enable_lane_view() {
    let mask = ByteEnable::from_bits(0b1010).unwrap();
    assert_eq!(mask.lanes(), [false, true, false, true]);
    assert!(mask.is_enabled(3));
    assert!(!mask.is_enabled(0));
    assert_eq!(mask.to_string(), "1010");
    assert_eq!(ByteEnable::from_bits(0b1_0000), None);
}
