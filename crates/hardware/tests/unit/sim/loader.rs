//! Memory image loader tests.

use std::fs;

use pretty_assertions::assert_eq;
use rvmem_core::sim::loader::{LoadError, MemoryImage, Segment, load_image_file};
use rvmem_core::DataMemory;
use rvmem_core::common::MemError;

#[test]
fn hex_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("init.hex");
    fs::write(&path, "@4\n0xDEADBEEF 1\n").unwrap();

    let image = load_image_file(&path).unwrap();
    assert_eq!(
        image.segments(),
        &[Segment {
            base_word: 4,
            words: vec![0xDEAD_BEEF, 1]
        }]
    );
}

#[test]
fn other_extensions_are_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("init.bin");
    fs::write(&path, [0xDD, 0xCC, 0xBB, 0xAA, 0x01]).unwrap();

    let image = load_image_file(&path).unwrap();
    assert_eq!(image.word_count(), 2);
    assert_eq!(image.segments()[0].words, vec![0xAABB_CCDD, 0x01]);
}

#[test]
fn empty_binary_has_no_segments() {
    assert!(MemoryImage::from_le_bytes(&[]).segments().is_empty());
}

#[test]
fn missing_file_reports_path() {
    let err = load_image_file("/nonexistent/image.hex").unwrap_err();
    assert!(matches!(err, LoadError::Io { ref path, .. } if path.ends_with("image.hex")));
}

#[test]
fn oversized_word_is_rejected() {
    let err = MemoryImage::parse_hex("1_0000_0000\n").unwrap_err();
    assert!(matches!(err, LoadError::InvalidWord { line: 1, .. }));
}

#[test]
fn segment_past_the_address_space_keeps_its_word_index() {
    let image = MemoryImage::parse_hex("@40000000\n12345678\n").unwrap();
    let mut mem = DataMemory::with_words(64);

    let err = mem.load_image(&image).unwrap_err();
    assert_eq!(
        err,
        MemError::SpanOutOfRange {
            base_word: 0x4000_0000,
            len: 1,
            words: 64
        }
    );
    assert_eq!(
        err.to_string(),
        "preload of 1 words at word 0x40000000 exceeds memory (64 words)"
    );
    assert!(mem.storage().words().all(|w| w == 0));
}

#[test]
fn image_lands_in_memory() {
    let image = MemoryImage::parse_hex("# data\n11223344\n@2 80\n").unwrap();
    let mut mem = DataMemory::with_words(4);
    mem.load_image(&image).unwrap();
    assert_eq!(mem.load(rvmem_core::LoadType::Lbu, 0x0), Ok(0x44));
    assert_eq!(mem.load(rvmem_core::LoadType::Lb, 0x8), Ok(0xFFFF_FF80));
}
