//! Configuration Tests.
//!
//! Verifies defaults, JSON parsing with partial sections, file loading, and
//! validation.

use std::io::Write;

use pretty_assertions::assert_eq;
use rvmem_core::DataMemory;
use rvmem_core::config::{Config, ConfigError, ConflictPolicy, MisalignedPolicy};

#[test]
fn defaults_match_reference_memory() {
    let config = Config::default();
    assert_eq!(config.memory.size_words, 1024);
    assert_eq!(config.memory.size_bytes(), Some(4096));
    assert_eq!(config.memory.misaligned, MisalignedPolicy::Trap);
    assert_eq!(config.memory.conflicting_enables, ConflictPolicy::Reject);
    assert!(!config.general.trace_accesses);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());

    let config = Config::from_json(r#"{ "memory": { "size_words": 16 } }"#).unwrap();
    assert_eq!(config.memory.size_words, 16);
    assert_eq!(config.memory.misaligned, MisalignedPolicy::Trap);
}

#[test]
fn policies_parse_by_name() {
    let config = Config::from_json(
        r#"{ "memory": { "misaligned": "Lane", "conflicting_enables": "WriteFirst" } }"#,
    )
    .unwrap();
    assert_eq!(config.memory.misaligned, MisalignedPolicy::Lane);
    assert_eq!(config.memory.conflicting_enables, ConflictPolicy::WriteFirst);
}

#[test]
fn zero_words_is_rejected() {
    let err = Config::from_json(r#"{ "memory": { "size_words": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyMemory));
}

#[test]
fn size_past_the_address_space_is_rejected() {
    let max = 1usize << 30;
    let json = |words: usize| format!(r#"{{ "memory": {{ "size_words": {words} }} }}"#);

    let config = Config::from_json(&json(max)).unwrap();
    assert_eq!(config.memory.size_words, max);

    for words in [max + 1, usize::MAX / 4 + 2] {
        let err = Config::from_json(&json(words)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MemoryTooLarge { words: w, max: m } if w == words && m == max
        ));
    }
}

#[test]
fn hand_built_oversized_config_is_rejected_by_memory() {
    let mut config = Config::default();
    config.memory.size_words = usize::MAX;
    assert_eq!(config.memory.size_bytes(), None);
    assert!(matches!(
        DataMemory::new(&config),
        Err(ConfigError::MemoryTooLarge { .. })
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Config::from_json(r#"{ "memory": { "misaligned": "Sometimes" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "general": {{ "trace_accesses": true }} }}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.trace_accesses);
    assert_eq!(config.memory.size_words, 1024);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
