//! Configuration system for the data-memory model.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the model. It provides:
//! 1. **Defaults:** Baseline deployment constants (array size, policies).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Enums:** Policies for the cases the hardware leaves undefined (misaligned
//!    accesses, simultaneous read and write enables).
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::{MAX_WORDS, WORD_BYTES};

/// Default configuration constants for the model.
mod defaults {
    /// Number of 32-bit words in the storage array (4 KiB).
    pub const SIZE_WORDS: usize = 1024;
}

/// Policy for halfword and word accesses that are not naturally aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MisalignedPolicy {
    /// Reject the access with [`MemError::Misaligned`](crate::common::MemError::Misaligned).
    ///
    /// Nothing is written and `read_data` holds its previous value.
    #[default]
    Trap,
    /// Best-effort lane mapping: halfwords use the lane pair picked by `addr[1]`
    /// and words ignore the low address bits.
    Lane,
}

/// Policy for cycles that assert both `mem_read` and `mem_write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ConflictPolicy {
    /// Report [`MemError::ConflictingEnables`](crate::common::MemError::ConflictingEnables)
    /// and perform neither access.
    #[default]
    Reject,
    /// Commit the store and hold `read_data`, as a load-store unit that
    /// prioritizes writes would.
    WriteFirst,
}

/// Errors raised while loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON document did not match the configuration schema.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The storage array must hold at least one word.
    #[error("memory.size_words must be non-zero")]
    EmptyMemory,
    /// The storage array is larger than a 32-bit address can reach.
    #[error("memory.size_words is {words}, but a 32-bit address reaches at most {max} words")]
    MemoryTooLarge {
        /// The configured word count.
        words: usize,
        /// The largest accepted word count.
        max: usize,
    },
}

/// Root configuration structure containing all model settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rvmem_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_accesses);
/// assert_eq!(config.memory.size_words, 1024);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rvmem_core::config::{Config, ConflictPolicy, MisalignedPolicy};
///
/// let json = r#"{
///     "general": { "trace_accesses": true },
///     "memory": {
///         "size_words": 256,
///         "misaligned": "Lane",
///         "conflicting_enables": "WriteFirst"
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_accesses);
/// assert_eq!(config.memory.size_words, 256);
/// assert_eq!(config.memory.misaligned, MisalignedPolicy::Lane);
/// assert_eq!(config.memory.conflicting_enables, ConflictPolicy::WriteFirst);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General model settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Storage array and access policy configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyMemory`] for a zero-word array.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMemory`] if `memory.size_words` is zero, or
    /// [`ConfigError::MemoryTooLarge`] if it exceeds [`MAX_WORDS`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let words = self.memory.size_words;
        if words == 0 {
            return Err(ConfigError::EmptyMemory);
        }
        if words > MAX_WORDS {
            return Err(ConfigError::MemoryTooLarge {
                words,
                max: MAX_WORDS,
            });
        }
        Ok(())
    }
}

/// General model settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every cycle (enables, address, result) at `info` level.
    #[serde(default)]
    pub trace_accesses: bool,
}

/// Storage array size and access policies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Number of 32-bit words in the storage array.
    #[serde(default = "MemoryConfig::default_size_words")]
    pub size_words: usize,

    /// Handling of misaligned halfword and word accesses.
    #[serde(default)]
    pub misaligned: MisalignedPolicy,

    /// Handling of cycles that assert both enables.
    #[serde(default)]
    pub conflicting_enables: ConflictPolicy,
}

impl MemoryConfig {
    /// Returns the default storage array size in words.
    const fn default_size_words() -> usize {
        defaults::SIZE_WORDS
    }

    /// Size of the storage array in bytes, or `None` if it does not fit in `usize`.
    pub const fn size_bytes(&self) -> Option<usize> {
        self.size_words.checked_mul(WORD_BYTES)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: defaults::SIZE_WORDS,
            misaligned: MisalignedPolicy::default(),
            conflicting_enables: ConflictPolicy::default(),
        }
    }
}
