//! Test harness.
//!
//! Wraps a [`DataMemory`] sized for tests and exposes one helper per access
//! width so tests read like the instruction sequence they model.

use rvmem_core::common::MemError;
use rvmem_core::config::{Config, ConfigError};
use rvmem_core::core::signals::{LoadType, MemSignals, StoreType};
use rvmem_core::DataMemory;
use tracing_subscriber::EnvFilter;

/// Word count used by [`TestContext::new`].
pub const TEST_WORDS: usize = 64;

/// Installs a test-writer subscriber once per process; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A data memory plus convenience accessors.
#[derive(Debug)]
pub struct TestContext {
    /// The memory under test.
    pub mem: DataMemory,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A zeroed memory of [`TEST_WORDS`] words with default policies.
    pub fn new() -> Self {
        init_tracing();
        Self {
            mem: DataMemory::with_words(TEST_WORDS),
        }
    }

    /// A memory built from an explicit configuration.
    pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
        init_tracing();
        Ok(Self {
            mem: DataMemory::new(config)?,
        })
    }

    /// Preloads whole words from word 0.
    pub fn with_words(mut self, words: &[u32]) -> Result<Self, MemError> {
        self.mem.preload(0, words)?;
        Ok(self)
    }

    /// Runs one raw cycle.
    pub fn cycle(&mut self, signals: MemSignals) -> Result<u32, MemError> {
        self.mem.cycle(&signals)
    }

    /// `sb addr, value`
    pub fn sb(&mut self, addr: u32, value: u32) -> Result<(), MemError> {
        self.mem.store(StoreType::Sb, addr, value)
    }

    /// `sh addr, value`
    pub fn sh(&mut self, addr: u32, value: u32) -> Result<(), MemError> {
        self.mem.store(StoreType::Sh, addr, value)
    }

    /// `sw addr, value`
    pub fn sw(&mut self, addr: u32, value: u32) -> Result<(), MemError> {
        self.mem.store(StoreType::Sw, addr, value)
    }

    /// `lb addr`
    pub fn lb(&mut self, addr: u32) -> Result<u32, MemError> {
        self.mem.load(LoadType::Lb, addr)
    }

    /// `lh addr`
    pub fn lh(&mut self, addr: u32) -> Result<u32, MemError> {
        self.mem.load(LoadType::Lh, addr)
    }

    /// `lw addr`
    pub fn lw(&mut self, addr: u32) -> Result<u32, MemError> {
        self.mem.load(LoadType::Lw, addr)
    }

    /// `lbu addr`
    pub fn lbu(&mut self, addr: u32) -> Result<u32, MemError> {
        self.mem.load(LoadType::Lbu, addr)
    }

    /// `lhu addr`
    pub fn lhu(&mut self, addr: u32) -> Result<u32, MemError> {
        self.mem.load(LoadType::Lhu, addr)
    }

    /// Raw word at `index`, bypassing the clock.
    pub fn word(&self, index: usize) -> Option<u32> {
        self.mem.storage().word(index)
    }

    /// Snapshot of every word in the array.
    pub fn snapshot(&self) -> Vec<u32> {
        self.mem.storage().words().collect()
    }
}
