//! Data memory subsystem.
//!
//! This module wires the store encoder, the storage array, and the load decoder
//! into a single clocked unit. It performs:
//! 1. **Store cycles:** Encodes payload and byte-enable mask and commits them on the edge.
//! 2. **Load cycles:** Reads the addressed word and slices/extends it into `read_data`.
//! 3. **Idle cycles:** Holds `read_data` at its last decoded value.
//! 4. **Contract checks:** Applies the configured policies for misaligned accesses
//!    and simultaneous enables, and reports faults without touching storage.

use std::ops::Range;

use crate::common::{AccessType, ByteAddr, MemError, WORD_BYTES};
use crate::config::{Config, ConfigError, ConflictPolicy, MemoryConfig, MisalignedPolicy};
use crate::core::lsu::unaligned::check_alignment;
use crate::core::lsu::{decode_load_code, encode_store};
use crate::core::signals::{LoadType, MemSignals, StoreType};
use crate::sim::loader::MemoryImage;
use crate::soc::memory::StorageArray;
use crate::stats::MemStats;

/// The clocked data memory: one storage array plus the combinational encoder and decoder.
///
/// The storage array is owned here and only mutated through [`DataMemory::cycle`]
/// (and the preload helpers used before a run starts).
#[derive(Clone, Debug)]
pub struct DataMemory {
    storage: StorageArray,
    misaligned: MisalignedPolicy,
    conflicting_enables: ConflictPolicy,
    trace: bool,
    read_data: u32,
    stats: MemStats,
}

impl DataMemory {
    /// Builds a data memory from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Model configuration (array size, policies, tracing).
    ///
    /// # Returns
    ///
    /// A zeroed data memory with `read_data == 0`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut mem = Self::from_memory_config(&config.memory);
        mem.trace = config.general.trace_accesses;
        Ok(mem)
    }

    /// Builds a data memory of `words` words with the default policies.
    ///
    /// `words` is capped at [`MAX_WORDS`](crate::common::constants::MAX_WORDS).
    pub fn with_words(words: usize) -> Self {
        Self::from_memory_config(&MemoryConfig {
            size_words: words,
            ..MemoryConfig::default()
        })
    }

    fn from_memory_config(memory: &MemoryConfig) -> Self {
        Self {
            storage: StorageArray::new(memory.size_words),
            misaligned: memory.misaligned,
            conflicting_enables: memory.conflicting_enables,
            trace: false,
            read_data: 0,
            stats: MemStats::default(),
        }
    }

    /// Advances one clock edge.
    ///
    /// - Write enable only: the store is encoded and committed; `read_data` holds.
    /// - Read enable only: the addressed word is read and decoded into `read_data`.
    ///   An unknown load code yields `0` rather than a fault.
    /// - Neither: nothing happens; `read_data` holds.
    /// - Both: resolved by the configured [`ConflictPolicy`].
    ///
    /// # Arguments
    ///
    /// * `signals` - The control inputs sampled on this edge.
    ///
    /// # Returns
    ///
    /// `read_data` after the edge.
    ///
    /// # Errors
    ///
    /// Any [`MemError`]. A faulting cycle leaves both storage and `read_data` unchanged.
    pub fn cycle(&mut self, signals: &MemSignals) -> Result<u32, MemError> {
        self.stats.cycles += 1;

        let result = match (signals.mem_read, signals.mem_write) {
            (false, false) => {
                self.stats.idle_cycles += 1;
                Ok(self.read_data)
            }
            (false, true) => self.commit_store(signals).map(|()| self.read_data),
            (true, false) => self.decode_read(signals),
            (true, true) => match self.conflicting_enables {
                ConflictPolicy::Reject => Err(MemError::ConflictingEnables {
                    addr: signals.addr(),
                }),
                ConflictPolicy::WriteFirst => {
                    tracing::debug!(addr = %signals.addr(), "both enables asserted, store wins");
                    self.commit_store(signals).map(|()| self.read_data)
                }
            },
        };

        match &result {
            Ok(value) if self.trace => tracing::info!(
                cycle = self.stats.cycles,
                r = signals.mem_read,
                w = signals.mem_write,
                addr = %signals.addr(),
                "read_data={value:#010x}"
            ),
            Ok(_) => {}
            Err(err) => {
                self.stats.record_fault(err);
                tracing::warn!(
                    cycle = self.stats.cycles,
                    kind = err.kind(),
                    "access rejected: {err}"
                );
            }
        }
        result
    }

    /// Performs a single store cycle of the given width.
    ///
    /// # Errors
    ///
    /// As [`DataMemory::cycle`].
    pub fn store(&mut self, width: StoreType, addr: u32, value: u32) -> Result<(), MemError> {
        self.cycle(&MemSignals::store(width, addr, value)).map(|_| ())
    }

    /// Performs a single load cycle of the given width and returns the decoded value.
    ///
    /// # Errors
    ///
    /// As [`DataMemory::cycle`].
    pub fn load(&mut self, width: LoadType, addr: u32) -> Result<u32, MemError> {
        self.cycle(&MemSignals::load(width, addr))
    }

    /// The value presented to the register file, as of the last successful load.
    pub const fn read_data(&self) -> u32 {
        self.read_data
    }

    /// Read-only view of the storage array.
    pub const fn storage(&self) -> &StorageArray {
        &self.storage
    }

    /// Counters collected so far.
    pub const fn stats(&self) -> &MemStats {
        &self.stats
    }

    /// Copies whole words into storage starting at word index `base_word`.
    ///
    /// Intended for initialising memory before the first clock edge; does not
    /// count as a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::SpanOutOfRange`] if any word falls outside the array;
    /// nothing is written in that case.
    pub fn preload(&mut self, base_word: usize, words: &[u32]) -> Result<(), MemError> {
        self.storage.fill_words(base_word, words)
    }

    /// Copies every segment of a memory image into storage.
    ///
    /// All segments are range-checked before any is written.
    ///
    /// # Errors
    ///
    /// Returns [`MemError::SpanOutOfRange`] for the first segment that does not fit.
    pub fn load_image(&mut self, image: &MemoryImage) -> Result<(), MemError> {
        for segment in image.segments() {
            self.storage.check_span(segment.base_word, segment.words.len())?;
        }
        for segment in image.segments() {
            self.storage.fill_words(segment.base_word, &segment.words)?;
        }
        tracing::debug!(
            segments = image.segments().len(),
            words = image.word_count(),
            "memory image loaded"
        );
        Ok(())
    }

    /// Returns `(byte address, word)` pairs for the word indices in `range`,
    /// clipped to the array.
    pub fn dump(&self, range: Range<usize>) -> Vec<(ByteAddr, u32)> {
        let end = range.end.min(self.storage.len_words());
        (range.start..end)
            .filter_map(|index| {
                let word = self.storage.word(index)?;
                let addr = u32::try_from(index.checked_mul(WORD_BYTES)?).ok()?;
                Some((ByteAddr::new(addr), word))
            })
            .collect()
    }

    fn commit_store(&mut self, signals: &MemSignals) -> Result<(), MemError> {
        let width = StoreType::try_from(signals.store_type)?;
        let addr = signals.addr();
        check_alignment(addr, width.bytes(), AccessType::Write, self.misaligned)?;

        let encoded = encode_store(width, addr, signals.store_data);
        debug_assert_eq!(encoded.byte_enable.count(), width.bytes());
        self.storage
            .write(addr, encoded.payload, encoded.byte_enable)?;
        self.stats.record_store(width);

        tracing::debug!(
            %addr,
            %width,
            mask = %encoded.byte_enable,
            "store {:#010x}",
            signals.store_data
        );
        Ok(())
    }

    fn decode_read(&mut self, signals: &MemSignals) -> Result<u32, MemError> {
        let addr = signals.addr();
        let width = LoadType::from_code(signals.load_type);
        if let Some(width) = width {
            check_alignment(addr, width.bytes(), AccessType::Read, self.misaligned)?;
        }
        // Unknown codes still fetch the word, so range faults take precedence.
        let word = self.storage.read(addr)?;
        let value = decode_load_code(signals.load_type, addr, word);

        match width {
            Some(width) => {
                self.stats.record_load(width);
                tracing::debug!(%addr, %width, "load {word:#010x} -> {value:#010x}");
            }
            None => {
                self.stats.degenerate_loads += 1;
                tracing::warn!(
                    %addr,
                    code = signals.load_type,
                    "unknown load width code, read_data forced to zero"
                );
            }
        }
        self.read_data = value;
        Ok(value)
    }
}
