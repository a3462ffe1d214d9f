//! Data-memory access statistics.
//!
//! This module tracks per-run counters for the data memory. It provides:
//! 1. **Cycles:** Total and idle cycles.
//! 2. **Access mix:** Loads and stores broken down by width.
//! 3. **Faults:** Rejected accesses by kind, plus degenerate (unknown-code) loads.
//!
//! Counters serialize to JSON for scripted runs and render as a fixed-width report.

use std::fmt;

use serde::Serialize;

use crate::common::MemError;
use crate::core::signals::{LoadType, StoreType};

/// Load counts per width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadMix {
    /// Signed byte loads.
    pub lb: u64,
    /// Signed halfword loads.
    pub lh: u64,
    /// Word loads.
    pub lw: u64,
    /// Unsigned byte loads.
    pub lbu: u64,
    /// Unsigned halfword loads.
    pub lhu: u64,
}

impl LoadMix {
    /// Total loads across every width.
    pub const fn total(&self) -> u64 {
        self.lb + self.lh + self.lw + self.lbu + self.lhu
    }
}

/// Store counts per width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StoreMix {
    /// Byte stores.
    pub sb: u64,
    /// Halfword stores.
    pub sh: u64,
    /// Word stores.
    pub sw: u64,
}

impl StoreMix {
    /// Total stores across every width.
    pub const fn total(&self) -> u64 {
        self.sb + self.sh + self.sw
    }
}

/// Rejected accesses per fault kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FaultCounts {
    /// [`MemError::AddressOutOfRange`] faults.
    pub address_out_of_range: u64,
    /// [`MemError::InvalidWidthCode`] faults (stores only; loads degrade to zero).
    pub invalid_width_code: u64,
    /// [`MemError::ConflictingEnables`] faults.
    pub conflicting_enables: u64,
    /// [`MemError::Misaligned`] faults.
    pub misaligned: u64,
}

impl FaultCounts {
    /// Total rejected accesses.
    pub const fn total(&self) -> u64 {
        self.address_out_of_range
            + self.invalid_width_code
            + self.conflicting_enables
            + self.misaligned
    }
}

/// Counters collected by [`DataMemory`](crate::soc::DataMemory) over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemStats {
    /// Clock edges seen.
    pub cycles: u64,
    /// Cycles with neither enable asserted.
    pub idle_cycles: u64,
    /// Completed loads by width.
    pub loads: LoadMix,
    /// Committed stores by width.
    pub stores: StoreMix,
    /// Loads with an unknown width code that returned zero.
    pub degenerate_loads: u64,
    /// Rejected accesses by kind.
    pub faults: FaultCounts,
}

impl MemStats {
    /// Counts a completed load.
    pub const fn record_load(&mut self, width: LoadType) {
        match width {
            LoadType::Lb => self.loads.lb += 1,
            LoadType::Lh => self.loads.lh += 1,
            LoadType::Lw => self.loads.lw += 1,
            LoadType::Lbu => self.loads.lbu += 1,
            LoadType::Lhu => self.loads.lhu += 1,
        }
    }

    /// Counts a committed store.
    pub const fn record_store(&mut self, width: StoreType) {
        match width {
            StoreType::Sb => self.stores.sb += 1,
            StoreType::Sh => self.stores.sh += 1,
            StoreType::Sw => self.stores.sw += 1,
        }
    }

    /// Counts a rejected access.
    pub const fn record_fault(&mut self, err: &MemError) {
        match err {
            MemError::AddressOutOfRange { .. } => self.faults.address_out_of_range += 1,
            MemError::InvalidWidthCode { .. } => self.faults.invalid_width_code += 1,
            MemError::ConflictingEnables { .. } => self.faults.conflicting_enables += 1,
            MemError::Misaligned { .. } => self.faults.misaligned += 1,
            // Preloads run outside the clocked path.
            MemError::SpanOutOfRange { .. } => {}
        }
    }

    /// Serializes the counters as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for MemStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |n: u64| {
            if self.cycles == 0 {
                0.0
            } else {
                (n as f64 / self.cycles as f64) * 100.0
            }
        };
        writeln!(f, "==========================================================")?;
        writeln!(f, "DATA MEMORY STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(
            f,
            "  cycles.idle            {} ({:.2}%)",
            self.idle_cycles,
            pct(self.idle_cycles)
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "ACCESS MIX")?;
        writeln!(f, "  op.load                {}", self.loads.total())?;
        writeln!(
            f,
            "    lb {}  lh {}  lw {}  lbu {}  lhu {}",
            self.loads.lb, self.loads.lh, self.loads.lw, self.loads.lbu, self.loads.lhu
        )?;
        writeln!(f, "  op.store               {}", self.stores.total())?;
        writeln!(
            f,
            "    sb {}  sh {}  sw {}",
            self.stores.sb, self.stores.sh, self.stores.sw
        )?;
        writeln!(f, "  load.degenerate        {}", self.degenerate_loads)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "FAULTS                   {}", self.faults.total())?;
        writeln!(f, "  address_out_of_range   {}", self.faults.address_out_of_range)?;
        writeln!(f, "  invalid_width_code     {}", self.faults.invalid_width_code)?;
        writeln!(f, "  conflicting_enables    {}", self.faults.conflicting_enables)?;
        write!(f, "  misaligned             {}", self.faults.misaligned)
    }
}
