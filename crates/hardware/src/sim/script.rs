//! Access scripts.
//!
//! A script is a text file with one clock cycle per line:
//!
//! ```text
//! sw   0x10 0xAABBCCDD        # store word
//! lw   0x10 => 0xAABBCCDD     # load word, expect a value
//! lbu  0x15
//! idle
//! cycle r=1 w=1 lt=0b010 st=0b10 addr=0x10 data=0   # raw control lines
//! ```
//!
//! Numbers accept `0x`, `0b`, or decimal, with optional `_` separators.
//! Blank lines and `#` / `//` comments are ignored. An optional `=> value`
//! suffix records the `read_data` expected after the cycle.

use thiserror::Error;

use super::strip_comment;
use crate::common::MemError;
use crate::core::signals::{LoadType, MemSignals, StoreType};
use crate::soc::DataMemory;

/// Errors raised while parsing an access script.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The first token is not a known operation.
    #[error("line {line}: unknown operation '{op}'")]
    UnknownOp {
        /// 1-based line number.
        line: usize,
        /// The offending mnemonic.
        op: String,
    },
    /// The operation is missing an operand.
    #[error("line {line}: '{op}' expects {expected}")]
    MissingOperand {
        /// 1-based line number.
        line: usize,
        /// The operation mnemonic.
        op: String,
        /// Description of the expected operands.
        expected: &'static str,
    },
    /// A token is not a valid number for its field.
    #[error("line {line}: invalid number '{text}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        text: String,
    },
    /// A `cycle` line names a field that does not exist.
    #[error("line {line}: unknown field '{field}'")]
    UnknownField {
        /// 1-based line number.
        line: usize,
        /// The offending field name.
        field: String,
    },
    /// Extra tokens after a complete operation.
    #[error("line {line}: unexpected '{text}'")]
    TrailingInput {
        /// 1-based line number.
        line: usize,
        /// The first unexpected token.
        text: String,
    },
}

/// One parsed cycle of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based source line.
    pub line: usize,
    /// Source text with comments stripped.
    pub text: String,
    /// Control inputs for the cycle.
    pub signals: MemSignals,
    /// Expected `read_data` after the cycle, if given.
    pub expect: Option<u32>,
}

/// Result of running one [`ScriptStep`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// The step that ran.
    pub step: ScriptStep,
    /// `read_data` after the cycle, or the fault it raised.
    pub result: Result<u32, MemError>,
}

impl StepOutcome {
    /// Returns true unless the step carried an expectation that was not met.
    ///
    /// A faulting step with an expectation counts as a mismatch.
    pub fn passed(&self) -> bool {
        match (self.step.expect, &self.result) {
            (None, _) => true,
            (Some(want), Ok(got)) => want == *got,
            (Some(_), Err(_)) => false,
        }
    }
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the first [`ScriptError`] encountered.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let body = strip_comment(raw).trim();
        if body.is_empty() {
            continue;
        }
        steps.push(parse_line(line, body)?);
    }
    Ok(steps)
}

/// Runs every step against `memory`, one cycle each.
///
/// Faults are recorded per step; the run continues with the next cycle.
pub fn run_script(memory: &mut DataMemory, steps: &[ScriptStep]) -> Vec<StepOutcome> {
    steps
        .iter()
        .map(|step| StepOutcome {
            step: step.clone(),
            result: memory.cycle(&step.signals),
        })
        .collect()
}

fn parse_line(line: usize, body: &str) -> Result<ScriptStep, ScriptError> {
    let (access, expect) = match body.split_once("=>") {
        Some((access, expect)) => (access.trim(), Some(parse_u32(line, expect.trim())?)),
        None => (body, None),
    };

    let mut tokens = access.split_whitespace();
    let op = tokens.next().unwrap_or_default().to_ascii_lowercase();

    let signals = match op.as_str() {
        "idle" | "nop" => MemSignals::idle(),
        "cycle" => parse_raw_cycle(line, &mut tokens)?,
        _ => {
            if let Some(width) = LoadType::ALL.into_iter().find(|w| w.mnemonic() == op) {
                let addr = operand(line, &op, tokens.next(), "<addr>")?;
                MemSignals::load(width, addr)
            } else if let Some(width) = StoreType::ALL.into_iter().find(|w| w.mnemonic() == op) {
                let addr = operand(line, &op, tokens.next(), "<addr> <value>")?;
                let value = operand(line, &op, tokens.next(), "<addr> <value>")?;
                MemSignals::store(width, addr, value)
            } else {
                return Err(ScriptError::UnknownOp { line, op });
            }
        }
    };

    if let Some(extra) = tokens.next() {
        return Err(ScriptError::TrailingInput {
            line,
            text: extra.to_owned(),
        });
    }

    Ok(ScriptStep {
        line,
        text: body.to_owned(),
        signals,
        expect,
    })
}

fn parse_raw_cycle<'a>(
    line: usize,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<MemSignals, ScriptError> {
    let mut signals = MemSignals::idle();
    for token in tokens {
        let (field, value) = token.split_once('=').ok_or_else(|| ScriptError::UnknownField {
            line,
            field: token.to_owned(),
        })?;
        let value = parse_u32(line, value)?;
        let narrow = |bits: u32| {
            u8::try_from(value)
                .ok()
                .filter(|v| u32::from(*v) < (1 << bits))
                .ok_or_else(|| ScriptError::InvalidNumber {
                    line,
                    text: token.to_owned(),
                })
        };
        match field {
            "r" | "mem_read" => signals.mem_read = narrow(1)? == 1,
            "w" | "mem_write" => signals.mem_write = narrow(1)? == 1,
            "lt" | "load_type" => signals.load_type = narrow(3)?,
            "st" | "store_type" => signals.store_type = narrow(2)?,
            "addr" | "address" => signals.address = value,
            "data" | "store_data" => signals.store_data = value,
            _ => {
                return Err(ScriptError::UnknownField {
                    line,
                    field: field.to_owned(),
                });
            }
        }
    }
    Ok(signals)
}

fn operand(
    line: usize,
    op: &str,
    token: Option<&str>,
    expected: &'static str,
) -> Result<u32, ScriptError> {
    let token = token.ok_or_else(|| ScriptError::MissingOperand {
        line,
        op: op.to_owned(),
        expected,
    })?;
    parse_u32(line, token)
}

fn parse_u32(line: usize, text: &str) -> Result<u32, ScriptError> {
    let cleaned = text.replace('_', "");
    let hex = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"));
    let bin = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"));
    let parsed = if let Some(hex) = hex {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = bin {
        u32::from_str_radix(bin, 2)
    } else {
        cleaned.parse()
    };
    parsed.map_err(|_| ScriptError::InvalidNumber {
        line,
        text: text.to_owned(),
    })
}
