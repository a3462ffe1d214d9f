//! # Access Script Tests
//!
//! Parses and runs small scripts end to end against a data memory.

use pretty_assertions::assert_eq;
use rvmem_core::common::MemError;
use rvmem_core::core::signals::{LoadType, MemSignals};
use rvmem_core::sim::script::{ScriptError, parse_script, run_script};
use rvmem_core::DataMemory;

const SMOKE: &str = "\
# store then load, one per width
sw  0x10 0xAABBCCDD
lw  0x10            => 0xAABBCCDD
sb  0x14 0x7F
lb  0x14            => 0x7F
sb  0x15 0x80
lbu 0x15            => 0x80
sh  0x20 0x8001
lh  0x20            => 0xFFFF8001
lhu 0x20            => 0x8001
idle                => 0x8001
";

#[test]
fn smoke_script_passes() {
    let steps = parse_script(SMOKE).unwrap();
    assert_eq!(steps.len(), 10);

    let mut mem = DataMemory::with_words(64);
    let outcomes = run_script(&mut mem, &steps);
    let failed: Vec<_> = outcomes
        .iter()
        .filter(|o| !o.passed())
        .map(|o| o.step.line)
        .collect();
    assert_eq!(failed, Vec::<usize>::new());
    assert_eq!(mem.stats().cycles, 10);
}

#[test]
fn mismatch_is_reported() {
    let steps = parse_script("sw 0 5\nlw 0 => 6\n").unwrap();
    let mut mem = DataMemory::with_words(4);
    let outcomes = run_script(&mut mem, &steps);
    assert!(outcomes[0].passed());
    assert!(!outcomes[1].passed());
    assert_eq!(outcomes[1].result, Ok(5));
}

#[test]
fn faults_do_not_stop_the_run() {
    let steps = parse_script("sw 0x100 1\nsw 0 2\nlw 0 => 2\nlw 0x100 => 0\n").unwrap();
    let mut mem = DataMemory::with_words(4);
    let outcomes = run_script(&mut mem, &steps);

    assert!(matches!(
        outcomes[0].result,
        Err(MemError::AddressOutOfRange { .. })
    ));
    assert!(outcomes[0].passed());
    assert!(outcomes[2].passed());
    // A fault never satisfies an expectation.
    assert!(!outcomes[3].passed());
}

#[test]
fn raw_cycle_reaches_the_memory_unfiltered() {
    let steps = parse_script("cycle r=1 lt=0b110 addr=0").unwrap();
    assert_eq!(
        steps[0].signals,
        MemSignals {
            mem_read: true,
            load_type: 0b110,
            ..MemSignals::idle()
        }
    );
    let mut mem = DataMemory::with_words(1);
    mem.preload(0, &[0xFFFF_FFFF]).unwrap();
    let outcomes = run_script(&mut mem, &steps);
    assert_eq!(outcomes[0].result, Ok(0));
}

#[test]
fn comments_and_case_are_ignored() {
    let steps = parse_script("  // leading comment\nLHU 0x2 # trailing\nNOP\n").unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].signals, MemSignals::load(LoadType::Lhu, 2));
    assert_eq!(steps[0].line, 2);
    assert_eq!(steps[0].text, "LHU 0x2");
    assert!(steps[1].signals.is_idle());
}

#[test]
fn parse_errors_carry_line_numbers() {
    let err = parse_script("idle\nsw 0x10 zz\n").unwrap_err();
    assert_eq!(
        err,
        ScriptError::InvalidNumber {
            line: 2,
            text: "zz".to_owned()
        }
    );
    let err = parse_script("cycle q=1").unwrap_err();
    assert!(matches!(err, ScriptError::UnknownField { line: 1, .. }));
    assert_eq!(err.to_string(), "line 1: unknown field 'q'");
}
