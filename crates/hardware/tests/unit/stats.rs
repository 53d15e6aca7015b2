//! Statistics Tests.
//!
//! Counter updates per retired instruction class, derived CPI, and the section
//! filter of the text report.

use mipsim_core::isa::abi::Register;
use mipsim_core::isa::decode::decode;
use mipsim_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn test_record_retire_by_class() {
    let mut stats = SimStats::default();
    for raw in [
        add(Register::T0, Register::T1, Register::T2),
        lw(Register::T0, 0, Register::SP),
        sw(Register::T0, 0, Register::SP),
        beq(Register::T0, Register::T1, 1),
        jal(0),
        mult(Register::T0, Register::T1),
        syscall(),
    ] {
        stats.record_retire(&decode(raw, 0).unwrap());
    }
    assert_eq!(stats.instructions_retired, 7);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.inst_muldiv, 1);
    assert_eq!(stats.inst_system, 1);
}

#[test]
fn test_cpi() {
    let mut stats = SimStats::default();
    assert!(stats.cpi().abs() < f64::EPSILON);
    stats.cycles = 10;
    stats.instructions_retired = 4;
    assert!((stats.cpi() - 2.5).abs() < 1e-9);
}

#[test]
fn test_summary_line() {
    let mut ctx = TestContext::new(&[addi(Register::T0, Register::ZERO, 1)]);
    let summary = ctx.run(1).summary();
    assert!(summary.starts_with("cycles=5 retired=1 cpi=5.000"), "{summary}");
}

#[test]
fn test_render_all_sections() {
    let report = SimStats::default().render_sections(&[]);
    assert!(report.contains("MIPS PIPELINE SIMULATION STATISTICS"));
    assert!(report.contains("sim_cycles"));
    assert!(report.contains("CORE BREAKDOWN"));
    assert!(report.contains("INSTRUCTION MIX"));
    assert_eq!(STATS_SECTIONS.len(), 3);
}

#[test]
fn test_render_selected_section() {
    let report = SimStats::default().render_sections(&["core".to_string()]);
    assert!(report.contains("stalls.data"));
    assert!(!report.contains("sim_cycles"));
    assert!(!report.contains("INSTRUCTION MIX"));
}
