//! Run Termination Tests.
//!
//! A run stops as soon as the total number of retired instructions reaches the
//! requested count. Retirement happens once per writeback hit, so the count is
//! never overshot.

use mipsim_core::isa::abi::Register;
use proptest::prelude::*;

use crate::common::builder::instruction::*;
use crate::common::harness::{TestContext, trace_line};

fn straight_line(n: usize) -> Vec<u32> {
    (0..n)
        .map(|i| addi(Register::from_field(8 + (i % 8) as u32), Register::ZERO, i as i16))
        .collect()
}

#[test]
fn test_runs_exactly_n_retirements() {
    let mut ctx = TestContext::new(&straight_line(10));
    let stats = ctx.run(6);
    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.cycles, 10);
}

#[test]
fn test_zero_target_runs_no_cycles() {
    let mut ctx = TestContext::new(&straight_line(2));
    let trace = ctx.run_trace(0);
    assert!(trace.is_empty());
    assert_eq!(ctx.stats().cycles, 0);
}

#[test]
fn test_target_is_cumulative() {
    let mut ctx = TestContext::new(&straight_line(8));
    let _ = ctx.run(3);
    let _ = ctx.run(5);
    assert_eq!(ctx.stats().instructions_retired, 5);
    assert_eq!(ctx.stats().cycles, 9);
}

#[test]
fn test_one_block_per_cycle() {
    let mut ctx = TestContext::new(&straight_line(4));
    let trace = ctx.run_trace(4);
    let cycles = ctx.stats().cycles;
    assert_eq!(trace.lines().count() as u64, cycles * 6);
    assert!(trace_line(&trace, "writeback", cycles - 1).is_some());
    assert!(trace_line(&trace, "fetch", cycles).is_none());
}

#[test]
fn test_manual_ticks() {
    let mut ctx = TestContext::new(&straight_line(2));
    for _ in 0..4 {
        ctx.tick();
    }
    assert_eq!(ctx.stats().instructions_retired, 0);
    ctx.tick();
    assert_eq!(ctx.stats().instructions_retired, 1);
    assert!(ctx.sim.pipeline.slots.retired);
    assert_eq!(ctx.sim.pipeline.cycle, 5);
}

#[test]
fn test_finish_returns_stats() {
    let mut ctx = TestContext::new(&straight_line(3));
    let _ = ctx.run(3);
    let stats = ctx.sim.finish();
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_alu, 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_straight_line_retires_one_per_cycle(n in 1u64..64) {
        let mut ctx = TestContext::new(&straight_line(64));
        let stats = ctx.run(n);
        prop_assert_eq!(stats.instructions_retired, n);
        prop_assert_eq!(stats.cycles, n + 4);
    }
}
