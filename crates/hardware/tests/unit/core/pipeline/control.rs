//! Control Flow Tests.
//!
//! Fetch is blocked from the moment a branch or jump issues until it retires; the
//! retirement redirects the PC and the next fetch reads the resolved target. No
//! instruction after a taken branch ever executes.

use mipsim_core::isa::abi::Register;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::{TEXT_BASE, TestContext, trace_line};

const BASE: u32 = TEXT_BASE as u32;

#[test]
fn test_jump_redirects_fetch() {
    let mut ctx = TestContext::new(&[
        j(BASE + 0x10),
        addi(Register::T0, Register::ZERO, 1),
        addi(Register::T0, Register::ZERO, 2),
        addi(Register::T0, Register::ZERO, 3),
        addi(Register::T1, Register::ZERO, 7),
    ]);
    let trace = ctx.run_trace(2);

    assert_eq!(trace_line(&trace, "writeback", 4), Some("j 0x100004"));
    let target_word = format!("{:#x}", addi(Register::T1, Register::ZERO, 7));
    assert_eq!(trace_line(&trace, "fetch", 4), Some(target_word.as_str()));
    for cycle in 1..4 {
        assert_eq!(trace_line(&trace, "fetch", cycle), Some("0x0"), "cycle {cycle}");
    }

    assert_eq!(ctx.reg(Register::T1), 7);
    assert_eq!(ctx.reg(Register::T0), 0);
    assert_eq!(ctx.stats().stalls_control, 3);
}

#[test]
fn test_taken_branch_skips_fallthrough() {
    let mut ctx = TestContext::new(&[
        addi(Register::T0, Register::ZERO, 3),
        addi(Register::T1, Register::ZERO, 3),
        beq(Register::T0, Register::T1, 1),
        addi(Register::T2, Register::ZERO, 99),
        addi(Register::T3, Register::ZERO, 1),
    ]);
    let _ = ctx.run(4);
    assert_eq!(ctx.reg(Register::T2), 0);
    assert_eq!(ctx.reg(Register::T3), 1);
}

#[test]
fn test_untaken_branch_falls_through() {
    let mut ctx = TestContext::new(&[
        bne(Register::ZERO, Register::ZERO, 4),
        addi(Register::T2, Register::ZERO, 5),
    ]);
    let _ = ctx.run(2);
    assert_eq!(ctx.reg(Register::T2), 5);
    // Untaken branches still block fetch until they retire.
    assert_eq!(ctx.stats().stalls_control, 3);
}

#[test]
fn test_counted_loop() {
    // t0 = 3; loop: t1 += 2; t0 -= 1; bne t0, zero, loop
    let mut ctx = TestContext::new(&[
        addi(Register::T0, Register::ZERO, 3),
        addi(Register::T1, Register::T1, 2),
        addi(Register::T0, Register::T0, -1),
        bne(Register::T0, Register::ZERO, -3),
        addi(Register::T2, Register::ZERO, 1),
    ]);
    let _ = ctx.run(1 + 3 * 3 + 1);
    assert_eq!(ctx.reg(Register::T1), 6);
    assert_eq!(ctx.reg(Register::T0), 0);
    assert_eq!(ctx.reg(Register::T2), 1);
}

#[test]
fn test_call_and_return() {
    // 0x00: jal sub       0x10: sub: addi v0, zero, 42
    // 0x04: addi t0, v0, 1    0x14: jr ra
    let mut ctx = TestContext::new(&[
        jal(BASE + 0x10),
        addi(Register::T0, Register::V0, 1),
        nop(),
        nop(),
        addi(Register::V0, Register::ZERO, 42),
        jr(Register::RA),
    ]);
    let retired = ctx.run_retired(4);

    assert_eq!(ctx.reg(Register::RA), u64::from(BASE + 4));
    assert_eq!(ctx.reg(Register::T0), 43);
    assert_eq!(
        retired,
        "jal 0x100004\naddi $v0, $zero, 0x2a\njr $ra\naddi $t0, $v0, 0x1\n"
    );
}

#[test]
fn test_jalr_links_destination() {
    let mut ctx = TestContext::new(&[
        lui(Register::T0, 0x0040),
        ori(Register::T0, Register::T0, 0x000C),
        jalr(Register::S0, Register::T0),
        addi(Register::T1, Register::ZERO, 1),
    ]);
    let _ = ctx.run(4);
    assert_eq!(ctx.reg(Register::S0), u64::from(BASE + 12));
    assert_eq!(ctx.reg(Register::T1), 1);
}
