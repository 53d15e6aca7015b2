//! Register File Tests.
//!
//! Covers the pending-write protocol that stands in for a forwarding network:
//! `invalidate` at issue, `write` at writeback, and the `$zero` special case.

use mipsim_core::common::error::SimError;
use mipsim_core::common::reg::RegisterFile;
use mipsim_core::isa::abi::Register;

#[test]
fn test_reset_state_is_zero_and_valid() {
    let regs = RegisterFile::new();
    for i in 0..32 {
        let r = Register::from_field(i);
        assert_eq!(regs.read(r), 0);
        assert!(regs.check(r));
    }
    assert!(regs.check(Register::HI_LO));
    assert_eq!(regs.pending(), 0);
}

#[test]
fn test_invalidate_then_write_commits() {
    let mut regs = RegisterFile::new();
    regs.invalidate(Register::T0);
    assert!(!regs.check(Register::T0));
    assert_eq!(regs.pending(), 1);

    regs.write(Register::T0, 42).unwrap();
    assert!(regs.check(Register::T0));
    assert_eq!(regs.read(Register::T0), 42);
    assert_eq!(regs.pending(), 0);
}

#[test]
fn test_write_without_invalidate_is_rejected() {
    let mut regs = RegisterFile::new();
    let err = regs.write(Register::T1, 7).unwrap_err();
    assert!(matches!(err, SimError::RegisterNotPending { reg: 9 }));
    assert_eq!(regs.read(Register::T1), 0);
}

#[test]
fn test_zero_register_is_hardwired() {
    let mut regs = RegisterFile::new();
    regs.invalidate(Register::ZERO);
    assert!(regs.check(Register::ZERO));
    regs.write(Register::ZERO, 0xDEAD).unwrap();
    assert_eq!(regs.read(Register::ZERO), 0);
}

#[test]
fn test_hi_lo_is_tracked() {
    let mut regs = RegisterFile::new();
    regs.invalidate(Register::HI_LO);
    assert!(!regs.check(Register::HI_LO));
    regs.write(Register::HI_LO, 0x0000_0001_0000_0002).unwrap();
    assert_eq!(regs.read(Register::HI_LO), 0x0000_0001_0000_0002);
}

#[test]
fn test_dump_lists_abi_names() {
    let mut regs = RegisterFile::new();
    regs.invalidate(Register::T2);
    regs.write(Register::T2, 0x1234).unwrap();
    let dump = regs.dump();
    assert_eq!(dump.lines().count(), 8);
    assert!(dump.contains("$t2   =0x00001234"), "{dump}");
    assert!(dump.starts_with("$zero"));
}
