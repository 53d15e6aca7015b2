//! Instruction Decoder Tests.
//!
//! Every instruction-table row must be reachable from its own encoding, and the
//! register-use pattern of each row must route the encoded fields to the right
//! source and destination slots.

use mipsim_core::common::error::SimError;
use mipsim_core::isa::abi::Register;
use mipsim_core::isa::decode::{decode, format_of};
use mipsim_core::isa::instruction::{Format, InstructionBits};
use mipsim_core::isa::opcodes::{ISA_SIZE, ISA_TABLE, OpClass, OpKind, lookup};
use rstest::rstest;

use crate::common::builder::instruction::*;

/// Encodes a table row with `s = $t1`, `t = $t2`, `d = $t0`, shamt 3 and imm 0x10.
fn encode_row(opcode: u32, funct: u32, format: Format) -> u32 {
    match format {
        Format::R => (9 << 21) | (10 << 16) | (8 << 11) | (3 << 6) | funct,
        Format::I => (opcode << 26) | (9 << 21) | (10 << 16) | 0x10,
        Format::J => (opcode << 26) | 0x10,
    }
}

#[test]
fn test_table_is_complete() {
    assert_eq!(ISA_TABLE.len(), ISA_SIZE);
    for entry in &ISA_TABLE {
        assert_eq!(entry.kind.entry().name, entry.name);
    }
}

#[test]
fn test_every_entry_decodes_to_itself() {
    for entry in &ISA_TABLE {
        let raw = encode_row(entry.opcode, entry.funct, entry.format);
        let instr = decode(raw, 0x0040_0000)
            .unwrap_or_else(|e| panic!("{} failed to decode: {e}", entry.name));
        assert_eq!(instr.kind, entry.kind, "{}", entry.name);
        assert_eq!(instr.mnemonic(), entry.name);
        assert_eq!(instr.format(), entry.format);
        assert_eq!(instr.raw, raw);
        assert_eq!(instr.pc, 0x0040_0000);
        assert_eq!((instr.v_src_a, instr.v_src_b, instr.v_dst), (0, 0, 0));
    }
}

#[test]
fn test_table_rows_are_unambiguous() {
    for (i, a) in ISA_TABLE.iter().enumerate() {
        for b in &ISA_TABLE[i + 1..] {
            let same = a.format == b.format
                && a.opcode == b.opcode
                && (a.format != Format::R || a.funct == b.funct);
            assert!(!same, "{} and {} share an encoding", a.name, b.name);
        }
    }
}

#[test]
fn test_add_register_slots() {
    // add $t0, $t1, $t2: opcode 0, funct 0x20, d=8, s=9, t=10
    let raw = add(Register::T0, Register::T1, Register::T2);
    assert_eq!(raw, 0x012A_4020);
    let instr = decode(raw, 0).unwrap();
    assert_eq!(instr.kind, OpKind::Add);
    assert_eq!(instr.dst, Register::T0);
    assert_eq!(instr.src_a, Register::T1);
    assert_eq!(instr.src_b, Register::T2);
}

#[rstest]
#[case::addi(addi(Register::T1, Register::A0, -4), Register::A0, Register::ZERO, Register::T1)]
#[case::lui(lui(Register::T0, 0x1000), Register::ZERO, Register::ZERO, Register::T0)]
#[case::lw(lw(Register::T3, 8, Register::SP), Register::SP, Register::ZERO, Register::T3)]
#[case::sw(sw(Register::T3, 8, Register::SP), Register::SP, Register::T3, Register::ZERO)]
#[case::beq(beq(Register::T0, Register::T1, 4), Register::T0, Register::T1, Register::ZERO)]
#[case::sll(sll(Register::T0, Register::T1, 2), Register::ZERO, Register::T1, Register::T0)]
#[case::jr(jr(Register::RA), Register::RA, Register::ZERO, Register::ZERO)]
#[case::jalr(jalr(Register::T2, Register::T1), Register::T1, Register::ZERO, Register::T2)]
#[case::jal(jal(0x0040_0100), Register::ZERO, Register::ZERO, Register::RA)]
#[case::j(j(0x0040_0100), Register::ZERO, Register::ZERO, Register::ZERO)]
#[case::mult(mult(Register::A0, Register::A1), Register::A0, Register::A1, Register::HI_LO)]
#[case::mflo(mflo(Register::V0), Register::HI_LO, Register::ZERO, Register::V0)]
#[case::syscall(syscall(), Register::ZERO, Register::ZERO, Register::ZERO)]
fn test_register_slots(
    #[case] raw: u32,
    #[case] src_a: Register,
    #[case] src_b: Register,
    #[case] dst: Register,
) {
    let instr = decode(raw, 0).unwrap();
    assert_eq!((instr.src_a, instr.src_b, instr.dst), (src_a, src_b, dst));
}

#[test]
fn test_mthi_preserves_lo_through_hi_lo_source() {
    let raw = r_type(0x11, Register::ZERO, Register::T0, Register::ZERO, 0);
    let instr = decode(raw, 0).unwrap();
    assert_eq!(instr.kind, OpKind::Mthi);
    assert_eq!(instr.src_a, Register::T0);
    assert_eq!(instr.src_b, Register::HI_LO);
    assert_eq!(instr.dst, Register::HI_LO);
}

#[rstest]
#[case(0x00, Format::R)]
#[case(0x02, Format::J)]
#[case(0x03, Format::J)]
#[case(0x1A, Format::J)]
#[case(0x08, Format::I)]
#[case(0x23, Format::I)]
fn test_format_selection(#[case] opcode: u32, #[case] format: Format) {
    assert_eq!(format_of(opcode), format);
}

#[test]
fn test_null_word_is_sll() {
    let instr = decode(0, 0).unwrap();
    assert_eq!(instr.kind, OpKind::Sll);
    assert!(!instr.touches_registers());
    assert_eq!(instr, mipsim_core::isa::instruction::Instruction::null());
}

#[rstest]
#[case::unknown_opcode(0xFC00_0000, 0x3F, 0)]
#[case::unknown_funct(0x0000_0001, 0, 0x01)]
fn test_unknown_instruction(#[case] raw: u32, #[case] opcode: u32, #[case] funct: u32) {
    assert_eq!(
        decode(raw, 0).unwrap_err(),
        SimError::UnknownInstruction { raw, opcode, funct }
    );
}

#[test]
fn test_i_format_ignores_low_bits_for_lookup() {
    // The low six bits of an I-format word are immediate, never funct.
    let raw = addi(Register::T0, Register::ZERO, 0x20);
    assert_eq!(decode(raw, 0).unwrap().kind, OpKind::Addi);
    assert_eq!(lookup(Format::I, 0x08, 0x3F).map(|e| e.kind), Some(OpKind::Addi));
    assert!(lookup(Format::R, 0x00, 0x3F).is_none());
}

#[test]
fn test_field_extraction() {
    let raw: u32 = 0x012A_40C0 | 0x20;
    assert_eq!(raw.opcode(), 0);
    assert_eq!(raw.rs(), Register::T1);
    assert_eq!(raw.rt(), Register::T2);
    assert_eq!(raw.rd(), Register::T0);
    assert_eq!(raw.shamt(), 3);
    assert_eq!(raw.funct(), 0x20);
    assert_eq!(0x0810_0004u32.jump_addr(), 0x10_0004);
}

#[test]
fn test_classes() {
    let class = |raw| decode(raw, 0).unwrap().class();
    assert_eq!(class(lw(Register::T0, 0, Register::SP)), OpClass::Load);
    assert_eq!(class(sb(Register::T0, 0, Register::SP)), OpClass::Store);
    assert_eq!(class(bne(Register::T0, Register::T1, 1)), OpClass::Branch);
    assert_eq!(class(jal(0)), OpClass::Jump);
    assert_eq!(class(div(Register::T0, Register::T1)), OpClass::MulDiv);
    assert_eq!(class(syscall()), OpClass::System);
    assert!(decode(j(0), 0).unwrap().is_jump());
    assert!(decode(beq(Register::ZERO, Register::ZERO, 0), 0).unwrap().is_jump());

    let store = decode(sw(Register::T0, 0, Register::SP), 0).unwrap();
    assert!(store.is_store() && !store.is_load());
    let load = decode(lw(Register::T0, 0, Register::SP), 0).unwrap();
    assert!(load.is_load() && !load.is_store());
    assert!(!decode(add(Register::T0, Register::T1, Register::T2), 0).unwrap().is_store());
}
