//! Disassembler Tests.
//!
//! Renderings are compared verbatim: the cycle trace and the `disasm` tool both
//! print exactly these strings.

use mipsim_core::config::Config;
use mipsim_core::isa::abi::Register;
use mipsim_core::isa::disasm::{disassemble, disassemble_section};
use mipsim_core::isa::instruction::Instruction;
use mipsim_core::sim::Section;
use mipsim_core::soc::FuncMemory;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[test]
fn test_add() {
    assert_eq!(disassemble(0x012A_4020).unwrap(), "add $t0, $t1, $t2");
}

#[test]
fn test_null_instruction() {
    assert_eq!(Instruction::null().to_string(), "sll $zero, $zero, 0x0");
}

#[rstest]
#[case(addi(Register::T1, Register::ZERO, 5), "addi $t1, $zero, 0x5")]
#[case(addi(Register::SP, Register::SP, -8), "addi $sp, $sp, 0xfff8")]
#[case(ori(Register::T0, Register::T0, 0xFF), "ori $t0, $t0, 0xff")]
#[case(lui(Register::GP, 0x1000), "lui $gp, 0x1000")]
#[case(slt(Register::V0, Register::A0, Register::A1), "slt $v0, $a1, $a0")]
#[case(sll(Register::T0, Register::T1, 4), "sll $t0, $t1, 0x4")]
#[case(lw(Register::RA, 4, Register::SP), "lw $ra, 0x4($sp)")]
#[case(sb(Register::T2, -1, Register::A0), "sb $t2, 0xffff($a0)")]
#[case(beq(Register::T0, Register::ZERO, 3), "beq $t0, $zero, 0x3")]
#[case(bne(Register::S0, Register::S1, -2), "bne $s0, $s1, 0xfffe")]
#[case(j(0x0040_0010), "j 0x100004")]
#[case(jal(0x0040_0100), "jal 0x100040")]
#[case(jr(Register::RA), "jr $ra")]
#[case(mult(Register::A0, Register::A1), "mult $a0, $a1")]
#[case(mfhi(Register::V1), "mfhi $v1")]
#[case(syscall(), "syscall")]
fn test_renderings(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(disassemble(raw).unwrap(), expected);
}

#[test]
fn test_unknown_word_fails() {
    assert!(disassemble(0xFFFF_FFFF).is_err());
}

#[test]
fn test_section_listing() {
    let program = [
        addi(Register::T0, Register::ZERO, 1),
        add(Register::T1, Register::T0, Register::T0),
        nop(),
    ];
    let section = Section::new(".text", 0x0040_0000, 12, to_bytes(&program));
    let mut memory = FuncMemory::new(Config::default().memory.layout().unwrap());
    memory.load_sections(std::slice::from_ref(&section)).unwrap();

    let lines = disassemble_section(&memory, &section).unwrap();
    assert_eq!(
        lines,
        vec![
            "addi $t0, $zero, 0x1".to_string(),
            "add $t1, $t0, $t0".to_string(),
            "sll $zero, $zero, 0x0".to_string(),
        ]
    );
}

#[test]
fn test_section_listing_includes_partial_tail_word() {
    let program = [
        addi(Register::T0, Register::ZERO, 1),
        addi(Register::T1, Register::ZERO, 2),
    ];
    // Six bytes keep only the low half of the second word: 0x0000_0002 is `srl`.
    let section = Section::new(".text", 0x0040_0000, 6, to_bytes(&program));
    let mut memory = FuncMemory::new(Config::default().memory.layout().unwrap());
    memory.load_sections(std::slice::from_ref(&section)).unwrap();
    assert_eq!(
        disassemble_section(&memory, &section).unwrap(),
        vec!["addi $t0, $zero, 0x1", "srl $zero, $zero, 0x0"]
    );
}
