//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. Every operation
//! works on 32-bit words and wraps on overflow; MIPS overflow traps are not modelled.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Lui, Mult, Multu, Div, Divu
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu and their immediate forms
//! - [`shifts`]:     Sll, Srl, Sra and their variable forms
//!
//! The HI/LO moves and the no-op used by system instructions live here.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::instruction::Instruction;

/// Mask selecting the LO half of the HI/LO pair.
const LO_MASK: u64 = 0xFFFF_FFFF;

/// Mask selecting the HI half of the HI/LO pair.
const HI_MASK: u64 = !LO_MASK;

/// Bit position of HI inside the pair.
pub(crate) const HI_SHIFT: u32 = 32;

/// `mfhi`: copies HI into `$d`.
pub const fn mfhi(i: &mut Instruction) {
    i.v_dst = i.v_src_a >> HI_SHIFT;
}

/// `mflo`: copies LO into `$d`.
pub const fn mflo(i: &mut Instruction) {
    i.v_dst = i.v_src_a & LO_MASK;
}

/// `mthi`: replaces HI with `$s`, keeping LO.
pub fn mthi(i: &mut Instruction) {
    i.v_dst = (u64::from(i.a()) << HI_SHIFT) | (i.v_src_b & LO_MASK);
}

/// `mtlo`: replaces LO with `$s`, keeping HI.
pub fn mtlo(i: &mut Instruction) {
    i.v_dst = (i.v_src_b & HI_MASK) | u64::from(i.a());
}

/// `syscall`, `break` and `trap` have no architectural effect in this model.
pub const fn nop(_i: &mut Instruction) {}
