//! ALU shift operations.
//!
//! Implements shift-left logical, shift-right logical and shift-right arithmetic.
//! The constant forms shift `$t` by the `shamt` field; the variable forms shift
//! `$t` by the low five bits of `$s`.

use crate::isa::instruction::Instruction;

/// Bit mask for a 32-bit shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// `sll`: `$d = $t << shamt`.
pub fn sll(i: &mut Instruction) {
    i.set_result(i.b() << i.shamt());
}

/// `srl`: `$d = $t >> shamt` (logical).
pub fn srl(i: &mut Instruction) {
    i.set_result(i.b() >> i.shamt());
}

/// `sra`: `$d = $t >> shamt` (arithmetic).
pub fn sra(i: &mut Instruction) {
    i.set_result(((i.b() as i32) >> i.shamt()) as u32);
}

/// `sllv`: `$d = $t << ($s & 31)`.
pub fn sllv(i: &mut Instruction) {
    i.set_result(i.b() << (i.a() & SHAMT_MASK));
}

/// `srlv`: `$d = $t >> ($s & 31)` (logical).
pub fn srlv(i: &mut Instruction) {
    i.set_result(i.b() >> (i.a() & SHAMT_MASK));
}

/// `srav`: `$d = $t >> ($s & 31)` (arithmetic).
pub fn srav(i: &mut Instruction) {
    i.set_result(((i.b() as i32) >> (i.a() & SHAMT_MASK)) as u32);
}
