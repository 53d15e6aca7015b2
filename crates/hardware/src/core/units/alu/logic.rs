//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR and set-less-than (signed and unsigned),
//! in register and immediate forms. Logical immediates are zero-extended;
//! comparison immediates are sign-extended, including for `sltiu`.

use crate::isa::instruction::Instruction;

/// `and`: `$d = $s & $t`.
pub fn and(i: &mut Instruction) {
    i.set_result(i.a() & i.b());
}

/// `or`: `$d = $s | $t`.
pub fn or(i: &mut Instruction) {
    i.set_result(i.a() | i.b());
}

/// `xor`: `$d = $s ^ $t`.
pub fn xor(i: &mut Instruction) {
    i.set_result(i.a() ^ i.b());
}

/// `nor`: `$d = !($s | $t)`.
pub fn nor(i: &mut Instruction) {
    i.set_result(!(i.a() | i.b()));
}

/// `andi`: `$t = $s & zext(imm)`.
pub fn and_imm(i: &mut Instruction) {
    i.set_result(i.a() & i.imm_ext());
}

/// `ori`: `$t = $s | zext(imm)`.
pub fn or_imm(i: &mut Instruction) {
    i.set_result(i.a() | i.imm_ext());
}

/// `xori`: `$t = $s ^ zext(imm)`.
pub fn xor_imm(i: &mut Instruction) {
    i.set_result(i.a() ^ i.imm_ext());
}

/// `slt`: signed `$s < $t`.
pub fn slt(i: &mut Instruction) {
    i.set_result(((i.a() as i32) < (i.b() as i32)) as u32);
}

/// `sltu`: unsigned `$s < $t`.
pub fn sltu(i: &mut Instruction) {
    i.set_result((i.a() < i.b()) as u32);
}

/// `slti`: signed `$s < sext(imm)`.
pub fn slti(i: &mut Instruction) {
    i.set_result(((i.a() as i32) < (i.imm_ext() as i32)) as u32);
}

/// `sltiu`: unsigned `$s < sext(imm)`.
pub fn sltiu(i: &mut Instruction) {
    i.set_result((i.a() < i.imm_ext()) as u32);
}
