//! ALU arithmetic operations.
//!
//! Implements wrapping 32-bit addition and subtraction, `lui`, and the
//! multiply/divide family that writes the 64-bit HI/LO pair.
//!
//! Division by zero is architecturally unpredictable on MIPS; here it yields
//! zero in both HI and LO.

use super::HI_SHIFT;
use crate::isa::instruction::Instruction;

/// Packs a HI and a LO word into the pair layout.
#[inline]
fn hi_lo(hi: u32, lo: u32) -> u64 {
    (u64::from(hi) << HI_SHIFT) | u64::from(lo)
}

/// `add`, `addu`: `$d = $s + $t`.
pub fn add(i: &mut Instruction) {
    i.set_result(i.a().wrapping_add(i.b()));
}

/// `addi`, `addiu`: `$t = $s + sext(imm)`.
pub fn add_imm(i: &mut Instruction) {
    i.set_result(i.a().wrapping_add(i.imm_ext()));
}

/// `sub`, `subu`: `$d = $s - $t`.
pub fn sub(i: &mut Instruction) {
    i.set_result(i.a().wrapping_sub(i.b()));
}

/// `lui`: `$t = imm << 16`.
pub fn lui(i: &mut Instruction) {
    i.set_result(i.imm_ext());
}

/// `mult`: signed 32x32 -> 64 product into HI/LO.
pub fn mult(i: &mut Instruction) {
    i.v_dst = (i64::from(i.a() as i32) * i64::from(i.b() as i32)) as u64;
}

/// `multu`: unsigned 32x32 -> 64 product into HI/LO.
pub fn multu(i: &mut Instruction) {
    i.v_dst = u64::from(i.a()) * u64::from(i.b());
}

/// `div`: signed quotient in LO, remainder in HI.
pub fn div(i: &mut Instruction) {
    let (a, b) = (i.a() as i32, i.b() as i32);
    i.v_dst = if b == 0 {
        0
    } else {
        hi_lo(a.wrapping_rem(b) as u32, a.wrapping_div(b) as u32)
    };
}

/// `divu`: unsigned quotient in LO, remainder in HI.
pub fn divu(i: &mut Instruction) {
    let (a, b) = (i.a(), i.b());
    i.v_dst = if b == 0 { 0 } else { hi_lo(a % b, a / b) };
}
