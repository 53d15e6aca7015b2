//! Branch Resolution Unit (BRU).
//!
//! Resolves the next PC of every control-transfer instruction in the Execute stage.
//! There is no prediction and no delay slot: fetch is blocked from the moment a
//! branch or jump issues until it retires, so each function here only computes
//! `new_pc` (and the link value for `jal`/`jalr`).

use crate::common::constants::JUMP_REGION_MASK;
use crate::isa::instruction::Instruction;

/// PC-relative branch offsets are counted in words.
const BRANCH_OFFSET_SHIFT: u32 = 2;

/// Sets `new_pc` to the branch target when `taken`, otherwise to the fall-through PC.
fn resolve(i: &mut Instruction, taken: bool) {
    let next = i.fallthrough();
    i.new_pc = if taken {
        next.wrapping_add(i.imm_ext() << BRANCH_OFFSET_SHIFT)
    } else {
        next
    };
}

/// Target of a J-format jump: the 256 MiB region of the delay-slot address
/// combined with the word-aligned 26-bit field.
fn region_target(i: &Instruction) -> u32 {
    (i.fallthrough() & JUMP_REGION_MASK) | (i.jump_addr() << BRANCH_OFFSET_SHIFT)
}

/// `beq`: branch if `$s == $t`.
pub fn beq(i: &mut Instruction) {
    let taken = i.a() == i.b();
    resolve(i, taken);
}

/// `bne`: branch if `$s != $t`.
pub fn bne(i: &mut Instruction) {
    let taken = i.a() != i.b();
    resolve(i, taken);
}

/// `blez`: branch if `$s <= 0` (signed).
pub fn blez(i: &mut Instruction) {
    let taken = i.a() as i32 <= 0;
    resolve(i, taken);
}

/// `bgtz`: branch if `$s > 0` (signed).
pub fn bgtz(i: &mut Instruction) {
    let taken = i.a() as i32 > 0;
    resolve(i, taken);
}

/// `j`: jump within the current region.
pub fn j(i: &mut Instruction) {
    i.new_pc = region_target(i);
}

/// `jal`: jump within the current region, linking the return address in `$ra`.
pub fn jal(i: &mut Instruction) {
    i.new_pc = region_target(i);
    i.set_result(i.fallthrough());
}

/// `jr`: jump to `$s`.
pub fn jr(i: &mut Instruction) {
    i.new_pc = i.a();
}

/// `jalr`: jump to `$s`, linking the return address in `$d`.
pub fn jalr(i: &mut Instruction) {
    i.new_pc = i.a();
    i.set_result(i.fallthrough());
}
