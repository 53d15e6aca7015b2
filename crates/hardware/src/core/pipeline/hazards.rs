//! Data Hazard Detection.
//!
//! There is no forwarding network. An instruction may leave decode only when every
//! register it reads holds a committed value, and when no older instruction is still
//! going to write its destination. Both conditions are answered by the register
//! file's pending bits.

use crate::common::reg::RegisterFile;
use crate::isa::abi::Register;
use crate::isa::instruction::Instruction;

/// Returns the first register that keeps `instr` in decode, if any.
///
/// Sources are checked before the destination, so a RAW dependency is reported in
/// preference to a WAW one.
///
/// # Arguments
///
/// * `regs`  - Register file with the current pending bits.
/// * `instr` - Freshly decoded instruction.
pub fn blocking_register(regs: &RegisterFile, instr: &Instruction) -> Option<Register> {
    [instr.src_a, instr.src_b, instr.dst]
        .into_iter()
        .find(|&r| !regs.check(r))
}

/// Returns `true` if `instr` can be issued this cycle.
pub fn can_issue(regs: &RegisterFile, instr: &Instruction) -> bool {
    blocking_register(regs, instr).is_none()
}
