//! Load/Store Unit (LSU).
//!
//! The Execute stage computes the effective address of every load and store here;
//! the Memory stage performs the access and uses [`extend`] to widen loaded values
//! to a 32-bit register word.

use crate::isa::instruction::Instruction;
use crate::isa::opcodes::MemAccess;

/// Computes `$s + sext(imm)` into `mem_addr`.
pub fn effective_address(i: &mut Instruction) {
    i.mem_addr = i.a().wrapping_add(i.imm_ext());
}

/// Widens a loaded value to a register word.
///
/// # Arguments
///
/// * `raw`    - Little-endian value assembled by the functional memory.
/// * `access` - Width and signedness of the load.
///
/// # Returns
///
/// The value sign- or zero-extended from `access.width` bytes to 32 bits, held in
/// the low half of the returned register value.
pub fn extend(raw: u64, access: MemAccess) -> u64 {
    let bits = (access.width * 8) as u32;
    if bits >= 32 {
        return raw & 0xFFFF_FFFF;
    }
    let value = raw as u32 & ((1u32 << bits) - 1);
    if access.signed {
        let shift = 32 - bits;
        u64::from((((value << shift) as i32) >> shift) as u32)
    } else {
        u64::from(value)
    }
}
