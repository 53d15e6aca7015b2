//! Global Simulator Constants.
//!
//! This module defines constants shared across the simulator. It includes:
//! 1. **Instruction Constants:** Field masks and shifts of the 32-bit MIPS encoding.
//! 2. **Memory Constants:** Word width used for fetch and memory dumps.
//! 3. **Section Constants:** The section that defines the entry point.

/// Size of one instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Size of the words printed by memory dumps and read by the disassembler.
pub const WORD_SIZE: usize = 4;

/// Largest access width supported by the functional memory, in bytes.
pub const MAX_ACCESS_WIDTH: usize = 8;

/// Bit shift of the primary opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;

/// Mask of the primary opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;

/// Bit shift of the `s` register field (bits 21-25).
pub const RS_SHIFT: u32 = 21;

/// Bit shift of the `t` register field (bits 16-20).
pub const RT_SHIFT: u32 = 16;

/// Bit shift of the `d` register field (bits 11-15).
pub const RD_SHIFT: u32 = 11;

/// Mask of a 5-bit register field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Bit shift of the shift-amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;

/// Mask of the shift-amount field after shifting.
pub const SHAMT_MASK: u32 = 0x1F;

/// Mask of the function field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;

/// Mask of the 16-bit immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;

/// Mask of the 26-bit jump target field (bits 0-25).
pub const JUMP_ADDR_MASK: u32 = 0x03FF_FFFF;

/// Region bits kept from `pc + 4` when forming a J-format target.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Name of the section whose start address is the initial program counter.
pub const TEXT_SECTION: &str = ".text";
