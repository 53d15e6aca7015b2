//! MIPS Instruction Decoder.
//!
//! This module turns a raw 32-bit word into an [`Instruction`]. Decoding is a two-step
//! table lookup: the primary opcode selects the encoding format, then the
//! (format, opcode, funct) triple selects the row of the instruction table, whose
//! register-use pattern says which fields become the source and destination slots.

use crate::common::error::{Result, SimError};
use crate::isa::instruction::{Format, Instruction, InstructionBits};
use crate::isa::opcodes::lookup;

/// Opcode of `j`.
const OPCODE_J: u32 = 0x02;

/// Opcode of `jal`.
const OPCODE_JAL: u32 = 0x03;

/// Opcode of `trap`.
const OPCODE_TRAP: u32 = 0x1A;

/// Selects the encoding format from the primary opcode.
///
/// Opcode 0 is the R format; `j`, `jal` and `trap` use the J format; every other
/// opcode is an I-format instruction.
pub const fn format_of(opcode: u32) -> Format {
    match opcode {
        0 => Format::R,
        OPCODE_J | OPCODE_JAL | OPCODE_TRAP => Format::J,
        _ => Format::I,
    }
}

/// Decodes a raw instruction word.
///
/// # Arguments
///
/// * `raw` - The 32-bit instruction encoding.
/// * `pc`  - Address the word was fetched from.
///
/// # Returns
///
/// The decoded instruction with its register slots resolved and all value fields zero.
///
/// # Errors
///
/// [`SimError::UnknownInstruction`] if no table entry matches the encoding.
pub fn decode(raw: u32, pc: u32) -> Result<Instruction> {
    let opcode = raw.opcode();
    let format = format_of(opcode);
    let funct = if format == Format::R { raw.funct() } else { 0 };

    let entry = lookup(format, opcode, funct).ok_or(SimError::UnknownInstruction {
        raw,
        opcode,
        funct,
    })?;

    let (src_a, src_b, dst) = entry.regs.resolve(raw);

    Ok(Instruction {
        raw,
        pc,
        kind: entry.kind,
        src_a,
        src_b,
        dst,
        ..Instruction::default()
    })
}
