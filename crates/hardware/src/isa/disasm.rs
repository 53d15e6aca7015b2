//! Instruction Disassembler.
//!
//! Renders decoded instructions as `mnemonic operand, operand, ...` text for the
//! cycle trace, the retirement trace and the standalone disassembly tool. Operands
//! are taken straight from the encoded fields; immediates are printed as the raw,
//! unextended field in hexadecimal.
//!
//! # Usage
//!
//! ```ignore
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x012A_4020)?; // add $t0, $t1, $t2
//! assert_eq!(text, "add $t0, $t1, $t2");
//! ```

use std::fmt;

use crate::common::constants::{INSTRUCTION_SIZE, WORD_SIZE};
use crate::common::error::Result;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes::OperandPattern;
use crate::sim::loader::Section;
use crate::soc::memory::FuncMemory;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.raw;
        let (d, s, t) = (raw.rd(), raw.rs(), raw.rt());
        let name = self.mnemonic();
        let imm = raw.imm16();

        match self.entry().pattern {
            OperandPattern::DstSrcTrg => write!(f, "{name} {d}, {s}, {t}"),
            OperandPattern::TrgSrcImm => write!(f, "{name} {t}, {s}, {imm:#x}"),
            OperandPattern::SrcTrg => write!(f, "{name} {s}, {t}"),
            OperandPattern::Dst => write!(f, "{name} {d}"),
            OperandPattern::Src => write!(f, "{name} {s}"),
            OperandPattern::DstTrgShamt => write!(f, "{name} {d}, {t}, {:#x}", raw.shamt()),
            OperandPattern::DstTrgSrc => write!(f, "{name} {d}, {t}, {s}"),
            OperandPattern::TrgImm => write!(f, "{name} {t}, {imm:#x}"),
            OperandPattern::SrcTrgImm => write!(f, "{name} {s}, {t}, {imm:#x}"),
            OperandPattern::SrcImm => write!(f, "{name} {s}, {imm:#x}"),
            OperandPattern::Addr => write!(f, "{name} {:#x}", raw.jump_addr()),
            OperandPattern::Bare => f.write_str(name),
            OperandPattern::TrgMem => write!(f, "{name} {t}, {imm:#x}({s})"),
        }
    }
}

/// Disassembles a single instruction word.
///
/// # Errors
///
/// Propagates the decoder's error for unsupported encodings.
pub fn disassemble(raw: u32) -> Result<String> {
    Ok(decode(raw, 0)?.to_string())
}

/// Disassembles every aligned word of a loaded section.
///
/// Words are read back through the functional memory, so the section must already
/// have been loaded into `memory`. A trailing partial word is listed with its missing
/// bytes read as zero.
///
/// # Arguments
///
/// * `memory`  - Memory image holding the section.
/// * `section` - Section whose address range is listed.
///
/// # Returns
///
/// One rendering per word, in ascending address order.
///
/// # Errors
///
/// Fails on unmapped memory or on a word the decoder does not recognise.
pub fn disassemble_section(memory: &FuncMemory, section: &Section) -> Result<Vec<String>> {
    let step = u64::from(INSTRUCTION_SIZE);
    let start = section.start_addr.next_multiple_of(step);
    let end = section.start_addr + section.size;

    let mut lines = Vec::new();
    let mut addr = start;
    while addr < end {
        let raw = memory.read(addr, WORD_SIZE)? as u32;
        lines.push(decode(raw, addr as u32)?.to_string());
        addr += step;
    }
    Ok(lines)
}
