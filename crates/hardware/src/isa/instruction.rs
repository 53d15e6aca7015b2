//! Instruction encoding and decoded instruction state.
//!
//! Provides bit extraction for the three MIPS encoding shapes (R, I, J) and the
//! [`Instruction`] value that flows through the pipeline. An instruction is built once
//! by the decoder; later stages only fill in its computed fields.

use crate::common::constants::{
    FUNCT_MASK, IMM_MASK, INSTRUCTION_SIZE, JUMP_ADDR_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT,
    REG_MASK, RS_SHIFT, RT_SHIFT, SHAMT_MASK, SHAMT_SHIFT,
};
use crate::isa::abi::Register;
use crate::isa::opcodes::{ImmPolicy, IsaEntry, MemAccess, OpClass, OpKind};

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field `s` (bits 21-25).
    fn rs(&self) -> Register;

    /// Extracts the second source register field `t` (bits 16-20).
    fn rt(&self) -> Register;

    /// Extracts the destination register field `d` (bits 11-15).
    fn rd(&self) -> Register;

    /// Extracts the shift amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the function field (bits 0-5).
    ///
    /// Only meaningful for R-format words.
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), without extension.
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 0-25).
    fn jump_addr(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> Register {
        Register::from_field((self >> RS_SHIFT) & REG_MASK)
    }

    #[inline(always)]
    fn rt(&self) -> Register {
        Register::from_field((self >> RT_SHIFT) & REG_MASK)
    }

    #[inline(always)]
    fn rd(&self) -> Register {
        Register::from_field((self >> RD_SHIFT) & REG_MASK)
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn jump_addr(&self) -> u32 {
        self & JUMP_ADDR_MASK
    }
}

/// Encoding shape of an instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register format: `opcode | s | t | d | shamt | funct`.
    #[default]
    R,
    /// Immediate format: `opcode | s | t | imm16`.
    I,
    /// Jump format: `opcode | addr26`.
    J,
}

/// A decoded instruction together with the values computed for it in flight.
///
/// The identity fields (`raw`, `pc`, `kind` and the three registers) are fixed by the
/// decoder. The value fields start at zero and are filled in by decode (source
/// values), execute (result, effective address, next PC) and memory (loaded value).
///
/// `Instruction::default()` is the null instruction `sll $zero, $zero, 0`, used as the
/// bubble shown by idle stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit encoding.
    pub raw: u32,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Operation kind; indexes the instruction table.
    pub kind: OpKind,
    /// First source register (`$zero` when unused).
    pub src_a: Register,
    /// Second source register (`$zero` when unused).
    pub src_b: Register,
    /// Destination register (`$zero` when nothing is written).
    pub dst: Register,
    /// Value of `src_a`, read at issue.
    pub v_src_a: u64,
    /// Value of `src_b`, read at issue.
    pub v_src_b: u64,
    /// Result written to `dst` at writeback.
    pub v_dst: u64,
    /// Effective address of a load or store.
    pub mem_addr: u32,
    /// Resolved next PC of a branch or jump.
    pub new_pc: u32,
}

impl Instruction {
    /// Returns the null instruction (all-zero word at PC 0).
    pub fn null() -> Self {
        Self::default()
    }

    /// Returns the instruction-table entry for this instruction.
    #[inline]
    pub fn entry(&self) -> &'static IsaEntry {
        self.kind.entry()
    }

    /// Returns the assembler mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        self.entry().name
    }

    /// Returns the encoding shape.
    pub fn format(&self) -> Format {
        self.entry().format
    }

    /// Shift amount field.
    pub fn shamt(&self) -> u32 {
        self.raw.shamt()
    }

    /// Raw 16-bit immediate field.
    pub fn imm(&self) -> u32 {
        self.raw.imm16()
    }

    /// 26-bit jump target field.
    pub fn jump_addr(&self) -> u32 {
        self.raw.jump_addr()
    }

    /// Immediate extended to 32 bits according to the operation's policy.
    pub fn imm_ext(&self) -> u32 {
        let imm = self.imm();
        match self.entry().imm {
            ImmPolicy::Signed => imm as u16 as i16 as i32 as u32,
            ImmPolicy::Zero => imm,
            ImmPolicy::Upper => imm << 16,
            ImmPolicy::None => 0,
        }
    }

    /// Value of the first source register as a 32-bit word.
    #[inline]
    pub const fn a(&self) -> u32 {
        self.v_src_a as u32
    }

    /// Value of the second source register as a 32-bit word.
    #[inline]
    pub const fn b(&self) -> u32 {
        self.v_src_b as u32
    }

    /// Stores a 32-bit result, zero-extended into the result field.
    #[inline]
    pub fn set_result(&mut self, value: u32) {
        self.v_dst = u64::from(value);
    }

    /// Address of the next sequential instruction.
    #[inline]
    pub const fn fallthrough(&self) -> u32 {
        self.pc.wrapping_add(INSTRUCTION_SIZE)
    }

    /// Operation class of this instruction.
    pub fn class(&self) -> OpClass {
        self.entry().class
    }

    /// Returns `true` for branches and jumps, i.e. every instruction that redirects the PC.
    pub fn is_jump(&self) -> bool {
        matches!(self.class(), OpClass::Branch | OpClass::Jump)
    }

    /// Returns `true` for loads.
    pub fn is_load(&self) -> bool {
        self.class() == OpClass::Load
    }

    /// Returns `true` for stores.
    pub fn is_store(&self) -> bool {
        self.class() == OpClass::Store
    }

    /// Memory access performed by a load or store, if any.
    pub fn mem_access(&self) -> Option<MemAccess> {
        self.entry().mem
    }

    /// Returns `true` if any register operand is not `$zero`.
    ///
    /// Trivial instructions such as `nop` reference no register at all.
    pub fn touches_registers(&self) -> bool {
        !(self.src_a.is_zero() && self.src_b.is_zero() && self.dst.is_zero())
    }

    /// Runs the operation's execute function, filling the computed fields.
    pub fn execute(&mut self) {
        (self.entry().exec)(self);
    }
}
