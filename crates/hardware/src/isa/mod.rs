//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MIPS32 integer subset understood by the simulator: register names,
//! field extraction, the data-driven instruction table, the decoder and the
//! disassembler.

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// Instruction decoding from raw words.
pub mod decode;

/// Instruction disassembler for traces and the disassembly tool.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// The instruction table: one row per supported operation.
pub mod opcodes;
