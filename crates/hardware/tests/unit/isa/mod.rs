//! Unit tests for the MIPS instruction set.
//!
//! - Table-driven decoding and register-slot resolution.
//! - Disassembler renderings.

/// Decoder tests.
pub mod decode;

/// Disassembler tests.
pub mod disasm;
