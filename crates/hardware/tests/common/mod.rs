//! Shared test infrastructure.

/// Instruction encoders and the ELF image writer.
pub mod builder;
