//! Execution units and functional components.
//!
//! This module holds the execute functions referenced from the instruction table:
//! the integer ALU, the branch resolution unit and the address generation of the
//! load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: branch conditions and jump targets.
pub mod bru;

/// Load/Store Unit: effective addresses and loaded-value extension.
pub mod lsu;
