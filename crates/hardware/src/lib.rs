//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-level, in-order, five-stage MIPS32 simulator with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback) driven by timed ports,
//!    register file with pending-write tracking, and the ALU/branch/load-store units.
//! 2. **Memory:** Sparse set/page/offset functional memory with byte-granular access.
//! 3. **ISA:** Table-driven decoding, execution and disassembly of the MIPS I integer subset.
//! 4. **Simulation:** ELF section loader, configuration, and statistics collection.

/// Common types and constants (errors, register file, field layout).
pub mod common;
/// Simulator configuration (memory geometry and port timing).
pub mod config;
/// CPU core (pipeline, stages, execution units).
pub mod core;
/// Instruction set (table, decode, instruction, ABI, disassembly).
pub mod isa;
/// Program loading and the simulator lifecycle.
pub mod sim;
/// Memory system (address layout, functional memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Clocked pipeline; holds PC, registers, memory, ports and stats.
pub use crate::core::Pipeline;
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_source`.
pub use crate::sim::{Simulator, TraceMode};
