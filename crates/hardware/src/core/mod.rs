//! Core processor implementation.
//!
//! This module contains the pipelined processor: the clocked five-stage pipeline and
//! the execution units its instruction table dispatches to.

/// Instruction pipeline implementation (engine, ports, hazards, stages).
pub mod pipeline;

/// Execution units (ALU, branch resolution, load/store address generation).
pub mod units;

pub use self::pipeline::Pipeline;
