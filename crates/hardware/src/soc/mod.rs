//! System-on-Chip (SoC) Components.
//!
//! The simulated system has a single memory device: the sparse functional memory
//! shared by instruction fetch and the memory stage.

/// Functional memory and its address layout.
pub mod memory;

pub use memory::FuncMemory;
