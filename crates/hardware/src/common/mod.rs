//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Constants:** Instruction field layout and memory word sizes.
//! 2. **Error Handling:** The fatal `SimError` taxonomy and the crate `Result` alias.
//! 3. **Register Management:** The hazard-tracking register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decode, memory, pipeline and loader failures.
pub mod error;

/// Hazard-tracking register file implementation.
pub mod reg;

pub use error::{Result, SimError};
pub use reg::RegisterFile;
