//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The explicit simulation context and the per-cycle stage ordering.
//! 2. **Hazards:** Detection of data dependencies through the register file's pending bits.
//! 3. **Latches:** What travels between stages and what each stage shows in the trace.
//! 4. **Ports:** Latched, latency-modelling links between stages, with stall feedback.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Pipeline state and the clocked driver.
pub mod engine;

/// Pipeline hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches and port groups.
pub mod latches;

/// Latched inter-stage ports.
pub mod port;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use engine::Pipeline;
