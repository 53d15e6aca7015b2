//! Simulation lifecycle and program loading.
//!
//! Provides the executable loader and the simulator that ties a loaded program to
//! a pipeline.

/// Section extraction from executables.
pub mod loader;

/// Construct/run/teardown of one simulation.
pub mod simulator;

pub use loader::{ElfImage, Section, SectionSource};
pub use simulator::{Simulator, TraceMode};
