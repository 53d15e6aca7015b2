//! Simulator error definitions.
//!
//! This module defines the single error type shared by every component of the simulator. It provides:
//! 1. **Decode Failures:** Encodings with no entry in the instruction table.
//! 2. **Memory Faults:** Reads of never-touched memory, invalid widths, out-of-range addresses.
//! 3. **Pipeline Faults:** Register-file and port protocol violations.
//! 4. **Environment Failures:** Executable loading and configuration problems.
//!
//! None of these are recovered locally. They propagate with `?` to the entry point,
//! which reports them and terminates with a failure status.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Fatal simulator conditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The opcode/function combination has no entry in the instruction table.
    #[error("no such instruction: {raw:#010x} (opcode {opcode:#x}, funct {funct:#x})")]
    UnknownInstruction {
        /// Raw instruction word.
        raw: u32,
        /// Primary opcode field (bits 26-31).
        opcode: u32,
        /// Function field (bits 0-5); only meaningful for R-format words.
        funct: u32,
    },

    /// Read touched a set whose page table was never allocated.
    #[error("attempt to read uninitialized memory at {addr:#x} (set {set} not allocated)")]
    UnmappedSet {
        /// Address of the first unmapped byte.
        addr: u64,
        /// Set index of that byte.
        set: u64,
    },

    /// Read touched a page that was never allocated inside an allocated set.
    #[error("attempt to read uninitialized memory at {addr:#x} (set {set}, page {page} not allocated)")]
    UnmappedPage {
        /// Address of the first unmapped byte.
        addr: u64,
        /// Set index of that byte.
        set: u64,
        /// Page index of that byte.
        page: u64,
    },

    /// Access width outside `1..=8` bytes.
    #[error("invalid access width {width} (expected 1..=8 bytes)")]
    InvalidWidth {
        /// Requested width in bytes.
        width: usize,
    },

    /// Address does not fit the configured address width.
    #[error("address {addr:#x} is outside the {addr_bits}-bit address space")]
    AddressOutOfRange {
        /// Offending address.
        addr: u64,
        /// Configured address width in bits.
        addr_bits: u32,
    },

    /// The set/page/offset split is not usable.
    #[error("invalid memory layout: {0}")]
    InvalidLayout(String),

    /// Writeback committed a register that had no pending write.
    #[error("register {reg} written without a pending write")]
    RegisterNotPending {
        /// Register index.
        reg: usize,
    },

    /// A stage wrote to a port more often than its bandwidth allows.
    #[error("port {port}: bandwidth of {bandwidth} writes exceeded in cycle {cycle}")]
    PortOverflow {
        /// Port name.
        port: &'static str,
        /// Configured bandwidth.
        bandwidth: usize,
        /// Cycle of the rejected write.
        cycle: u64,
    },

    /// The executable could not be read from disk.
    #[error("could not read '{path}': {reason}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// The executable is not a parsable ELF image.
    #[error("malformed executable '{path}': {reason}")]
    Elf {
        /// Path of the file.
        path: String,
        /// Parser error message.
        reason: String,
    },

    /// A required section is absent from the image.
    #[error("there is no section named '{0}'")]
    MissingSection(String),

    /// Configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
}
