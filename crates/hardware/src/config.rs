//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline address split and port timing.
//! 2. **Structures:** Config for the functional memory and the pipeline ports.
//! 3. **Validation:** Rejection of layouts and port settings the engine cannot use.
//!
//! Configuration is supplied as JSON (`simulator --config <file>`), or use
//! `Config::default()`. Every field has a default, so partial documents are accepted.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{Result, SimError};
use crate::soc::memory::layout::AddressLayout;

/// Default configuration constants for the simulator.
mod defaults {
    /// Width of the simulated address space in bits.
    pub const ADDR_BITS: u32 = 32;

    /// Bits selecting the page inside a set.
    pub const PAGE_BITS: u32 = 10;

    /// Bits selecting the byte inside a page (4 KiB pages).
    pub const OFFSET_BITS: u32 = 12;

    /// Cycles between a port write and its delivery.
    pub const PORT_LATENCY: u64 = 1;

    /// Writes accepted by a port per cycle (single issue).
    pub const PORT_BANDWIDTH: usize = 1;

    /// Reads served per written value.
    pub const PORT_FANOUT: usize = 1;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{ "memory": { "page_bits": 8 }, "pipeline": { "port_latency": 2 } }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.memory.page_bits, 8);
/// assert_eq!(config.memory.offset_bits, 12);
/// assert_eq!(config.pipeline.port_latency, 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Functional memory address split
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Inter-stage port parameters
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] on malformed JSON or inconsistent values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read, otherwise as [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SimError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that the configuration describes a buildable simulator.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidLayout`] for an unusable address split, [`SimError::Config`]
    /// for a zero port latency, bandwidth or fanout.
    pub fn validate(&self) -> Result<()> {
        let _ = self.memory.layout()?;
        if self.pipeline.port_latency == 0 {
            return Err(SimError::Config("port_latency must be at least 1".into()));
        }
        if self.pipeline.port_bandwidth == 0 {
            return Err(SimError::Config("port_bandwidth must be at least 1".into()));
        }
        if self.pipeline.port_fanout == 0 {
            return Err(SimError::Config("port_fanout must be at least 1".into()));
        }
        Ok(())
    }
}

/// Address split of the functional memory.
///
/// The address is sliced into set, page and offset fields, offset lowest. The set
/// field takes the bits left over by `page_bits` and `offset_bits`.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Address width in bits
    #[serde(default = "MemoryConfig::default_addr_bits")]
    pub addr_bits: u32,

    /// Page index width in bits
    #[serde(default = "MemoryConfig::default_page_bits")]
    pub page_bits: u32,

    /// Page offset width in bits
    #[serde(default = "MemoryConfig::default_offset_bits")]
    pub offset_bits: u32,
}

impl MemoryConfig {
    fn default_addr_bits() -> u32 {
        defaults::ADDR_BITS
    }

    fn default_page_bits() -> u32 {
        defaults::PAGE_BITS
    }

    fn default_offset_bits() -> u32 {
        defaults::OFFSET_BITS
    }

    /// Builds the validated address layout described by this section.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidLayout`] if the split is unusable.
    pub fn layout(&self) -> Result<AddressLayout> {
        AddressLayout::new(self.addr_bits, self.page_bits, self.offset_bits)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            addr_bits: defaults::ADDR_BITS,
            page_bits: defaults::PAGE_BITS,
            offset_bits: defaults::OFFSET_BITS,
        }
    }
}

/// Timing of the ports linking adjacent pipeline stages.
///
/// All data and stall ports share these parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Cycles from write to delivery
    #[serde(default = "PipelineConfig::default_port_latency")]
    pub port_latency: u64,

    /// Maximum writes per cycle
    #[serde(default = "PipelineConfig::default_port_bandwidth")]
    pub port_bandwidth: usize,

    /// Maximum reads served per value
    #[serde(default = "PipelineConfig::default_port_fanout")]
    pub port_fanout: usize,
}

impl PipelineConfig {
    fn default_port_latency() -> u64 {
        defaults::PORT_LATENCY
    }

    fn default_port_bandwidth() -> usize {
        defaults::PORT_BANDWIDTH
    }

    fn default_port_fanout() -> usize {
        defaults::PORT_FANOUT
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            port_latency: defaults::PORT_LATENCY,
            port_bandwidth: defaults::PORT_BANDWIDTH,
            port_fanout: defaults::PORT_FANOUT,
        }
    }
}
