//! Clocked pipeline driver.
//!
//! `Pipeline` is the explicit simulation context: it owns the program counter, its
//! validity bit, the register file, the functional memory, every inter-stage port and
//! the statistics. One call to [`Pipeline::tick`] advances the machine one cycle by
//! running the stage handlers in the fixed order
//! writeback, decode, fetch, execute, memory.
//!
//! Writeback runs first so a value committed this cycle is visible to decode in the
//! same cycle, and a redirect is visible to fetch in the same cycle. Decode runs
//! before fetch so fetch always reads the PC decode has just advanced.

use tracing::trace;

use crate::common::error::{Result, SimError};
use crate::common::reg::RegisterFile;
use crate::config::PipelineConfig;
use crate::core::pipeline::latches::{FetchPacket, StagePorts, StageSlots};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::soc::memory::FuncMemory;
use crate::stats::SimStats;

/// Explicit pipeline state.
#[derive(Debug)]
pub struct Pipeline {
    /// Address of the next instruction to fetch and decode.
    pub pc: u32,
    /// Cleared while a branch or jump is in flight; fetch is blocked meanwhile.
    pub pc_valid: bool,
    /// Bumped on every redirect; fetch packets from older epochs are discarded.
    pub epoch: u64,
    /// Architectural registers with pending-write tracking.
    pub regs: RegisterFile,
    /// Memory image, shared by fetch and the memory stage.
    pub memory: FuncMemory,
    /// Inter-stage ports.
    pub ports: StagePorts,
    /// What each stage held during the last cycle.
    pub slots: StageSlots,
    /// Word held back by decode on a data hazard, retried every cycle.
    pub pending: Option<FetchPacket>,
    /// Performance counters.
    pub stats: SimStats,
    /// Current cycle number (the cycle the next `tick` simulates).
    pub cycle: u64,
}

impl Pipeline {
    /// Creates a pipeline that starts fetching at the `.text` section of `memory`.
    ///
    /// # Errors
    ///
    /// [`SimError::MissingSection`] if no `.text` section was loaded, or
    /// [`SimError::AddressOutOfRange`] if it lies above 4 GiB.
    pub fn new(memory: FuncMemory, config: &PipelineConfig) -> Result<Self> {
        let start = memory.start_pc()?;
        let pc = u32::try_from(start).map_err(|_| SimError::AddressOutOfRange {
            addr: start,
            addr_bits: u32::BITS,
        })?;
        Ok(Self {
            pc,
            pc_valid: true,
            epoch: 0,
            regs: RegisterFile::new(),
            memory,
            ports: StagePorts::new(config),
            slots: StageSlots::default(),
            pending: None,
            stats: SimStats::default(),
            cycle: 0,
        })
    }

    /// Simulates one clock cycle.
    ///
    /// # Errors
    ///
    /// Any stage error: an unknown instruction, an unmapped memory access, a port
    /// overflow or a register written without a pending write.
    pub fn tick(&mut self) -> Result<()> {
        self.slots = StageSlots::default();

        wb_stage(self)?;
        decode_stage(self)?;
        fetch_stage(self)?;
        execute_stage(self)?;
        mem_stage(self)?;

        let dropped = self.ports.lost(self.cycle);
        if dropped > 0 {
            trace!(cycle = self.cycle, dropped, "port values lost");
        }
        self.stats.port_drops += dropped as u64;
        self.stats.cycles += 1;
        self.cycle += 1;
        Ok(())
    }

    /// Number of instructions retired so far.
    pub const fn retired(&self) -> u64 {
        self.stats.instructions_retired
    }
}
