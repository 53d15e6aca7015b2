//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines what travels between the five stages and what each stage
//! shows in the trace:
//! 1. **Fetch packets:** The raw word handed from fetch to decode, tagged with its PC
//!    and the fetch epoch.
//! 2. **Stage ports:** The four forward data ports and four backward stall ports.
//! 3. **Stage slots:** The per-cycle view of what every stage held.

use crate::config::PipelineConfig;
use crate::core::pipeline::port::Port;
use crate::isa::instruction::Instruction;

/// Entry on the fetch-to-decode port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchPacket {
    /// 32-bit instruction encoding.
    pub raw: u32,
    /// Address the word was read from.
    pub pc: u32,
    /// Fetch epoch at the time of the read; bumped on every redirect.
    pub epoch: u64,
}

/// All ports of the pipeline.
#[derive(Debug)]
pub struct StagePorts {
    /// Fetch to decode.
    pub fetch_decode: Port<FetchPacket>,
    /// Decode to execute.
    pub decode_execute: Port<Instruction>,
    /// Execute to memory.
    pub execute_memory: Port<Instruction>,
    /// Memory to writeback.
    pub memory_writeback: Port<Instruction>,
    /// Stall from decode back to fetch.
    pub decode_fetch_stall: Port<bool>,
    /// Stall from execute back to decode.
    pub execute_decode_stall: Port<bool>,
    /// Stall from memory back to execute.
    pub memory_execute_stall: Port<bool>,
    /// Stall from writeback back to memory.
    pub writeback_memory_stall: Port<bool>,
}

impl StagePorts {
    /// Creates every port with the shared timing parameters.
    pub const fn new(config: &PipelineConfig) -> Self {
        Self {
            fetch_decode: Port::from_config("FETCH_2_DECODE", config),
            decode_execute: Port::from_config("DECODE_2_EXECUTE", config),
            execute_memory: Port::from_config("EXECUTE_2_MEMORY", config),
            memory_writeback: Port::from_config("MEMORY_2_WRITEBACK", config),
            decode_fetch_stall: Port::from_config("DECODE_2_FETCH_STALL", config),
            execute_decode_stall: Port::from_config("EXECUTE_2_DECODE_STALL", config),
            memory_execute_stall: Port::from_config("MEMORY_2_EXECUTE_STALL", config),
            writeback_memory_stall: Port::from_config("WRITEBACK_2_MEMORY_STALL", config),
        }
    }

    /// End-of-cycle sweep over every port.
    ///
    /// # Returns
    ///
    /// The number of values dropped without ever being read.
    pub fn lost(&mut self, cycle: u64) -> usize {
        self.fetch_decode.lost(cycle)
            + self.decode_execute.lost(cycle)
            + self.execute_memory.lost(cycle)
            + self.memory_writeback.lost(cycle)
            + self.decode_fetch_stall.lost(cycle)
            + self.execute_decode_stall.lost(cycle)
            + self.memory_execute_stall.lost(cycle)
            + self.writeback_memory_stall.lost(cycle)
    }
}

/// What each stage held during the last cycle. Idle stages hold the null instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageSlots {
    /// Word read by fetch, or 0 when fetch was idle.
    pub fetch: u32,
    /// Instruction issued by decode.
    pub decode: Instruction,
    /// Instruction executed.
    pub execute: Instruction,
    /// Instruction that passed the memory stage.
    pub memory: Instruction,
    /// Instruction retired by writeback.
    pub writeback: Instruction,
    /// Whether writeback retired an instruction (the null instruction is a valid retiree).
    pub retired: bool,
}
