//! Simulator: construct, run and tear down one simulation.
//!
//! The simulator owns the pipeline (and through it the memory image) for the whole
//! run. Construction loads the program sections; [`Simulator::run`] clocks the
//! pipeline until the requested number of instructions has retired, writing the trace
//! to any `io::Write`; [`Simulator::finish`] drops the memory image and hands back the
//! statistics.

use std::io::Write;

use tracing::{debug, info};

use crate::common::error::{Result, SimError};
use crate::config::Config;
use crate::core::Pipeline;
use crate::core::pipeline::latches::StageSlots;
use crate::sim::loader::{Section, SectionSource};
use crate::soc::memory::FuncMemory;
use crate::stats::SimStats;

/// What [`Simulator::run`] writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceMode {
    /// A five-line block per cycle showing every stage, bubbles included.
    #[default]
    Cycles,
    /// One line per retiring instruction that is a jump or touches a non-zero register.
    Retired,
    /// Nothing.
    Quiet,
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Pipeline state, including registers and memory.
    pub pipeline: Pipeline,
}

fn output_error(e: &std::io::Error) -> SimError {
    SimError::Io {
        path: "<output>".to_string(),
        reason: e.to_string(),
    }
}

impl Simulator {
    /// Builds a simulator over already extracted sections.
    ///
    /// # Errors
    ///
    /// Invalid configuration, sections that do not fit the address space, or a missing
    /// `.text` section.
    pub fn new(sections: &[Section], config: &Config) -> Result<Self> {
        config.validate()?;
        let mut memory = FuncMemory::new(config.memory.layout()?);
        memory.load_sections(sections)?;
        let pipeline = Pipeline::new(memory, &config.pipeline)?;
        Ok(Self { pipeline })
    }

    /// Builds a simulator from any section source, e.g. an [`ElfImage`].
    ///
    /// [`ElfImage`]: crate::sim::loader::ElfImage
    ///
    /// # Errors
    ///
    /// As [`Simulator::new`], plus any error of the source.
    pub fn from_source(source: &impl SectionSource, config: &Config) -> Result<Self> {
        Self::new(&source.sections()?, config)
    }

    /// Runs until `target` instructions have retired in total.
    ///
    /// # Arguments
    ///
    /// * `target` - Retirement count at which to stop.
    /// * `mode`   - Trace format.
    /// * `out`    - Trace sink.
    ///
    /// # Returns
    ///
    /// The statistics accumulated so far.
    ///
    /// # Errors
    ///
    /// The first pipeline error, or a failure writing to `out`.
    pub fn run(&mut self, target: u64, mode: TraceMode, out: &mut impl Write) -> Result<&SimStats> {
        info!(
            target,
            pc = format_args!("{:#x}", self.pipeline.pc),
            "simulation start"
        );
        while self.pipeline.retired() < target {
            let cycle = self.pipeline.cycle;
            self.pipeline.tick()?;
            write_trace(&self.pipeline.slots, cycle, mode, out).map_err(|e| output_error(&e))?;
        }
        out.flush().map_err(|e| output_error(&e))?;
        info!(stats = %self.pipeline.stats.summary(), "simulation end");
        debug!(
            pending = self.pipeline.regs.pending(),
            "register state:\n{}",
            self.pipeline.regs.dump()
        );
        Ok(&self.pipeline.stats)
    }

    /// Tears the simulation down, releasing the memory image.
    pub fn finish(self) -> SimStats {
        self.pipeline.stats
    }
}

/// Writes the trace of one completed cycle.
fn write_trace(
    slots: &StageSlots,
    cycle: u64,
    mode: TraceMode,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match mode {
        TraceMode::Cycles => {
            writeln!(out, "fetch cycle {cycle}: {:#x}", slots.fetch)?;
            writeln!(out, "decode cycle {cycle}: {}", slots.decode)?;
            writeln!(out, "execute cycle {cycle}: {}", slots.execute)?;
            writeln!(out, "memory cycle {cycle}: {}", slots.memory)?;
            writeln!(out, "writeback cycle {cycle}: {}", slots.writeback)?;
            writeln!(out)
        }
        TraceMode::Retired => {
            let instr = &slots.writeback;
            if slots.retired && (instr.is_jump() || instr.touches_registers()) {
                writeln!(out, "{instr}")?;
            }
            Ok(())
        }
        TraceMode::Quiet => Ok(()),
    }
}
