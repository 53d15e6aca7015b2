//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, mul/div, load, store, branch/jump, system).
//! 3. **Stalls:** Data-hazard and control (fetch-blocked) cycles.
//! 4. **Ports:** Values written to a port and never consumed.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::instruction::Instruction;
use crate::isa::opcodes::OpClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired by writeback.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_branch: u64,
    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of multiply/divide and HI/LO move instructions retired.
    pub inst_muldiv: u64,
    /// Count of `syscall`/`break`/`trap` instructions retired.
    pub inst_system: u64,

    /// Cycles in which decode held an instruction back on a pending register.
    pub stalls_data: u64,
    /// Cycles in which fetch was blocked by an unresolved branch or jump.
    pub stalls_control: u64,

    /// Values dropped by ports because no stage read them in their delivery cycle.
    pub port_drops: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_system: 0,
            stalls_data: 0,
            stalls_control: 0,
            port_drops: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"core"`, `"instruction_mix"`.
/// Pass an empty slice to `render_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "core", "instruction_mix"];

const RULE: &str = "----------------------------------------------------------";
const BANNER: &str = "==========================================================";

impl SimStats {
    /// Counts a retired instruction.
    pub fn record_retire(&mut self, instr: &Instruction) {
        self.instructions_retired += 1;
        let counter = match instr.class() {
            OpClass::Alu => &mut self.inst_alu,
            OpClass::MulDiv => &mut self.inst_muldiv,
            OpClass::Branch | OpClass::Jump => &mut self.inst_branch,
            OpClass::Load => &mut self.inst_load,
            OpClass::Store => &mut self.inst_store,
            OpClass::System => &mut self.inst_system,
        };
        *counter += 1;
    }

    /// Cycles per retired instruction, or `0.0` before the first retirement.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "cycles={} retired={} cpi={:.3} stalls.data={} stalls.control={} port.drops={}",
            self.cycles,
            self.instructions_retired,
            self.cpi(),
            self.stalls_data,
            self.stalls_control,
            self.port_drops
        )
    }

    /// Renders only the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty
    /// slice to render every section.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to render, or empty for all.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "MIPS PIPELINE SIMULATION STATISTICS");
        let _ = writeln!(out, "{BANNER}");
        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc;
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_ipc                  {ipc:.4}");
            let _ = writeln!(out, "sim_cpi                  {:.4}", self.cpi());
            let _ = writeln!(out, "{RULE}");
        }
        if want("core") {
            let _ = writeln!(out, "CORE BREAKDOWN");
            let _ = writeln!(
                out,
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                pct(self.stalls_data, cyc)
            );
            let _ = writeln!(
                out,
                "  stalls.control         {} ({:.2}%)",
                self.stalls_control,
                pct(self.stalls_control, cyc)
            );
            let _ = writeln!(out, "  port.drops             {}", self.port_drops);
            let _ = writeln!(out, "{RULE}");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.muldiv", self.inst_muldiv),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.system", self.inst_system),
            ] {
                let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n, instr));
            }
            let _ = writeln!(out, "{RULE}");
        }
        let _ = writeln!(out, "{BANNER}");
        out
    }
}
