//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits
//! results to the register file, which re-validates the destination and releases any
//! instruction waiting on it in decode, counts the retirement, and redirects fetch
//! when the retiring instruction is a branch or jump.

use tracing::{debug, trace};

use crate::common::error::Result;
use crate::core::pipeline::engine::Pipeline;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `p` - Mutable reference to the pipeline state
///
/// # Errors
///
/// [`crate::common::error::SimError::RegisterNotPending`] if the destination had no
/// outstanding write.
pub fn wb_stage(p: &mut Pipeline) -> Result<()> {
    let cycle = p.cycle;
    let Some(instr) = p.ports.memory_writeback.read(cycle) else {
        trace!(cycle, "writeback: bubble");
        return Ok(());
    };

    p.regs.write(instr.dst, instr.v_dst)?;
    p.stats.record_retire(&instr);

    if instr.is_jump() {
        p.pc = instr.new_pc;
        p.pc_valid = true;
        p.epoch += 1;
        debug!(
            cycle,
            from = format_args!("{:#x}", instr.pc),
            to = format_args!("{:#x}", instr.new_pc),
            "redirect"
        );
    }

    p.slots.writeback = instr;
    p.slots.retired = true;
    Ok(())
}
