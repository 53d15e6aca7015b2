//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. Loads read the functional
//! memory at the effective address computed in execute and widen the value into the
//! result; stores write the low bytes of the second source register. All other
//! instructions pass through untouched.

use tracing::trace;

use crate::common::error::Result;
use crate::core::pipeline::engine::Pipeline;
use crate::core::units::lsu;

/// Executes the memory stage.
///
/// # Arguments
///
/// * `p` - Mutable reference to the pipeline state.
///
/// # Errors
///
/// Memory errors (e.g. loading from an unmapped page) and port overflow.
pub fn mem_stage(p: &mut Pipeline) -> Result<()> {
    let cycle = p.cycle;

    if p.ports.writeback_memory_stall.read(cycle).unwrap_or(false) {
        p.ports.memory_execute_stall.write(true, cycle)?;
        return Ok(());
    }

    let Some(mut instr) = p.ports.execute_memory.read(cycle) else {
        return Ok(());
    };

    if let Some(access) = instr.mem_access() {
        let addr = u64::from(instr.mem_addr);
        if instr.is_load() {
            let raw = p.memory.read(addr, access.width)?;
            instr.v_dst = lsu::extend(raw, access);
            trace!(cycle, addr = format_args!("{addr:#x}"), value = instr.v_dst, "load");
        } else if instr.is_store() {
            p.memory.write(instr.v_src_b, addr, access.width)?;
            trace!(cycle, addr = format_args!("{addr:#x}"), value = instr.v_src_b, "store");
        }
    }

    p.ports.memory_writeback.write(instr, cycle)?;
    p.slots.memory = instr;
    Ok(())
}
