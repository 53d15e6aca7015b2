//! Instruction Execute (EX) Stage.
//!
//! Runs the execute function of the instruction's table entry: ALU results, HI/LO
//! products, branch and jump targets, and load/store effective addresses.

use crate::common::error::Result;
use crate::core::pipeline::engine::Pipeline;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `p` - Mutable reference to the pipeline state.
///
/// # Errors
///
/// Port overflow only.
pub fn execute_stage(p: &mut Pipeline) -> Result<()> {
    let cycle = p.cycle;

    if p.ports.memory_execute_stall.read(cycle).unwrap_or(false) {
        p.ports.execute_decode_stall.write(true, cycle)?;
        return Ok(());
    }

    let Some(mut instr) = p.ports.decode_execute.read(cycle) else {
        return Ok(());
    };
    instr.execute();

    p.ports.execute_memory.write(instr, cycle)?;
    p.slots.execute = instr;
    Ok(())
}
