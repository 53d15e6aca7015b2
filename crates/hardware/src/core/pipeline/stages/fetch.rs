//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It reads one
//! word at the current PC and sends it to decode, tagged with the PC and fetch epoch.
//! Fetch does not advance the PC itself; decode does when it issues. Fetch stays idle
//! while decode asserts a stall or while a branch or jump is unresolved.

use tracing::trace;

use crate::common::constants::WORD_SIZE;
use crate::common::error::Result;
use crate::core::pipeline::engine::Pipeline;
use crate::core::pipeline::latches::FetchPacket;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `p` - Mutable reference to the pipeline state
///
/// # Errors
///
/// Propagates memory errors, e.g. fetching from an unmapped page.
pub fn fetch_stage(p: &mut Pipeline) -> Result<()> {
    let cycle = p.cycle;

    if p.ports.decode_fetch_stall.read(cycle).unwrap_or(false) {
        trace!(cycle, "fetch: stalled by decode");
        return Ok(());
    }
    if !p.pc_valid {
        p.stats.stalls_control += 1;
        trace!(cycle, "fetch: waiting for branch resolution");
        return Ok(());
    }

    let raw = p.memory.read(u64::from(p.pc), WORD_SIZE)? as u32;
    p.ports.fetch_decode.write(
        FetchPacket {
            raw,
            pc: p.pc,
            epoch: p.epoch,
        },
        cycle,
    )?;
    p.slots.fetch = raw;
    Ok(())
}
