//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts the fetched word into an [`Instruction`] using the ISA decoder.
//! 2. **Hazard Detection:** Holds the instruction back while a register it reads or
//!    writes is still pending, retrying on every following cycle.
//! 3. **Register Read:** Reads the source values and marks the destination pending.
//! 4. **PC Update:** Advances the PC, or blocks fetch while a branch or jump is in flight.
//!
//! [`Instruction`]: crate::isa::instruction::Instruction

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::Result;
use crate::core::pipeline::engine::Pipeline;
use crate::core::pipeline::hazards::blocking_register;
use crate::core::pipeline::latches::FetchPacket;
use crate::isa::decode::decode;

/// Takes the word to decode this cycle: the held-back word if there is one, otherwise
/// the packet arriving from fetch, provided it belongs to the current epoch and PC.
fn next_packet(p: &mut Pipeline) -> Option<FetchPacket> {
    if let Some(packet) = p.pending.take() {
        return Some(packet);
    }
    let cycle = p.cycle;
    let packet = p.ports.fetch_decode.read(cycle)?;
    if p.pc_valid && packet.epoch == p.epoch && packet.pc == p.pc {
        Some(packet)
    } else {
        trace!(cycle, pc = format_args!("{:#x}", packet.pc), "decode: stale fetch dropped");
        None
    }
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `p` - Mutable reference to the pipeline state.
///
/// # Errors
///
/// [`crate::common::error::SimError::UnknownInstruction`] for an unsupported word, or a
/// port overflow.
pub fn decode_stage(p: &mut Pipeline) -> Result<()> {
    let cycle = p.cycle;

    if p.ports.execute_decode_stall.read(cycle).unwrap_or(false) {
        p.ports.decode_fetch_stall.write(true, cycle)?;
        trace!(cycle, "decode: stalled by execute");
        return Ok(());
    }

    let Some(packet) = next_packet(p) else {
        return Ok(());
    };

    let mut instr = decode(packet.raw, packet.pc)?;

    if let Some(reg) = blocking_register(&p.regs, &instr) {
        trace!(cycle, %reg, instr = %instr, "decode: data hazard");
        p.pending = Some(packet);
        p.ports.decode_fetch_stall.write(true, cycle)?;
        p.stats.stalls_data += 1;
        return Ok(());
    }

    instr.v_src_a = p.regs.read(instr.src_a);
    instr.v_src_b = p.regs.read(instr.src_b);
    p.regs.invalidate(instr.dst);

    p.ports.decode_execute.write(instr, cycle)?;
    p.slots.decode = instr;
    trace!(cycle, pc = format_args!("{:#x}", instr.pc), instr = %instr, "decode: issue");

    if instr.is_jump() {
        p.pc_valid = false;
    } else {
        p.pc = p.pc.wrapping_add(INSTRUCTION_SIZE);
    }
    Ok(())
}
