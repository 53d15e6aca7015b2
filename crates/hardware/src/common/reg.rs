//! Hazard-tracking Register File.
//!
//! This module provides the `RegisterFile` struct, the only data-hazard mechanism of the
//! pipeline. It provides:
//! 1. **Storage:** 32 general-purpose registers plus the HI/LO pseudo register.
//! 2. **Scoreboarding:** A `valid` bit per slot, cleared while a write is in flight.
//! 3. **Invariant Enforcement:** `$zero` always reads 0, is always valid and ignores writes.
//!
//! There is no forwarding network: a dependent instruction waits in decode until the
//! producing instruction's writeback re-validates the register.

use crate::common::error::{Result, SimError};
use crate::isa::abi::{REG_SLOTS, Register};

#[derive(Clone, Copy, Debug)]
struct Slot {
    value: u64,
    valid: bool,
}

const RESET_SLOT: Slot = Slot {
    value: 0,
    valid: true,
};

/// Register file with one pending-write bit per register.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    slots: [Slot; REG_SLOTS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register zero and valid.
    pub fn new() -> Self {
        Self {
            slots: [RESET_SLOT; REG_SLOTS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `reg` - Register to read. `$zero` always returns 0.
    ///
    /// # Returns
    ///
    /// The stored value; general-purpose registers hold zero-extended 32-bit values.
    pub fn read(&self, reg: Register) -> u64 {
        if reg.is_zero() {
            0
        } else {
            self.slots[reg.index()].value
        }
    }

    /// Returns `true` if no in-flight instruction targets `reg`.
    pub fn check(&self, reg: Register) -> bool {
        reg.is_zero() || self.slots[reg.index()].valid
    }

    /// Marks `reg` as the destination of an issued instruction.
    ///
    /// No-op for `$zero`.
    pub fn invalidate(&mut self, reg: Register) {
        if !reg.is_zero() {
            self.slots[reg.index()].valid = false;
        }
    }

    /// Commits the value of a retiring instruction and re-validates the register.
    ///
    /// # Arguments
    ///
    /// * `reg` - Destination register. Writes to `$zero` are ignored.
    /// * `value` - Value to store.
    ///
    /// # Errors
    ///
    /// [`SimError::RegisterNotPending`] if `reg` had no outstanding write, which would
    /// mean two instructions claimed the same destination at once.
    pub fn write(&mut self, reg: Register, value: u64) -> Result<()> {
        if reg.is_zero() {
            return Ok(());
        }
        let slot = &mut self.slots[reg.index()];
        if slot.valid {
            return Err(SimError::RegisterNotPending { reg: reg.index() });
        }
        slot.value = value;
        slot.valid = true;
        Ok(())
    }

    /// Returns the number of registers with a pending write.
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| !s.valid).count()
    }

    /// Renders all general-purpose registers, four per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for row in (0..32).step_by(4) {
            let line: Vec<String> = (row..row + 4)
                .map(|i| {
                    let reg = Register::from_field(i);
                    format!("{:<6}={:#010x}", reg.to_string(), self.read(reg))
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
