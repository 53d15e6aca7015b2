//! Latched inter-stage ports.
//!
//! A port carries values from one stage to the next with a fixed latency. A value
//! written in cycle `c` is delivered only in cycle `c + latency`; if no stage reads it
//! then, the engine's end-of-cycle [`Port::lost`] sweep drops it. A value is never
//! delivered late and never more than `fanout` times.
//!
//! Stall feedback uses the same type with `T = bool`, flowing upstream.

use std::collections::VecDeque;

use crate::common::error::{Result, SimError};
use crate::config::PipelineConfig;

#[derive(Debug)]
struct InFlight<T> {
    value: T,
    ready: u64,
    reads: usize,
}

/// Typed, latched link between two pipeline stages.
#[derive(Debug)]
pub struct Port<T> {
    name: &'static str,
    latency: u64,
    bandwidth: usize,
    fanout: usize,
    queue: VecDeque<InFlight<T>>,
    write_cycle: u64,
    writes_in_cycle: usize,
}

impl<T: Clone> Port<T> {
    /// Creates a port with explicit timing parameters.
    ///
    /// # Arguments
    ///
    /// * `name`      - Used in error messages and logs.
    /// * `latency`   - Cycles from write to delivery.
    /// * `bandwidth` - Maximum writes per cycle.
    /// * `fanout`    - Maximum reads served per value.
    pub const fn new(name: &'static str, latency: u64, bandwidth: usize, fanout: usize) -> Self {
        Self {
            name,
            latency,
            bandwidth,
            fanout,
            queue: VecDeque::new(),
            write_cycle: 0,
            writes_in_cycle: 0,
        }
    }

    /// Creates a port using the shared pipeline port parameters.
    pub const fn from_config(name: &'static str, config: &PipelineConfig) -> Self {
        Self::new(
            name,
            config.port_latency,
            config.port_bandwidth,
            config.port_fanout,
        )
    }

    /// Returns the port name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Sends a value, to be delivered `latency` cycles later.
    ///
    /// # Errors
    ///
    /// [`SimError::PortOverflow`] if the port already accepted `bandwidth` writes in
    /// this cycle.
    pub fn write(&mut self, value: T, cycle: u64) -> Result<()> {
        if self.write_cycle != cycle {
            self.write_cycle = cycle;
            self.writes_in_cycle = 0;
        }
        if self.writes_in_cycle >= self.bandwidth {
            return Err(SimError::PortOverflow {
                port: self.name,
                bandwidth: self.bandwidth,
                cycle,
            });
        }
        self.writes_in_cycle += 1;
        self.queue.push_back(InFlight {
            value,
            ready: cycle + self.latency,
            reads: 0,
        });
        Ok(())
    }

    /// Receives the value due in `cycle`, if any.
    ///
    /// A value stays readable for up to `fanout` reads within its delivery cycle.
    pub fn read(&mut self, cycle: u64) -> Option<T> {
        let idx = self.queue.iter().position(|f| f.ready == cycle)?;
        let slot = &mut self.queue[idx];
        slot.reads += 1;
        let value = slot.value.clone();
        if slot.reads >= self.fanout {
            let _ = self.queue.remove(idx);
        }
        Some(value)
    }

    /// Drops every value whose delivery cycle is `cycle` or earlier.
    ///
    /// # Returns
    ///
    /// How many of the dropped values were never read.
    pub fn lost(&mut self, cycle: u64) -> usize {
        let mut unread = 0;
        self.queue.retain(|f| {
            let keep = f.ready > cycle;
            if !keep && f.reads == 0 {
                unread += 1;
            }
            keep
        });
        unread
    }

    /// Number of values written but not yet delivered or dropped.
    pub fn in_flight(&self) -> usize {
        self.queue.len()
    }
}
