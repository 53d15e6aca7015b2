//! Functional Memory.
//!
//! This module implements the sparse, byte-addressable memory backing the simulated
//! address space. It provides:
//! 1. **Layout:** Set/page/offset decomposition of addresses ([`layout`]).
//! 2. **Storage:** Pages allocated on first write or load, owned by a two-level map.
//! 3. **Access:** Little-endian reads and writes of 1 to 8 bytes that may straddle
//!    page and set boundaries.
//! 4. **Diagnostics:** A textual dump of all non-zero words.
//!
//! Reading a byte whose set or page was never allocated is an error, never a zero.

/// Set/page/offset address decomposition.
pub mod layout;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::debug;

use self::layout::AddressLayout;
use crate::common::constants::{MAX_ACCESS_WIDTH, TEXT_SECTION, WORD_SIZE};
use crate::common::error::{Result, SimError};
use crate::sim::loader::Section;

/// Pages of one set, keyed by page index.
type PageTable = BTreeMap<u64, Box<[u8]>>;

/// Sparse functional memory.
#[derive(Debug)]
pub struct FuncMemory {
    layout: AddressLayout,
    sets: BTreeMap<u64, PageTable>,
    text_start: Option<u64>,
}

impl FuncMemory {
    /// Creates an empty memory with the given address split.
    pub const fn new(layout: AddressLayout) -> Self {
        Self {
            layout,
            sets: BTreeMap::new(),
            text_start: None,
        }
    }

    /// Returns the address split.
    pub const fn layout(&self) -> &AddressLayout {
        &self.layout
    }

    /// Address of the `.text` section, recorded by [`FuncMemory::load_sections`].
    ///
    /// # Errors
    ///
    /// [`SimError::MissingSection`] if no `.text` section was loaded.
    pub fn start_pc(&self) -> Result<u64> {
        self.text_start
            .ok_or_else(|| SimError::MissingSection(TEXT_SECTION.to_string()))
    }

    /// Number of bytes currently backed by allocated pages.
    pub fn allocated_bytes(&self) -> usize {
        self.sets.values().map(BTreeMap::len).sum::<usize>() * self.layout.page_size()
    }

    /// Validates an access width.
    const fn check_width(width: usize) -> Result<()> {
        if width == 0 || width > MAX_ACCESS_WIDTH {
            return Err(SimError::InvalidWidth { width });
        }
        Ok(())
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`SimError::UnmappedSet`] / [`SimError::UnmappedPage`] if the byte was never
    /// allocated, [`SimError::AddressOutOfRange`] if it lies outside the address space.
    pub fn read_byte(&self, addr: u64) -> Result<u8> {
        self.layout.check(addr)?;
        let (set, page, offset) = (
            self.layout.set(addr),
            self.layout.page(addr),
            self.layout.offset(addr),
        );
        let pages = self
            .sets
            .get(&set)
            .ok_or(SimError::UnmappedSet { addr, set })?;
        let bytes = pages
            .get(&page)
            .ok_or(SimError::UnmappedPage { addr, set, page })?;
        Ok(bytes[offset as usize])
    }

    /// Writes one byte, allocating its set and page if needed.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] if the address lies outside the address space.
    pub fn write_byte(&mut self, addr: u64, value: u8) -> Result<()> {
        self.layout.check(addr)?;
        let (set, page, offset) = (
            self.layout.set(addr),
            self.layout.page(addr),
            self.layout.offset(addr),
        );
        let page_size = self.layout.page_size();
        let bytes = self
            .sets
            .entry(set)
            .or_default()
            .entry(page)
            .or_insert_with(|| vec![0u8; page_size].into_boxed_slice());
        bytes[offset as usize] = value;
        Ok(())
    }

    /// Reads a little-endian value.
    ///
    /// Each byte re-derives its own set, page and offset, so the access may cross
    /// page and set boundaries.
    ///
    /// # Arguments
    ///
    /// * `addr`  - Address of the lowest byte.
    /// * `width` - Number of bytes, `1..=8`.
    ///
    /// # Returns
    ///
    /// The assembled value, zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidWidth`] for a bad width, otherwise as [`FuncMemory::read_byte`]
    /// for the first failing byte.
    pub fn read(&self, addr: u64, width: usize) -> Result<u64> {
        Self::check_width(width)?;
        let mut value = 0u64;
        for i in 0..width {
            let byte = self.read_byte(addr.wrapping_add(i as u64))?;
            value |= u64::from(byte) << (8 * i);
        }
        Ok(value)
    }

    /// Writes the `width` low bytes of `value`, little-endian.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidWidth`] for a bad width, [`SimError::AddressOutOfRange`] if a
    /// byte falls outside the address space.
    pub fn write(&mut self, value: u64, addr: u64, width: usize) -> Result<()> {
        Self::check_width(width)?;
        for (i, byte) in value.to_le_bytes().iter().take(width).enumerate() {
            self.write_byte(addr.wrapping_add(i as u64), *byte)?;
        }
        Ok(())
    }

    /// Copies every section into memory and records the start of `.text`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] if a section does not fit the address space.
    pub fn load_sections(&mut self, sections: &[Section]) -> Result<()> {
        for section in sections {
            debug!(
                name = %section.name,
                start = format_args!("{:#x}", section.start_addr),
                size = section.size,
                "loading section"
            );
            for (i, byte) in section.content.iter().enumerate() {
                self.write_byte(section.start_addr + i as u64, *byte)?;
            }
            if section.name == TEXT_SECTION {
                self.text_start = Some(section.start_addr);
            }
        }
        Ok(())
    }

    /// Renders the memory parameters and every non-zero aligned word.
    ///
    /// Words are printed as their bytes in address order. Each run of unallocated or
    /// all-zero words is collapsed into a single `....` line.
    ///
    /// # Arguments
    ///
    /// * `indent` - Prefix applied to every line.
    pub fn dump(&self, indent: &str) -> String {
        let l = &self.layout;
        let mut out = String::new();
        let _ = writeln!(out, "{indent}Dump functional memory");
        let _ = writeln!(out, "{indent}  Parameters:");
        let _ = writeln!(out, "{indent}    Address size = {} bits", l.addr_bits());
        let _ = writeln!(out, "{indent}    Set bits = {} bits", l.set_bits());
        let _ = writeln!(out, "{indent}    Page bits = {} bits", l.page_bits());
        let _ = writeln!(out, "{indent}    Offset bits = {} bits", l.offset_bits());
        let _ = writeln!(
            out,
            "{indent}    Start .text addr = {:#x}",
            self.text_start.unwrap_or(0)
        );
        let _ = writeln!(out, "{indent}    Size of memory = {} bytes", 1u128 << l.addr_bits());
        let _ = writeln!(out, "{indent}    Allocated = {} bytes", self.allocated_bytes());
        let _ = writeln!(out, "{indent}  Content:");

        let mut gap = false;
        let mut next_addr = 0u64;
        for (&set, pages) in &self.sets {
            for (&page, bytes) in pages {
                let base = l.address(set, page, 0);
                gap |= base != next_addr;
                for (i, word) in bytes.chunks_exact(WORD_SIZE).enumerate() {
                    if word.iter().all(|&b| b == 0) {
                        gap = true;
                        continue;
                    }
                    if gap {
                        let _ = writeln!(out, "{indent}  ....  ");
                        gap = false;
                    }
                    let hex: String = word.iter().map(|b| format!("{b:02x}")).collect();
                    let addr = base + (i * WORD_SIZE) as u64;
                    let _ = writeln!(out, "{indent}    {addr:#x}:    {hex}");
                }
                next_addr = base.wrapping_add(l.page_size() as u64);
            }
        }
        let tail_unmapped = next_addr != 0 && l.check(next_addr).is_ok();
        if gap || tail_unmapped || self.sets.is_empty() {
            let _ = writeln!(out, "{indent}  ....  ");
        }
        out
    }
}
