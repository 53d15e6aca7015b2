//! Set/page/offset address decomposition.
//!
//! An address is sliced into three fields, offset lowest, then page, then set. The
//! decomposition is pure; [`AddressLayout`] only carries the field widths.

use crate::common::error::{Result, SimError};

/// Minimum offset width: a page must hold at least one 4-byte word.
const MIN_OFFSET_BITS: u32 = 2;

/// Widest supported address.
const MAX_ADDR_BITS: u32 = 64;

/// Returns a mask covering the low `bits` bits.
#[inline]
const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Field widths of the set/page/offset split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressLayout {
    addr_bits: u32,
    page_bits: u32,
    offset_bits: u32,
}

impl AddressLayout {
    /// Creates a validated layout.
    ///
    /// # Arguments
    ///
    /// * `addr_bits`   - Total address width (at most 64).
    /// * `page_bits`   - Page index width.
    /// * `offset_bits` - Page offset width (at least 2).
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidLayout`] if the offset is narrower than a word, the address
    /// is wider than 64 bits, or page and offset leave no bits for the set index.
    pub fn new(addr_bits: u32, page_bits: u32, offset_bits: u32) -> Result<Self> {
        if addr_bits > MAX_ADDR_BITS {
            return Err(SimError::InvalidLayout(format!(
                "address width {addr_bits} exceeds {MAX_ADDR_BITS} bits"
            )));
        }
        if offset_bits < MIN_OFFSET_BITS {
            return Err(SimError::InvalidLayout(format!(
                "offset width {offset_bits} is below {MIN_OFFSET_BITS} bits"
            )));
        }
        if page_bits
            .checked_add(offset_bits)
            .is_none_or(|used| used >= addr_bits)
        {
            return Err(SimError::InvalidLayout(format!(
                "page ({page_bits}) + offset ({offset_bits}) bits leave no set bits in a {addr_bits}-bit address"
            )));
        }
        Ok(Self {
            addr_bits,
            page_bits,
            offset_bits,
        })
    }

    /// Total address width in bits.
    pub const fn addr_bits(&self) -> u32 {
        self.addr_bits
    }

    /// Set index width in bits.
    pub const fn set_bits(&self) -> u32 {
        self.addr_bits - self.page_bits - self.offset_bits
    }

    /// Page index width in bits.
    pub const fn page_bits(&self) -> u32 {
        self.page_bits
    }

    /// Page offset width in bits.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Bytes per page.
    pub const fn page_size(&self) -> usize {
        1usize << self.offset_bits
    }

    /// Set index of `addr`.
    #[inline]
    pub const fn set(&self, addr: u64) -> u64 {
        let shift = self.page_bits + self.offset_bits;
        if shift >= u64::BITS { 0 } else { addr >> shift }
    }

    /// Page index of `addr` inside its set.
    #[inline]
    pub const fn page(&self, addr: u64) -> u64 {
        (addr >> self.offset_bits) & low_mask(self.page_bits)
    }

    /// Byte offset of `addr` inside its page.
    #[inline]
    pub const fn offset(&self, addr: u64) -> u64 {
        addr & low_mask(self.offset_bits)
    }

    /// Reassembles an address from its three fields.
    #[inline]
    pub const fn address(&self, set: u64, page: u64, offset: u64) -> u64 {
        (set << (self.page_bits + self.offset_bits)) | (page << self.offset_bits) | offset
    }

    /// Checks that `addr` fits the configured address width.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] if bits above `addr_bits` are set.
    pub const fn check(&self, addr: u64) -> Result<()> {
        if addr & !low_mask(self.addr_bits) != 0 {
            return Err(SimError::AddressOutOfRange {
                addr,
                addr_bits: self.addr_bits,
            });
        }
        Ok(())
    }
}
