//! MIPS o32 ABI register names.
//!
//! Defines the architectural register identifier used by the decoder, the register
//! file and the disassembler, together with the conventional `$name` spelling of each
//! register. Index 32 is a simulator-internal pseudo register holding the HI/LO pair
//! written by the multiply and divide instructions.

use std::fmt;

/// Number of architectural general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Number of register-file slots (general-purpose registers plus HI/LO).
pub const REG_SLOTS: usize = GPR_COUNT + 1;

/// ABI names for `$0`-`$31`, then the HI/LO pseudo register.
const REG_NAMES: [&str; REG_SLOTS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "s8", "ra", "hilo",
];

/// A register-file slot.
///
/// Instruction fields are 5 bits wide, so decoded registers are always in `0..32`;
/// [`Register::HI_LO`] is only ever produced by the instruction table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(u8);

impl Register {
    /// Constant-zero register.
    pub const ZERO: Self = Self(0);
    /// Assembler temporary.
    pub const AT: Self = Self(1);
    /// First return value.
    pub const V0: Self = Self(2);
    /// Second return value.
    pub const V1: Self = Self(3);
    /// First argument.
    pub const A0: Self = Self(4);
    /// Second argument.
    pub const A1: Self = Self(5);
    /// Third argument.
    pub const A2: Self = Self(6);
    /// Fourth argument.
    pub const A3: Self = Self(7);
    /// Temporary `$t0`.
    pub const T0: Self = Self(8);
    /// Temporary `$t1`.
    pub const T1: Self = Self(9);
    /// Temporary `$t2`.
    pub const T2: Self = Self(10);
    /// Temporary `$t3`.
    pub const T3: Self = Self(11);
    /// Saved `$s0`.
    pub const S0: Self = Self(16);
    /// Saved `$s1`.
    pub const S1: Self = Self(17);
    /// Global pointer.
    pub const GP: Self = Self(28);
    /// Stack pointer.
    pub const SP: Self = Self(29);
    /// Return address, written by `jal`.
    pub const RA: Self = Self(31);
    /// HI/LO pair; upper 32 bits are HI, lower 32 bits are LO.
    pub const HI_LO: Self = Self(GPR_COUNT as u8);

    /// Builds a register from a 5-bit instruction field.
    #[inline]
    pub const fn from_field(field: u32) -> Self {
        Self((field & 0x1F) as u8)
    }

    /// Returns the register-file slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` for the constant-zero register.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the ABI name without the `$` sigil.
    pub fn name(self) -> &'static str {
        REG_NAMES.get(self.index()).copied().unwrap_or("??")
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}
