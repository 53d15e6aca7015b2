//! The instruction table.
//!
//! Every supported operation is described by exactly one [`IsaEntry`]. The decoder,
//! the disassembler, the execute stage and the memory stage all read the same entry,
//! so adding an operation means adding a row here and nothing else. It provides:
//! 1. **Identity:** mnemonic, opcode, function code and encoding format.
//! 2. **Operands:** which register fields are read and written, and how they render.
//! 3. **Semantics:** immediate extension, operation class, memory access and the
//!    execute function.

use crate::core::units::{alu, bru, lsu};
use crate::isa::abi::Register;
use crate::isa::instruction::{Format, Instruction, InstructionBits};

/// Operation kind. The discriminant is the row index in [`ISA_TABLE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum OpKind {
    Add,
    Addu,
    Sub,
    Subu,
    Addi,
    Addiu,
    Mult,
    Multu,
    Div,
    Divu,
    Mfhi,
    Mthi,
    Mflo,
    Mtlo,
    #[default]
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Srav,
    Lui,
    Slt,
    Sltu,
    Slti,
    Sltiu,
    And,
    Or,
    Xor,
    Nor,
    Andi,
    Ori,
    Xori,
    Beq,
    Bne,
    Blez,
    Bgtz,
    J,
    Jal,
    Jr,
    Jalr,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Syscall,
    Break,
    Trap,
}

impl OpKind {
    /// Returns the table entry describing this operation.
    #[inline]
    pub const fn entry(self) -> &'static IsaEntry {
        &ISA_TABLE[self as usize]
    }
}

/// Broad operation class, used for pipeline predicates and statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Integer arithmetic, logic, shifts and comparisons.
    Alu,
    /// Multiply, divide and HI/LO moves.
    MulDiv,
    /// Conditional PC-relative branch.
    Branch,
    /// Unconditional jump, direct or through a register.
    Jump,
    /// Memory read.
    Load,
    /// Memory write.
    Store,
    /// `syscall`, `break`, `trap`; executed as no-ops.
    System,
}

/// How the 16-bit immediate is widened to 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmPolicy {
    /// Sign-extended (arithmetic immediates, comparisons, memory offsets, branches).
    Signed,
    /// Zero-extended (logical immediates).
    Zero,
    /// Placed in the upper half-word (`lui`).
    Upper,
    /// No immediate operand.
    None,
}

/// Width and extension of a load or store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemAccess {
    /// Access width in bytes.
    pub width: usize,
    /// Whether a loaded value is sign-extended to 32 bits.
    pub signed: bool,
}

/// Which register fields an operation reads (`src_a`, `src_b`) and writes (`dst`).
///
/// Unused slots resolve to `$zero`, which never causes a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegUse {
    /// `d <- s, t`.
    DstSrcTrg,
    /// `d <- t`; `t` is carried in `src_b`.
    DstTrg,
    /// `t <- s`.
    TrgSrc,
    /// `t <-` (no source).
    Trg,
    /// Reads `s` and `t`, writes nothing.
    SrcTrg,
    /// Reads `s`, writes nothing.
    Src,
    /// `d <- s`.
    DstSrc,
    /// `HI_LO <- s, t`.
    HiLoSrcTrg,
    /// `d <- HI_LO`.
    DstHiLo,
    /// `HI_LO <- s, HI_LO`; the untouched half is preserved.
    HiLoSrc,
    /// `$ra <-`.
    Link,
    /// No register operands.
    None,
}

impl RegUse {
    /// Resolves the register slots of an encoded word.
    ///
    /// # Returns
    ///
    /// `(src_a, src_b, dst)`.
    pub fn resolve(self, raw: u32) -> (Register, Register, Register) {
        let z = Register::ZERO;
        match self {
            Self::DstSrcTrg => (raw.rs(), raw.rt(), raw.rd()),
            Self::DstTrg => (z, raw.rt(), raw.rd()),
            Self::TrgSrc => (raw.rs(), z, raw.rt()),
            Self::Trg => (z, z, raw.rt()),
            Self::SrcTrg => (raw.rs(), raw.rt(), z),
            Self::Src => (raw.rs(), z, z),
            Self::DstSrc => (raw.rs(), z, raw.rd()),
            Self::HiLoSrcTrg => (raw.rs(), raw.rt(), Register::HI_LO),
            Self::DstHiLo => (Register::HI_LO, z, raw.rd()),
            Self::HiLoSrc => (raw.rs(), Register::HI_LO, Register::HI_LO),
            Self::Link => (z, z, Register::RA),
            Self::None => (z, z, z),
        }
    }
}

/// Textual operand layout used by the disassembler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandPattern {
    /// `add $d, $s, $t`
    DstSrcTrg,
    /// `addi $t, $s, 0xC`
    TrgSrcImm,
    /// `mult $s, $t`
    SrcTrg,
    /// `mfhi $d`
    Dst,
    /// `jr $s`
    Src,
    /// `sll $d, $t, 0xS`
    DstTrgShamt,
    /// `sllv $d, $t, $s`
    DstTrgSrc,
    /// `lui $t, 0xC`
    TrgImm,
    /// `beq $s, $t, 0xC`
    SrcTrgImm,
    /// `blez $s, 0xC`
    SrcImm,
    /// `j 0xA`
    Addr,
    /// `syscall`
    Bare,
    /// `lw $t, 0xC($s)`
    TrgMem,
}

/// Execute function: fills the computed fields of an issued instruction.
pub type ExecFn = fn(&mut Instruction);

/// One row of the instruction table.
#[derive(Debug)]
pub struct IsaEntry {
    /// Assembler mnemonic.
    pub name: &'static str,
    /// Primary opcode field.
    pub opcode: u32,
    /// Function field; zero for I and J formats.
    pub funct: u32,
    /// Encoding shape.
    pub format: Format,
    /// Operation kind (equal to the row's own index).
    pub kind: OpKind,
    /// Register read/write pattern.
    pub regs: RegUse,
    /// Disassembly layout.
    pub pattern: OperandPattern,
    /// Immediate extension.
    pub imm: ImmPolicy,
    /// Operation class.
    pub class: OpClass,
    /// Memory access for loads and stores.
    pub mem: Option<MemAccess>,
    /// Execute-stage semantics.
    pub exec: ExecFn,
}

/// Number of supported operations.
pub const ISA_SIZE: usize = 51;

const fn mem(width: usize, signed: bool) -> Option<MemAccess> {
    Some(MemAccess { width, signed })
}

macro_rules! isa {
    ($name:literal, $op:literal, $funct:literal, $fmt:ident, $kind:ident, $regs:ident,
     $pat:ident, $imm:ident, $class:ident, $mem:expr, $exec:path) => {
        IsaEntry {
            name: $name,
            opcode: $op,
            funct: $funct,
            format: Format::$fmt,
            kind: OpKind::$kind,
            regs: RegUse::$regs,
            pattern: OperandPattern::$pat,
            imm: ImmPolicy::$imm,
            class: OpClass::$class,
            mem: $mem,
            exec: $exec,
        }
    };
}

/// The instruction table, in [`OpKind`] order.
#[rustfmt::skip]
pub static ISA_TABLE: [IsaEntry; ISA_SIZE] = [
    isa!("add",     0x00, 0x20, R, Add,     DstSrcTrg,  DstSrcTrg,   None,   Alu,    None, alu::arithmetic::add),
    isa!("addu",    0x00, 0x21, R, Addu,    DstSrcTrg,  DstSrcTrg,   None,   Alu,    None, alu::arithmetic::add),
    isa!("sub",     0x00, 0x22, R, Sub,     DstSrcTrg,  DstSrcTrg,   None,   Alu,    None, alu::arithmetic::sub),
    isa!("subu",    0x00, 0x23, R, Subu,    DstSrcTrg,  DstSrcTrg,   None,   Alu,    None, alu::arithmetic::sub),
    isa!("addi",    0x08, 0x00, I, Addi,    TrgSrc,     TrgSrcImm,   Signed, Alu,    None, alu::arithmetic::add_imm),
    isa!("addiu",   0x09, 0x00, I, Addiu,   TrgSrc,     TrgSrcImm,   Signed, Alu,    None, alu::arithmetic::add_imm),
    isa!("mult",    0x00, 0x18, R, Mult,    HiLoSrcTrg, SrcTrg,      None,   MulDiv, None, alu::arithmetic::mult),
    isa!("multu",   0x00, 0x19, R, Multu,   HiLoSrcTrg, SrcTrg,      None,   MulDiv, None, alu::arithmetic::multu),
    isa!("div",     0x00, 0x1A, R, Div,     HiLoSrcTrg, SrcTrg,      None,   MulDiv, None, alu::arithmetic::div),
    isa!("divu",    0x00, 0x1B, R, Divu,    HiLoSrcTrg, SrcTrg,      None,   MulDiv, None, alu::arithmetic::divu),
    isa!("mfhi",    0x00, 0x10, R, Mfhi,    DstHiLo,    Dst,         None,   MulDiv, None, alu::mfhi),
    isa!("mthi",    0x00, 0x11, R, Mthi,    HiLoSrc,    Src,         None,   MulDiv, None, alu::mthi),
    isa!("mflo",    0x00, 0x12, R, Mflo,    DstHiLo,    Dst,         None,   MulDiv, None, alu::mflo),
    isa!("mtlo",    0x00, 0x13, R, Mtlo,    HiLoSrc,    Src,         None,   MulDiv, None, alu::mtlo),
    isa!("sll",     0x00, 0x00, R, Sll,     DstTrg,     DstTrgShamt, None,   Alu,    None, alu::shifts::sll),
    isa!("srl",     0x00, 0x02, R, Srl,     DstTrg,     DstTrgShamt, None,   Alu,    None, alu::shifts::srl),
    isa!("sra",     0x00, 0x03, R, Sra,     DstTrg,     DstTrgShamt, None,   Alu,    None, alu::shifts::sra),
    isa!("sllv",    0x00, 0x04, R, Sllv,    DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::shifts::sllv),
    isa!("srlv",    0x00, 0x06, R, Srlv,    DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::shifts::srlv),
    isa!("srav",    0x00, 0x07, R, Srav,    DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::shifts::srav),
    isa!("lui",     0x0F, 0x00, I, Lui,     Trg,        TrgImm,      Upper,  Alu,    None, alu::arithmetic::lui),
    isa!("slt",     0x00, 0x2A, R, Slt,     DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::logic::slt),
    isa!("sltu",    0x00, 0x2B, R, Sltu,    DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::logic::sltu),
    isa!("slti",    0x0A, 0x00, I, Slti,    TrgSrc,     SrcTrgImm,   Signed, Alu,    None, alu::logic::slti),
    isa!("sltiu",   0x0B, 0x00, I, Sltiu,   TrgSrc,     SrcTrgImm,   Signed, Alu,    None, alu::logic::sltiu),
    isa!("and",     0x00, 0x24, R, And,     DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::logic::and),
    isa!("or",      0x00, 0x25, R, Or,      DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::logic::or),
    isa!("xor",     0x00, 0x26, R, Xor,     DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::logic::xor),
    isa!("nor",     0x00, 0x27, R, Nor,     DstSrcTrg,  DstTrgSrc,   None,   Alu,    None, alu::logic::nor),
    isa!("andi",    0x0C, 0x00, I, Andi,    TrgSrc,     SrcTrgImm,   Zero,   Alu,    None, alu::logic::and_imm),
    isa!("ori",     0x0D, 0x00, I, Ori,     TrgSrc,     SrcTrgImm,   Zero,   Alu,    None, alu::logic::or_imm),
    isa!("xori",    0x0E, 0x00, I, Xori,    TrgSrc,     SrcTrgImm,   Zero,   Alu,    None, alu::logic::xor_imm),
    isa!("beq",     0x04, 0x00, I, Beq,     SrcTrg,     SrcTrgImm,   Signed, Branch, None, bru::beq),
    isa!("bne",     0x05, 0x00, I, Bne,     SrcTrg,     SrcTrgImm,   Signed, Branch, None, bru::bne),
    isa!("blez",    0x06, 0x00, I, Blez,    Src,        SrcImm,      Signed, Branch, None, bru::blez),
    isa!("bgtz",    0x07, 0x00, I, Bgtz,    Src,        SrcImm,      Signed, Branch, None, bru::bgtz),
    isa!("j",       0x02, 0x00, J, J,       None,       Addr,        None,   Jump,   None, bru::j),
    isa!("jal",     0x03, 0x00, J, Jal,     Link,       Addr,        None,   Jump,   None, bru::jal),
    isa!("jr",      0x00, 0x08, R, Jr,      Src,        Src,         None,   Jump,   None, bru::jr),
    isa!("jalr",    0x00, 0x09, R, Jalr,    DstSrc,     Src,         None,   Jump,   None, bru::jalr),
    isa!("lb",      0x20, 0x00, I, Lb,      TrgSrc,     TrgMem,      Signed, Load,   mem(1, true),  lsu::effective_address),
    isa!("lh",      0x21, 0x00, I, Lh,      TrgSrc,     TrgMem,      Signed, Load,   mem(2, true),  lsu::effective_address),
    isa!("lw",      0x23, 0x00, I, Lw,      TrgSrc,     TrgMem,      Signed, Load,   mem(4, false), lsu::effective_address),
    isa!("lbu",     0x24, 0x00, I, Lbu,     TrgSrc,     TrgMem,      Signed, Load,   mem(1, false), lsu::effective_address),
    isa!("lhu",     0x25, 0x00, I, Lhu,     TrgSrc,     TrgMem,      Signed, Load,   mem(2, false), lsu::effective_address),
    isa!("sb",      0x28, 0x00, I, Sb,      SrcTrg,     TrgMem,      Signed, Store,  mem(1, false), lsu::effective_address),
    isa!("sh",      0x29, 0x00, I, Sh,      SrcTrg,     TrgMem,      Signed, Store,  mem(2, false), lsu::effective_address),
    isa!("sw",      0x2B, 0x00, I, Sw,      SrcTrg,     TrgMem,      Signed, Store,  mem(4, false), lsu::effective_address),
    isa!("syscall", 0x00, 0x0C, R, Syscall, None,       Bare,        None,   System, None, alu::nop),
    isa!("break",   0x00, 0x0D, R, Break,   None,       Bare,        None,   System, None, alu::nop),
    isa!("trap",    0x1A, 0x00, J, Trap,    None,       Addr,        None,   System, None, alu::nop),
];

/// Finds the table entry for an encoding.
///
/// # Arguments
///
/// * `format` - Encoding shape derived from the opcode.
/// * `opcode` - Primary opcode field.
/// * `funct`  - Function field; only compared for R-format words.
///
/// # Returns
///
/// The matching entry, or `None` if the combination is not supported.
pub fn lookup(format: Format, opcode: u32, funct: u32) -> Option<&'static IsaEntry> {
    ISA_TABLE.iter().find(|e| {
        e.format == format && e.opcode == opcode && (format != Format::R || e.funct == funct)
    })
}
