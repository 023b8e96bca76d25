//! # Opcode Table
//!
//! This module maps every opcode byte to the handler that executes it. The
//! table is the single place new opcodes are registered: the execution loop
//! looks an opcode up, then hands the entry to the dispatcher, which picks the
//! handler from the entry's `Instruction` variant.
//!
//! Bytes without an entry are unknown opcodes and stop execution with
//! `ExecutionError::UnknownOpcode`.

use crate::addressing::AddressingMode;

/// Instruction family an opcode executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load Accumulator
    Lda,
    /// Load X Register
    Ldx,
    /// Load Y Register
    Ldy,
    /// Store Accumulator
    Sta,
    /// Store X Register
    Stx,
    /// Store Y Register
    Sty,
    /// Jump to Subroutine
    Jsr,
    /// Return from Subroutine
    Rts,
    /// No Operation
    Nop,
}

impl Instruction {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Jsr => "JSR",
            Instruction::Rts => "RTS",
            Instruction::Nop => "NOP",
        }
    }
}

/// Metadata for a single opcode.
///
/// # Fields
///
/// - `instruction`: Handler family that executes the opcode
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Cycle cost without a page-crossing penalty
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
///
/// # Examples
///
/// ```
/// use cpu6502::{lookup, AddressingMode, Instruction};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.mnemonic(), "LDA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Handler family for this opcode.
    pub instruction: Instruction,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(instruction: Instruction, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            instruction,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }

    /// Mnemonic of the instruction family.
    pub const fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }
}

pub const LDA_IMMEDIATE: u8 = 0xA9;
pub const LDA_ZERO_PAGE: u8 = 0xA5;
pub const LDA_ZERO_PAGE_X: u8 = 0xB5;
pub const LDA_ABSOLUTE: u8 = 0xAD;
pub const LDA_ABSOLUTE_X: u8 = 0xBD;
pub const LDA_ABSOLUTE_Y: u8 = 0xB9;
pub const LDA_INDIRECT_X: u8 = 0xA1;
pub const LDA_INDIRECT_Y: u8 = 0xB1;

pub const LDX_IMMEDIATE: u8 = 0xA2;
pub const LDX_ZERO_PAGE: u8 = 0xA6;
pub const LDX_ZERO_PAGE_Y: u8 = 0xB6;
pub const LDX_ABSOLUTE: u8 = 0xAE;
pub const LDX_ABSOLUTE_Y: u8 = 0xBE;

pub const LDY_IMMEDIATE: u8 = 0xA0;
pub const LDY_ZERO_PAGE: u8 = 0xA4;
pub const LDY_ZERO_PAGE_X: u8 = 0xB4;
pub const LDY_ABSOLUTE: u8 = 0xAC;
pub const LDY_ABSOLUTE_X: u8 = 0xBC;

pub const STA_ZERO_PAGE: u8 = 0x85;
pub const STA_ZERO_PAGE_X: u8 = 0x95;
pub const STA_ABSOLUTE: u8 = 0x8D;
pub const STA_ABSOLUTE_X: u8 = 0x9D;
pub const STA_ABSOLUTE_Y: u8 = 0x99;
pub const STA_INDIRECT_X: u8 = 0x81;
pub const STA_INDIRECT_Y: u8 = 0x91;

pub const STX_ZERO_PAGE: u8 = 0x86;
pub const STX_ZERO_PAGE_Y: u8 = 0x96;
pub const STX_ABSOLUTE: u8 = 0x8E;

pub const STY_ZERO_PAGE: u8 = 0x84;
pub const STY_ZERO_PAGE_X: u8 = 0x94;
pub const STY_ABSOLUTE: u8 = 0x8C;

pub const JSR: u8 = 0x20;
pub const RTS: u8 = 0x60;
pub const NOP: u8 = 0xEA;

/// Registered opcodes. Adding an opcode means adding a row here.
const DEFINITIONS: &[(u8, OpcodeMetadata)] = {
    use AddressingMode::*;
    use Instruction::*;
    &[
        (LDA_IMMEDIATE, OpcodeMetadata::new(Lda, Immediate, 2)),
        (LDA_ZERO_PAGE, OpcodeMetadata::new(Lda, ZeroPage, 3)),
        (LDA_ZERO_PAGE_X, OpcodeMetadata::new(Lda, ZeroPageX, 4)),
        (LDA_ABSOLUTE, OpcodeMetadata::new(Lda, Absolute, 4)),
        (LDA_ABSOLUTE_X, OpcodeMetadata::new(Lda, AbsoluteX, 4)),
        (LDA_ABSOLUTE_Y, OpcodeMetadata::new(Lda, AbsoluteY, 4)),
        (LDA_INDIRECT_X, OpcodeMetadata::new(Lda, IndirectX, 6)),
        (LDA_INDIRECT_Y, OpcodeMetadata::new(Lda, IndirectY, 5)),
        (LDX_IMMEDIATE, OpcodeMetadata::new(Ldx, Immediate, 2)),
        (LDX_ZERO_PAGE, OpcodeMetadata::new(Ldx, ZeroPage, 3)),
        (LDX_ZERO_PAGE_Y, OpcodeMetadata::new(Ldx, ZeroPageY, 4)),
        (LDX_ABSOLUTE, OpcodeMetadata::new(Ldx, Absolute, 4)),
        (LDX_ABSOLUTE_Y, OpcodeMetadata::new(Ldx, AbsoluteY, 4)),
        (LDY_IMMEDIATE, OpcodeMetadata::new(Ldy, Immediate, 2)),
        (LDY_ZERO_PAGE, OpcodeMetadata::new(Ldy, ZeroPage, 3)),
        (LDY_ZERO_PAGE_X, OpcodeMetadata::new(Ldy, ZeroPageX, 4)),
        (LDY_ABSOLUTE, OpcodeMetadata::new(Ldy, Absolute, 4)),
        (LDY_ABSOLUTE_X, OpcodeMetadata::new(Ldy, AbsoluteX, 4)),
        (STA_ZERO_PAGE, OpcodeMetadata::new(Sta, ZeroPage, 3)),
        (STA_ZERO_PAGE_X, OpcodeMetadata::new(Sta, ZeroPageX, 4)),
        (STA_ABSOLUTE, OpcodeMetadata::new(Sta, Absolute, 4)),
        (STA_ABSOLUTE_X, OpcodeMetadata::new(Sta, AbsoluteX, 5)),
        (STA_ABSOLUTE_Y, OpcodeMetadata::new(Sta, AbsoluteY, 5)),
        (STA_INDIRECT_X, OpcodeMetadata::new(Sta, IndirectX, 6)),
        (STA_INDIRECT_Y, OpcodeMetadata::new(Sta, IndirectY, 6)),
        (STX_ZERO_PAGE, OpcodeMetadata::new(Stx, ZeroPage, 3)),
        (STX_ZERO_PAGE_Y, OpcodeMetadata::new(Stx, ZeroPageY, 4)),
        (STX_ABSOLUTE, OpcodeMetadata::new(Stx, Absolute, 4)),
        (STY_ZERO_PAGE, OpcodeMetadata::new(Sty, ZeroPage, 3)),
        (STY_ZERO_PAGE_X, OpcodeMetadata::new(Sty, ZeroPageX, 4)),
        (STY_ABSOLUTE, OpcodeMetadata::new(Sty, Absolute, 4)),
        (JSR, OpcodeMetadata::new(Jsr, Absolute, 6)),
        (RTS, OpcodeMetadata::new(Rts, Implicit, 6)),
        (NOP, OpcodeMetadata::new(Nop, Implicit, 2)),
    ]
};

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < DEFINITIONS.len() {
        let (opcode, metadata) = DEFINITIONS[i];
        table[opcode as usize] = Some(metadata);
        i += 1;
    }
    table
}

/// 256-entry opcode table indexed by opcode byte value.
///
/// `None` marks a byte with no handler.
///
/// # Examples
///
/// ```
/// use cpu6502::{Instruction, OPCODE_TABLE};
///
/// let jsr = OPCODE_TABLE[0x20].unwrap();
/// assert_eq!(jsr.instruction, Instruction::Jsr);
/// assert_eq!(jsr.base_cycles, 6);
///
/// assert!(OPCODE_TABLE[0x00].is_none());
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the table entry for `opcode`.
pub fn lookup(opcode: u8) -> Option<OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize]
}
