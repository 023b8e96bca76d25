//! # 6502 Instruction Implementations
//!
//! This module contains the instruction handlers, organized by category, and
//! the dispatcher that routes an opcode table entry to its handler.
//!
//! Every handler receives the remaining cycle budget with the opcode fetch
//! already charged, consumes its operands through the CPU's fetch/read
//! primitives, and returns the budget left after the instruction.
//!
//! ## Categories
//!
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **control**: Control flow instructions (JSR, RTS, NOP)

pub mod control;
pub mod load_store;

use crate::{ExecutionError, Instruction, MemoryBus, OpcodeMetadata, CPU};

/// Runs the handler for a decoded opcode and returns the remaining budget.
pub(crate) fn dispatch<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    metadata: OpcodeMetadata,
    cycles: i32,
    memory: &mut M,
) -> Result<i32, ExecutionError> {
    let mode = metadata.addressing_mode;

    match metadata.instruction {
        Instruction::Lda => load_store::execute_lda(cpu, opcode, mode, cycles, memory),
        Instruction::Ldx => load_store::execute_ldx(cpu, opcode, mode, cycles, memory),
        Instruction::Ldy => load_store::execute_ldy(cpu, opcode, mode, cycles, memory),
        Instruction::Sta => load_store::execute_sta(cpu, opcode, mode, cycles, memory),
        Instruction::Stx => load_store::execute_stx(cpu, opcode, mode, cycles, memory),
        Instruction::Sty => load_store::execute_sty(cpu, opcode, mode, cycles, memory),
        Instruction::Jsr => control::execute_jsr(cpu, opcode, mode, cycles, memory),
        Instruction::Rts => control::execute_rts(cpu, opcode, mode, cycles, memory),
        Instruction::Nop => control::execute_nop(cpu, opcode, mode, cycles),
    }
}
