//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads pay the indexed extra cycle only on a page cross. Stores always pay
//! it, and charge one cycle for the write itself.

use crate::addressing::IndexPenalty;
use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &M,
) -> Result<i32, ExecutionError> {
    let (value, cycles) = cpu.read_operand(opcode, mode, cycles, memory)?;
    cpu.a = value;
    cpu.set_zn(value);
    Ok(cycles)
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA, applied to X.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &M,
) -> Result<i32, ExecutionError> {
    let (value, cycles) = cpu.read_operand(opcode, mode, cycles, memory)?;
    cpu.x = value;
    cpu.set_zn(value);
    Ok(cycles)
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA, applied to Y.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &M,
) -> Result<i32, ExecutionError> {
    let (value, cycles) = cpu.read_operand(opcode, mode, cycles, memory)?;
    cpu.y = value;
    cpu.set_zn(value);
    Ok(cycles)
}

/// Executes the STA (Store Accumulator) instruction. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &mut M,
) -> Result<i32, ExecutionError> {
    let value = cpu.a;
    store(cpu, opcode, mode, value, cycles, memory)
}

/// Executes the STX (Store X Register) instruction. No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &mut M,
) -> Result<i32, ExecutionError> {
    let value = cpu.x;
    store(cpu, opcode, mode, value, cycles, memory)
}

/// Executes the STY (Store Y Register) instruction. No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &mut M,
) -> Result<i32, ExecutionError> {
    let value = cpu.y;
    store(cpu, opcode, mode, value, cycles, memory)
}

fn store<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    value: u8,
    cycles: i32,
    memory: &mut M,
) -> Result<i32, ExecutionError> {
    let (addr, cycles) = cpu.effective_address(opcode, mode, IndexPenalty::Always, cycles, memory)?;
    Ok(CPU::write_byte(cycles, addr, value, memory))
}
