//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - NOP: No Operation
//!
//! JSR and RTS use the stack pointer as a raw address: the return address is
//! stored as a word at `SP`, not mapped onto page 1, and SP moves by 2.

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// 1. Fetch the 16-bit target address (2 cycles)
/// 2. Write PC - 1, the address of the last JSR byte, as a word at SP (2 cycles)
/// 3. Decrement SP by 2
/// 4. Jump to the target (1 internal cycle)
///
/// Cycle timing: 6 cycles including the opcode fetch.
///
/// Flags affected: None
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &mut M,
) -> Result<i32, ExecutionError> {
    if mode != AddressingMode::Absolute {
        return Err(ExecutionError::UnsupportedAddressingMode { opcode, mode });
    }

    let (target, cycles) = cpu.fetch_word(cycles, memory);
    let return_address = cpu.pc.wrapping_sub(1);
    let cycles = memory.write_word(return_address, u16::from(cpu.sp), cycles);
    cpu.sp = cpu.sp.wrapping_sub(2);
    cpu.pc = target;

    Ok(cycles - 1)
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Undoes JSR: SP moves back up by 2 (1 cycle), the return address is read
/// from SP (2 cycles), and PC is set one past it so execution resumes after
/// the JSR operand (2 cycles).
///
/// Cycle timing: 6 cycles including the opcode fetch.
///
/// Flags affected: None
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
    memory: &M,
) -> Result<i32, ExecutionError> {
    if mode != AddressingMode::Implicit {
        return Err(ExecutionError::UnsupportedAddressingMode { opcode, mode });
    }

    cpu.sp = cpu.sp.wrapping_add(2);
    let cycles = cycles - 1;

    let (return_address, cycles) = CPU::read_word(cycles, u16::from(cpu.sp), memory);
    cpu.pc = return_address.wrapping_add(1);

    Ok(cycles - 2)
}

/// Executes the NOP (No Operation) instruction.
///
/// Cycle timing: 2 cycles including the opcode fetch.
pub(crate) fn execute_nop(
    _cpu: &mut CPU,
    opcode: u8,
    mode: AddressingMode,
    cycles: i32,
) -> Result<i32, ExecutionError> {
    if mode != AddressingMode::Implicit {
        return Err(ExecutionError::UnsupportedAddressingMode { opcode, mode });
    }

    Ok(cycles - 1)
}
