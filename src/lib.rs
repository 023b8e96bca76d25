//! # 6502 Instruction-Execution Core
//!
//! A cycle-counting fetch-decode-execute engine for the MOS Technology 6502.
//!
//! The crate is split into two components:
//!
//! - **Memory**: a 64KB byte-addressable image behind the `MemoryBus` trait
//!   (`FlatMemory` is the provided implementation)
//! - **CPU core**: the register/flag record plus the budgeted execution loop
//!
//! The CPU does not own its memory. A caller resets the CPU against a memory
//! image, loads a program, then calls `execute` with a cycle budget. Every
//! memory access charges the budget, and the loop only checks the budget
//! between instructions, so an instruction that starts always finishes.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! let mut cpu = CPU::new();
//! cpu.reset(&mut memory);
//!
//! // LDA #$84 at the reset location
//! memory[0xFFFC] = 0xA9;
//! memory[0xFFFD] = 0x84;
//!
//! // A 1-cycle budget still runs the whole 2-cycle instruction
//! let used = cpu.execute(1, &mut memory).unwrap();
//! assert_eq!(used, 2);
//! assert_eq!(cpu.a, 0x84);
//! assert!(cpu.flag_n);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, fetch/read primitives and the execution loop
//! - `memory` - MemoryBus trait, FlatMemory and the hex dump helper
//! - `opcodes` - Opcode table mapping opcode bytes to handlers
//! - `addressing` - Addressing mode enumeration and operand resolution

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, RESET_VECTOR, STACK_POINTER_RESET};
pub use memory::{FlatMemory, HexDump, MemoryBus, MEMORY_SIZE};
pub use opcodes::{lookup, Instruction, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// No handler is registered for the fetched opcode.
    ///
    /// `address` is where the opcode was fetched from. The CPU leaves its
    /// program counter pointing there.
    UnknownOpcode { opcode: u8, address: u16 },

    /// The opcode table pairs an instruction with an addressing mode its
    /// handler cannot resolve.
    UnsupportedAddressingMode { opcode: u8, mode: AddressingMode },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => {
                write!(
                    f,
                    "Instruction 0x{:02X} at 0x{:04X} is not handled",
                    opcode, address
                )
            }
            ExecutionError::UnsupportedAddressingMode { opcode, mode } => {
                write!(
                    f,
                    "Opcode 0x{:02X} does not support addressing mode {:?}",
                    opcode, mode
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
