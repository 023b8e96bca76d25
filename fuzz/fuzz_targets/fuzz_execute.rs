//! Fuzz target for budgeted execution.
//!
//! Builds an arbitrary CPU state and memory window, runs `execute` with an
//! arbitrary budget, and checks the cycle accounting invariants.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{ExecutionError, FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the reset location (instructions + operands)
    program: [u8; 16],
    /// Zero page contents (pointers for the indirect modes)
    zero_page: [u8; 256],
    /// Region reached by absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);

    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x4400, &input.memory.main_memory);
    memory.load(0x0200, &input.memory.program);

    cpu.pc = 0x0200;
    cpu.a = input.cpu_state.a;
    cpu.x = input.cpu_state.x;
    cpu.y = input.cpu_state.y;
    cpu.sp = input.cpu_state.sp;
    cpu.set_status(input.cpu_state.status);

    let budget = i32::from(input.budget);
    let before = cpu;

    match cpu.execute(budget, &mut memory) {
        Ok(used) => {
            // Never less than requested, and at most one instruction over
            assert!(used >= budget);
            assert!(used < budget + 7);
            if budget == 0 {
                assert_eq!(cpu, before);
            }
        }
        Err(ExecutionError::UnknownOpcode { opcode, address }) => {
            assert_eq!(cpu.pc, address);
            assert_eq!(memory[address], opcode);
        }
        Err(e) => panic!("unexpected error: {}", e),
    }
});
