//! Run program example
//!
//! Demonstrates the budgeted execution loop against a FlatMemory image.
//!
//! This example shows:
//! - Resetting the CPU and memory
//! - Loading a subroutine call at the reset location
//! - Running with an exact cycle budget
//! - Overrunning a too-small budget
//! - Handling an unknown opcode
//! - Dumping a memory window

use cpu6502::{ExecutionError, FlatMemory, CPU};

fn print_registers(cpu: &CPU) {
    println!("  PC: 0x{:04X}", cpu.pc);
    println!("  SP: 0x{:02X}", cpu.sp);
    println!("  A:  0x{:02X}", cpu.a);
    println!("  X:  0x{:02X}", cpu.x);
    println!("  Y:  0x{:02X}", cpu.y);
    println!(
        "  Status: 0x{:02X} (NV-BDIZC: {:08b})",
        cpu.status(),
        cpu.status()
    );
}

fn main() {
    println!("6502 Execution Core - Run Program Example");
    println!("=========================================\n");

    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);

    // Reset location: JSR $0200, then NOP after the return
    memory.load(0xFFFC, &[0x20, 0x00, 0x02, 0xEA]);

    // Subroutine at $0200
    memory.load(
        0x0200,
        &[
            0xA2, 0x04, // LDX #$04
            0xA1, 0x02, // LDA ($02,X)   -> pointer at $06
            0x8D, 0x00, 0x03, // STA $0300
            0xA0, 0xFF, // LDY #$FF
            0xB1, 0x10, // LDA ($10),Y   -> $8002 + $FF, page cross
            0x8D, 0x01, 0x03, // STA $0301
            0x60, // RTS
        ],
    );

    // Pointers and data
    memory.load(0x0006, &[0x00, 0x80]);
    memory.load(0x0010, &[0x02, 0x80]);
    memory[0x8000] = 0x37;
    memory[0x8101] = 0x84;

    println!("Initial state:");
    print_registers(&cpu);

    // JSR 6 + LDX 2 + LDA 6 + STA 4 + LDY 2 + LDA 6 + STA 4 + RTS 6 + NOP 2
    let budget = 38;
    match cpu.execute(budget, &mut memory) {
        Ok(used) => println!("\nRequested {} cycles, used {}", budget, used),
        Err(e) => println!("\nExecution stopped: {}", e),
    }

    println!("\nAfter subroutine:");
    print_registers(&cpu);

    println!("\nResults at $0300:");
    print!("{}", memory.dump_range(0x0300, 2));

    println!("\nReturn address written by JSR at $00FF:");
    print!("{}", memory.dump_range(0x00FF, 2));

    // A 1-cycle budget still completes a whole instruction
    cpu.reset(&mut memory);
    memory.load(0xFFFC, &[0xA9, 0x84]);
    match cpu.execute(1, &mut memory) {
        Ok(used) => println!("\nBudget 1 ran LDA #$84 in {} cycles, A = 0x{:02X}", used, cpu.a),
        Err(e) => println!("\nExecution stopped: {}", e),
    }

    // Unknown opcodes stop execution and leave PC on the offending byte
    cpu.reset(&mut memory);
    memory[0xFFFC] = 0x02;
    match cpu.execute(2, &mut memory) {
        Ok(used) => println!("\nUnexpectedly ran {} cycles", used),
        Err(ExecutionError::UnknownOpcode { opcode, address }) => {
            println!(
                "\nUnknown opcode 0x{:02X} at 0x{:04X} (PC = 0x{:04X})",
                opcode, address, cpu.pc
            );
        }
        Err(e) => println!("\nExecution stopped: {}", e),
    }
}
