//! Tests for the JSR (Jump to Subroutine) instruction.
//!
//! Tests cover:
//! - Target address and 6-cycle cost
//! - Return address (PC - 1) written as a word at the raw SP address
//! - Stack pointer decremented by 2
//! - No flags or data registers affected

use cpu6502::{FlatMemory, CPU};

fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_jsr_from_reset_location() {
    let (mut cpu, mut memory) = setup();

    // JSR $1234
    memory.load(0xFFFC, &[0x20, 0x34, 0x12]);

    let used = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(used, 6);
    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cpu.sp, 0xFD);

    // Return address 0xFFFE stored little-endian at 0x00FF/0x0100
    assert_eq!(memory[0x00FF], 0xFE);
    assert_eq!(memory[0x0100], 0xFF);
}

#[test]
fn test_jsr_return_address_points_at_last_operand_byte() {
    let (mut cpu, mut memory) = setup();
    cpu.pc = 0x0200;
    cpu.sp = 0x80;

    // JSR $0300
    memory.load(0x0200, &[0x20, 0x00, 0x03]);

    assert_eq!(cpu.step(&mut memory), Ok(6));

    assert_eq!(cpu.pc, 0x0300);
    assert_eq!(cpu.sp, 0x7E);
    assert_eq!(memory[0x0080], 0x02);
    assert_eq!(memory[0x0081], 0x02);
}

#[test]
fn test_jsr_stack_pointer_wraps() {
    let (mut cpu, mut memory) = setup();
    cpu.sp = 0x01;

    memory.load(0xFFFC, &[0x20, 0x00, 0x03]);
    cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_jsr_overruns_small_budget() {
    let (mut cpu, mut memory) = setup();

    memory.load(0xFFFC, &[0x20, 0x34, 0x12]);

    assert_eq!(cpu.execute(1, &mut memory), Ok(6));
    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn test_jsr_affects_no_flags_or_registers() {
    let (mut cpu, mut memory) = setup();
    cpu.a = 0x11;
    cpu.x = 0x22;
    cpu.y = 0x33;
    cpu.set_status(0xFF);
    let before = cpu;

    memory.load(0xFFFC, &[0x20, 0x34, 0x12]);
    cpu.execute(6, &mut memory).unwrap();

    assert_eq!(cpu.a, before.a);
    assert_eq!(cpu.x, before.x);
    assert_eq!(cpu.y, before.y);
    assert_eq!(cpu.status(), before.status());
}

#[test]
fn test_jsr_then_load_in_subroutine() {
    let (mut cpu, mut memory) = setup();

    // JSR $4000 ; at $4000: LDA #$37
    memory.load(0xFFFC, &[0x20, 0x00, 0x40]);
    memory.load(0x4000, &[0xA9, 0x37]);

    assert_eq!(cpu.execute(8, &mut memory), Ok(8));
    assert_eq!(cpu.a, 0x37);
    assert_eq!(cpu.pc, 0x4002);
}
