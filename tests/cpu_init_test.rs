//! CPU reset tests
//!
//! Verifies that `reset` establishes the power-on state and clears memory.

use cpu6502::{FlatMemory, MemoryBus, CPU, RESET_VECTOR, STACK_POINTER_RESET};

#[test]
fn test_cpu_reset_values() {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);

    assert_eq!(cpu.pc, 0xFFFC, "PC should be the reset location");
    assert_eq!(cpu.sp, 0xFF, "Stack pointer should be 0xFF");
    assert_eq!(cpu.a, 0x00, "Accumulator should be 0x00");
    assert_eq!(cpu.x, 0x00, "X register should be 0x00");
    assert_eq!(cpu.y, 0x00, "Y register should be 0x00");

    assert!(!cpu.flag_c, "Carry flag should be clear");
    assert!(!cpu.flag_z, "Zero flag should be clear");
    assert!(!cpu.flag_i, "Interrupt disable flag should be clear");
    assert!(!cpu.flag_d, "Decimal flag should be clear");
    assert!(!cpu.flag_b, "Break flag should be clear");
    assert!(!cpu.flag_v, "Overflow flag should be clear");
    assert!(!cpu.flag_n, "Negative flag should be clear");
}

#[test]
fn test_reset_constants() {
    assert_eq!(RESET_VECTOR, 0xFFFC);
    assert_eq!(STACK_POINTER_RESET, 0xFF);
    assert_eq!(CPU::new().pc, RESET_VECTOR);
    assert_eq!(CPU::default(), CPU::new());
}

#[test]
fn test_reset_clears_memory() {
    let mut memory = FlatMemory::new();
    memory.write(0x0000, 0x01);
    memory.write(0x4480, 0x37);
    memory.write(0xFFFF, 0xFF);

    let mut cpu = CPU::new();
    cpu.reset(&mut memory);

    assert!(memory.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_reset_from_dirty_state() {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.pc = 0x1234;
    cpu.sp = 0x10;
    cpu.a = 0xAA;
    cpu.x = 0xBB;
    cpu.y = 0xCC;
    cpu.set_status(0xFF);

    cpu.reset(&mut memory);

    assert_eq!(cpu, CPU::new());
}

#[test]
fn test_reset_is_idempotent() {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.a = 0x42;
    cpu.flag_v = true;
    memory.write(0x2000, 0x99);

    cpu.reset(&mut memory);
    let first_cpu = cpu;
    let first_memory = memory.clone();

    cpu.reset(&mut memory);

    assert_eq!(cpu, first_cpu);
    assert!(memory == first_memory);
}

#[test]
fn test_status_register_format() {
    let cpu = CPU::new();
    let status = cpu.status();

    assert_eq!(status & 0b0010_0000, 0b0010_0000, "Bit 5 should always be 1");
    assert_eq!(status & !0b0010_0000, 0, "All flags should be clear");
}
