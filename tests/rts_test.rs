//! Tests for the RTS (Return from Subroutine) instruction.
//!
//! RTS reads back the word JSR stored at the raw SP address, so the pair
//! round-trips without touching page 1 mapping.

use cpu6502::{FlatMemory, CPU};

fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_rts_basic() {
    let (mut cpu, mut memory) = setup();
    cpu.pc = 0x0300;
    cpu.sp = 0x7E;

    // Return address $0202 stored at $80/$81
    memory.load(0x0080, &[0x02, 0x02]);
    memory[0x0300] = 0x60;

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.pc, 0x0203);
    assert_eq!(cpu.sp, 0x80);
}

#[test]
fn test_jsr_rts_round_trip() {
    let (mut cpu, mut memory) = setup();
    cpu.pc = 0x0200;

    // $0200: JSR $0300 ; LDA #$37
    // $0300: RTS
    memory.load(0x0200, &[0x20, 0x00, 0x03, 0xA9, 0x37]);
    memory[0x0300] = 0x60;

    assert_eq!(cpu.execute(14, &mut memory), Ok(14));

    assert_eq!(cpu.a, 0x37);
    assert_eq!(cpu.pc, 0x0205);
    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_jsr_rts_round_trip_from_reset_location() {
    let (mut cpu, mut memory) = setup();

    // $FFFC: JSR $0300 ; NOP
    memory.load(0xFFFC, &[0x20, 0x00, 0x03, 0xEA]);
    memory[0x0300] = 0x60;

    assert_eq!(cpu.execute(14, &mut memory), Ok(14));

    // NOP at $FFFF ran and PC wrapped
    assert_eq!(cpu.pc, 0x0000);
    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_rts_affects_no_flags() {
    let (mut cpu, mut memory) = setup();
    cpu.pc = 0x0300;
    cpu.set_status(0b1100_0011);
    let status = cpu.status();

    memory[0x0300] = 0x60;
    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.status(), status);
}
