//! # Addressing Modes
//!
//! This module defines the 6502 addressing modes used by the opcode table and
//! the resolution logic that turns operand bytes into an effective address.
//!
//! Resolution charges cycles exactly as the hardware model does:
//!
//! | Mode         | Charges                                                   |
//! |--------------|-----------------------------------------------------------|
//! | Immediate    | 1 (operand fetch)                                          |
//! | ZeroPage     | 1 (operand fetch)                                          |
//! | ZeroPageX/Y  | 1 (operand fetch) + 1 (index add)                          |
//! | Absolute     | 2 (operand fetch)                                          |
//! | AbsoluteX/Y  | 2 (operand fetch) + 1 on page cross (or always, for stores)|
//! | IndirectX    | 1 (operand fetch) + 1 (index add) + 2 (pointer read)       |
//! | IndirectY    | 1 (operand fetch) + 2 (pointer read) + 1 on page cross     |
//!
//! The final data read or write is charged by the instruction handler.

use crate::{ExecutionError, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: NOP, RTS
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: JSR $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }
}

/// When an indexed absolute or indirect-indexed access pays its extra cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexPenalty {
    /// Reads: only when the index addition crosses a page.
    OnPageCross,
    /// Writes: the extra cycle is always spent.
    Always,
}

/// Page-cross test used for the indexed cycle penalty.
///
/// This is the coarse test `(effective - base) >= 0xFF`, evaluated on the
/// unwrapped integer difference. It is not a high-byte comparison: an index
/// below 0xFF never counts as a crossing, and an address that wraps past
/// 0xFFFF never does either. Timing-sensitive code relies on these exact
/// results, so the test is kept as is.
///
/// # Examples
///
/// ```
/// use cpu6502::addressing::page_crossed;
///
/// assert!(page_crossed(0x4402, 0x4501));  // +0xFF
/// assert!(!page_crossed(0x4480, 0x4481)); // +0x01
/// assert!(!page_crossed(0x44F0, 0x4510)); // high byte changes, still +0x20
/// ```
pub fn page_crossed(base: u16, effective: u16) -> bool {
    i32::from(effective) - i32::from(base) >= 0xFF
}

impl CPU {
    /// Resolves the effective address for `mode`, consuming operand bytes.
    ///
    /// Returns the address and the remaining cycle budget. Immediate and
    /// Implicit have no effective address and are rejected.
    pub(crate) fn effective_address<M: MemoryBus>(
        &mut self,
        opcode: u8,
        mode: AddressingMode,
        penalty: IndexPenalty,
        cycles: i32,
        memory: &M,
    ) -> Result<(u16, i32), ExecutionError> {
        match mode {
            AddressingMode::ZeroPage => {
                let (zp, cycles) = self.fetch_byte(cycles, memory);
                Ok((u16::from(zp), cycles))
            }
            AddressingMode::ZeroPageX => Ok(self.zero_page_indexed(self.x, cycles, memory)),
            AddressingMode::ZeroPageY => Ok(self.zero_page_indexed(self.y, cycles, memory)),
            AddressingMode::Absolute => Ok(self.fetch_word(cycles, memory)),
            AddressingMode::AbsoluteX => {
                let (base, cycles) = self.fetch_word(cycles, memory);
                Ok(indexed(base, self.x, penalty, cycles))
            }
            AddressingMode::AbsoluteY => {
                let (base, cycles) = self.fetch_word(cycles, memory);
                Ok(indexed(base, self.y, penalty, cycles))
            }
            AddressingMode::IndirectX => {
                let (zp, cycles) = self.fetch_byte(cycles, memory);
                // Index add
                let pointer = zp.wrapping_add(self.x);
                let cycles = cycles - 1;
                Ok(read_zero_page_word(pointer, cycles, memory))
            }
            AddressingMode::IndirectY => {
                let (pointer, cycles) = self.fetch_byte(cycles, memory);
                let (base, cycles) = read_zero_page_word(pointer, cycles, memory);
                Ok(indexed(base, self.y, penalty, cycles))
            }
            AddressingMode::Implicit | AddressingMode::Immediate => {
                Err(ExecutionError::UnsupportedAddressingMode { opcode, mode })
            }
        }
    }

    /// Fetches the operand value for a read instruction.
    ///
    /// Immediate operands come straight from the instruction stream; every
    /// other mode resolves an address and charges one cycle for the read.
    pub(crate) fn read_operand<M: MemoryBus>(
        &mut self,
        opcode: u8,
        mode: AddressingMode,
        cycles: i32,
        memory: &M,
    ) -> Result<(u8, i32), ExecutionError> {
        if mode == AddressingMode::Immediate {
            return Ok(self.fetch_byte(cycles, memory));
        }

        let (addr, cycles) =
            self.effective_address(opcode, mode, IndexPenalty::OnPageCross, cycles, memory)?;
        Ok(CPU::read_byte(cycles, addr, memory))
    }

    fn zero_page_indexed<M: MemoryBus>(&mut self, index: u8, cycles: i32, memory: &M) -> (u16, i32) {
        let (zp, cycles) = self.fetch_byte(cycles, memory);
        // Index add, charged even when the sum wraps
        (u16::from(zp.wrapping_add(index)), cycles - 1)
    }
}

fn indexed(base: u16, index: u8, penalty: IndexPenalty, cycles: i32) -> (u16, i32) {
    let effective = base.wrapping_add(u16::from(index));
    let extra = match penalty {
        IndexPenalty::Always => true,
        IndexPenalty::OnPageCross => page_crossed(base, effective),
    };
    (effective, if extra { cycles - 1 } else { cycles })
}

/// Reads a little-endian pointer from the zero page.
///
/// The high byte of a pointer at 0xFF comes from 0x00, not 0x0100.
fn read_zero_page_word<M: MemoryBus>(pointer: u8, cycles: i32, memory: &M) -> (u16, i32) {
    let (lo, cycles) = CPU::read_byte(cycles, u16::from(pointer), memory);
    let (hi, cycles) = CPU::read_byte(cycles, u16::from(pointer.wrapping_add(1)), memory);
    (u16::from(lo) | (u16::from(hi) << 8), cycles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup() -> (CPU, FlatMemory) {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);
        (cpu, memory)
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::AbsoluteX.operand_bytes(), 2);
    }

    #[test]
    fn test_page_crossed_coarse_boundary() {
        assert!(page_crossed(0x4402, 0x4501));
        assert!(page_crossed(0x8002, 0x8101));
        assert!(!page_crossed(0x4480, 0x4481));
        // Crosses a real page but the difference is below 0xFF
        assert!(!page_crossed(0x44FF, 0x4500));
        // Wraps past the top of memory: negative difference
        assert!(!page_crossed(0xFF10, 0x000F));
    }

    #[test]
    fn test_zero_page_x_wraps_and_charges_index() {
        let (mut cpu, mut memory) = setup();
        cpu.x = 0x10;
        memory[0xFFFC] = 0xF8;

        let (addr, cycles) = cpu
            .effective_address(0xB5, AddressingMode::ZeroPageX, IndexPenalty::OnPageCross, 10, &memory)
            .unwrap();

        assert_eq!(addr, 0x0008);
        assert_eq!(cycles, 8);
        assert_eq!(cpu.pc, 0xFFFD);
    }

    #[test]
    fn test_absolute_x_store_penalty_is_unconditional() {
        let (mut cpu, mut memory) = setup();
        cpu.x = 0x01;
        memory.load(0xFFFC, &[0x80, 0x44]);

        let (addr, cycles) = cpu
            .effective_address(0x9D, AddressingMode::AbsoluteX, IndexPenalty::Always, 10, &memory)
            .unwrap();

        assert_eq!(addr, 0x4481);
        assert_eq!(cycles, 7);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let (mut cpu, mut memory) = setup();
        cpu.x = 0x01;
        memory[0xFFFC] = 0xFE;
        memory[0x00FF] = 0x34;
        memory[0x0000] = 0x12;
        memory[0x0100] = 0x99;

        let (addr, cycles) = cpu
            .effective_address(0xA1, AddressingMode::IndirectX, IndexPenalty::OnPageCross, 10, &memory)
            .unwrap();

        assert_eq!(addr, 0x1234);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn test_indirect_y_pointer_wraps_in_zero_page() {
        let (mut cpu, mut memory) = setup();
        cpu.y = 0x04;
        memory[0xFFFC] = 0xFF;
        memory[0x00FF] = 0x00;
        memory[0x0000] = 0x80;

        let (addr, cycles) = cpu
            .effective_address(0xB1, AddressingMode::IndirectY, IndexPenalty::OnPageCross, 10, &memory)
            .unwrap();

        assert_eq!(addr, 0x8004);
        assert_eq!(cycles, 7);
    }

    #[test]
    fn test_immediate_has_no_effective_address() {
        let (mut cpu, memory) = setup();

        let result = cpu.effective_address(
            0x85,
            AddressingMode::Immediate,
            IndexPenalty::Always,
            10,
            &memory,
        );

        assert_eq!(
            result,
            Err(ExecutionError::UnsupportedAddressingMode {
                opcode: 0x85,
                mode: AddressingMode::Immediate
            })
        );
    }
}
