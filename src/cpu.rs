//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 register file and
//! the budgeted fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU is plain data:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next byte to fetch
//! - **Stack pointer** (SP): raw 8-bit address used by JSR/RTS
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//!
//! It does not own memory; every operation that touches memory borrows a
//! `MemoryBus` for the duration of the call.
//!
//! ## Cycle Budget
//!
//! The remaining cycle budget is threaded by value through every primitive:
//! each one takes the budget and returns it, decremented, alongside its
//! result. `execute` checks the budget only before starting an instruction,
//! so the last instruction may drive it below zero.

use crate::opcodes::lookup;
use crate::{instructions, ExecutionError, MemoryBus};

/// Address the program counter holds after reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Stack pointer value after reset.
pub const STACK_POINTER_RESET: u8 = 0xFF;

/// 6502 register and flag state.
///
/// Fields are public so callers can set up scenarios and assert on results
/// directly.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// assert_eq!(cpu.pc, 0xFFFC);
/// assert_eq!(cpu.sp, 0xFF);
/// assert_eq!(cpu.a, 0x00);
/// assert!(!cpu.flag_i);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CPU {
    /// Program counter (address of next byte to fetch)
    pub pc: u16,

    /// Stack pointer, used as a raw address by JSR and RTS
    pub sp: u8,

    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Carry flag
    pub flag_c: bool,

    /// Zero flag (set if result is zero)
    pub flag_z: bool,

    /// Interrupt disable flag
    pub flag_i: bool,

    /// Decimal mode flag
    pub flag_d: bool,

    /// Break flag
    pub flag_b: bool,

    /// Overflow flag
    pub flag_v: bool,

    /// Negative flag (set if bit 7 of result is 1)
    pub flag_n: bool,
}

impl CPU {
    /// Creates a CPU in the power-on register state.
    ///
    /// Memory is untouched; call `reset` to also clear a memory image.
    pub const fn new() -> Self {
        Self {
            pc: RESET_VECTOR,
            sp: STACK_POINTER_RESET,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
        }
    }

    /// Resets the registers and clears `memory`.
    ///
    /// - PC = 0xFFFC, SP = 0xFF
    /// - A, X, Y = 0
    /// - All flags cleared
    /// - Every memory cell set to 0
    ///
    /// Calling it twice in a row leaves the same state as calling it once.
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        *self = Self::new();
        memory.init();
    }

    /// Fetches the byte at PC and advances PC. Costs 1 cycle.
    ///
    /// This is the only way the instruction stream is consumed.
    pub fn fetch_byte<M: MemoryBus>(&mut self, cycles: i32, memory: &M) -> (u8, i32) {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        (data, cycles - 1)
    }

    /// Fetches a little-endian word at PC and advances PC by 2. Costs 2 cycles.
    pub fn fetch_word<M: MemoryBus>(&mut self, cycles: i32, memory: &M) -> (u16, i32) {
        let (lo, cycles) = self.fetch_byte(cycles, memory);
        let (hi, cycles) = self.fetch_byte(cycles, memory);
        (u16::from(lo) | (u16::from(hi) << 8), cycles)
    }

    /// Reads a byte from `address`. Costs 1 cycle.
    pub fn read_byte<M: MemoryBus>(cycles: i32, address: u16, memory: &M) -> (u8, i32) {
        (memory.read(address), cycles - 1)
    }

    /// Reads a little-endian word at `address`, `address + 1`. Costs 2 cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0006, &[0x00, 0x80]);
    ///
    /// assert_eq!(CPU::read_word(6, 0x0006, &memory), (0x8000, 4));
    /// ```
    pub fn read_word<M: MemoryBus>(cycles: i32, address: u16, memory: &M) -> (u16, i32) {
        let (lo, cycles) = Self::read_byte(cycles, address, memory);
        let (hi, cycles) = Self::read_byte(cycles, address.wrapping_add(1), memory);
        (u16::from(lo) | (u16::from(hi) << 8), cycles)
    }

    /// Writes a byte to `address`. Costs 1 cycle.
    pub fn write_byte<M: MemoryBus>(cycles: i32, address: u16, value: u8, memory: &mut M) -> i32 {
        memory.write(address, value);
        cycles - 1
    }

    /// Runs instructions until the cycle budget is spent.
    ///
    /// The budget is checked before each instruction, never in the middle of
    /// one, so the returned count can exceed `cycles` when the last
    /// instruction needs more than what was left. A budget of zero (or less)
    /// runs nothing and returns 0. The returned count saturates at
    /// `i32::MAX`, so a budget near the top of the range reports `i32::MAX`
    /// instead of the few cycles of overshoot past it.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::UnknownOpcode` when the fetched byte has no
    /// handler. PC is left on the offending byte and no cycle count is
    /// reported for the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, ExecutionError, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// // 0x02 has no handler
    /// memory[0xFFFC] = 0x02;
    ///
    /// assert_eq!(
    ///     cpu.execute(2, &mut memory),
    ///     Err(ExecutionError::UnknownOpcode { opcode: 0x02, address: 0xFFFC })
    /// );
    /// assert_eq!(cpu.pc, 0xFFFC);
    /// ```
    pub fn execute<M: MemoryBus>(&mut self, cycles: i32, memory: &mut M) -> Result<i32, ExecutionError> {
        let cycles_requested = cycles;
        let mut remaining = cycles;

        while remaining > 0 {
            remaining = self.execute_instruction(remaining, memory)?;
        }

        Ok(cycles_requested.saturating_sub(remaining))
    }

    /// Executes exactly one instruction and returns the cycles it used.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// // JSR $1234
    /// memory.load(0xFFFC, &[0x20, 0x34, 0x12]);
    ///
    /// assert_eq!(cpu.step(&mut memory), Ok(6));
    /// assert_eq!(cpu.pc, 0x1234);
    /// ```
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<i32, ExecutionError> {
        let remaining = self.execute_instruction(0, memory)?;
        Ok(-remaining)
    }

    /// Fetches one opcode, dispatches it, and returns the remaining budget.
    fn execute_instruction<M: MemoryBus>(&mut self, cycles: i32, memory: &mut M) -> Result<i32, ExecutionError> {
        let address = self.pc;
        let (opcode, cycles) = self.fetch_byte(cycles, memory);

        let Some(metadata) = lookup(opcode) else {
            self.pc = address;
            return Err(ExecutionError::UnknownOpcode { opcode, address });
        };

        instructions::dispatch(self, opcode, metadata, cycles, memory)
    }

    /// Sets Z and N from a value just loaded into a register.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0b1000_0000) != 0;
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// assert_eq!(cpu.status(), 0b0010_0000);
    ///
    /// cpu.flag_n = true;
    /// cpu.flag_c = true;
    /// assert_eq!(cpu.status(), 0b1010_0001);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Unpacks a status byte into the seven flags. Bit 5 is ignored.
    pub fn set_status(&mut self, status: u8) {
        self.flag_n = status & 0b1000_0000 != 0;
        self.flag_v = status & 0b0100_0000 != 0;
        self.flag_b = status & 0b0001_0000 != 0;
        self.flag_d = status & 0b0000_1000 != 0;
        self.flag_i = status & 0b0000_0100 != 0;
        self.flag_z = status & 0b0000_0010 != 0;
        self.flag_c = status & 0b0000_0001 != 0;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
