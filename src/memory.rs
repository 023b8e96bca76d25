//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory image it runs against, and `FlatMemory`, a plain 64KB implementation.
//!
//! ## Cycle Accounting
//!
//! Byte reads and writes on the bus are raw: they never charge cycles. The CPU
//! wraps them in its own cycle-charging primitives. The single exception is
//! `write_word`, which deducts its 2 cycles from the budget it is handed and
//! returns the updated budget.
//!
//! ## Address Range
//!
//! Addresses are `u16` and `FlatMemory` holds exactly 65536 cells, so an
//! out-of-range access cannot be expressed. The high byte of a word written at
//! 0xFFFF wraps to 0x0000.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of addressable cells (64KB).
pub const MEMORY_SIZE: usize = 1024 * 64;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.init();
/// assert_eq!(mem.read(0x1234), 0x00);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn init(&mut self) {
///         // ROM contents survive a reset
///         self.ram = [0; 0x8000];
///     }
///
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Clears the memory image. Called by `CPU::reset`.
    fn init(&mut self);

    /// Reads a byte from the specified 16-bit address. Charges no cycles.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address. Charges no cycles.
    fn write(&mut self, addr: u16, value: u8);

    /// Writes a little-endian word and deducts 2 cycles from `cycles`.
    ///
    /// The low byte lands at `addr` and the high byte at `addr + 1`
    /// (wrapping at 0xFFFF). Returns the remaining cycle budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// let remaining = mem.write_word(0xBEEF, 0x0200, 10);
    ///
    /// assert_eq!(remaining, 8);
    /// assert_eq!(mem.read(0x0200), 0xEF);
    /// assert_eq!(mem.read(0x0201), 0xBE);
    /// ```
    fn write_word(&mut self, value: u16, addr: u16, cycles: i32) -> i32 {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
        cycles - 2
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) map to one contiguous RAM array initialized
/// to 0x00. Cells can be reached through the `MemoryBus` methods or by
/// indexing with a `u16` address.
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
/// // Load LDA #$42 at the reset location
/// memory.load(0xFFFC, &[0xA9, 0x42]);
///
/// assert_eq!(cpu.execute(2, &mut memory), Ok(2));
/// assert_eq!(cpu.a, 0x42);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Writes past 0xFFFF wrap around to 0x0000.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::FlatMemory;
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFE, &[0x01, 0x02, 0x03]);
    ///
    /// assert_eq!(mem[0xFFFE], 0x01);
    /// assert_eq!(mem[0xFFFF], 0x02);
    /// assert_eq!(mem[0x0000], 0x03);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Returns the whole memory image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Returns a hex dump of the entire memory image.
    pub fn dump(&self) -> HexDump<'_> {
        HexDump {
            bytes: self.as_slice(),
            start: 0,
        }
    }

    /// Returns a hex dump of `len` cells starting at `start`.
    ///
    /// The window is clamped at the top of memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::FlatMemory;
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0200, &[0xA9, 0x84]);
    ///
    /// let text = mem.dump_range(0x0200, 4).to_string();
    /// assert_eq!(text, "0200: a9 84 00 00\n");
    /// ```
    pub fn dump_range(&self, start: u16, len: usize) -> HexDump<'_> {
        let begin = start as usize;
        let end = begin.saturating_add(len).min(MEMORY_SIZE);
        HexDump {
            bytes: &self.data[begin..end],
            start,
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_cells", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn init(&mut self) {
        self.data.fill(0);
    }

    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl Index<u16> for FlatMemory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for FlatMemory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}

/// Number of cells printed per dump row.
const DUMP_COLUMNS: usize = 32;

/// Hex grid view of a memory window, produced by `FlatMemory::dump`.
///
/// Each row holds up to 32 cells as two-digit lowercase hex, prefixed with the
/// row's starting address.
pub struct HexDump<'a> {
    bytes: &'a [u8],
    start: u16,
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.bytes.chunks(DUMP_COLUMNS).enumerate() {
            let addr = self.start as usize + row * DUMP_COLUMNS;
            write!(f, "{:04X}:", addr)?;
            for byte in chunk {
                write!(f, " {:02x}", byte)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
