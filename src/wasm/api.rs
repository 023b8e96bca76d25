//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and memory access.

use crate::{ExecutionError, FlatMemory, MemoryBus, CPU, MEMORY_SIZE};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
    opcode: Option<u8>,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
            opcode: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Offending opcode when execution stopped on an unknown instruction.
    #[wasm_bindgen(getter)]
    pub fn opcode(&self) -> Option<u8> {
        self.opcode
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        let opcode = match err {
            ExecutionError::UnknownOpcode { opcode, .. } => Some(opcode),
            ExecutionError::UnsupportedAddressingMode { opcode, .. } => Some(opcode),
        };
        JsError {
            message: err.to_string(),
            opcode,
        }
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: FlatMemory,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with zeroed memory and reset registers
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        cpu.reset(&mut memory);
        Emulator6502 { cpu, memory }
    }

    /// Reset registers and clear memory
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    /// Copy a program image into memory at `address`
    pub fn load_program(&mut self, address: u16, program: &[u8]) {
        self.memory.load(address, program);
    }

    /// Run with a cycle budget; returns the cycles actually used
    pub fn execute(&mut self, cycles: i32) -> Result<i32, JsError> {
        self.cpu
            .execute(cycles, &mut self.memory)
            .map_err(JsError::from)
    }

    /// Execute a single instruction; returns its cycle cost
    pub fn step(&mut self) -> Result<i32, JsError> {
        self.cpu.step(&mut self.memory).map_err(JsError::from)
    }

    // ========== Register Getters ==========

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp
    }

    /// Packed NV-BDIZC status byte
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    // ========== Memory Access ==========

    pub fn read_memory(&self, address: u16) -> u8 {
        self.memory.read(address)
    }

    pub fn write_memory(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
    }

    /// Copy of `len` bytes starting at `start`, clamped at the top of memory
    pub fn memory_view(&self, start: u16, len: usize) -> js_sys::Uint8Array {
        let begin = start as usize;
        let end = begin.saturating_add(len).min(MEMORY_SIZE);
        js_sys::Uint8Array::from(&self.memory.as_slice()[begin..end])
    }

    /// Hex grid text of `len` bytes starting at `start`
    pub fn dump(&self, start: u16, len: usize) -> String {
        self.memory.dump_range(start, len).to_string()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
