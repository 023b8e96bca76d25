//! WebAssembly bindings for the cpu6502 core.
//!
//! This module provides JavaScript-callable interfaces to the execution
//! engine, enabling browser-based stepping through 6502 programs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
