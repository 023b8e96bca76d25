//! Kani formal verification proofs for the execution core.
//!
//! These proofs use bounded model checking to verify addressing and cycle
//! invariants for ALL possible inputs.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use cpu6502::addressing::page_crossed;
    use cpu6502::{FlatMemory, MemoryBus, CPU};

    // ========== Page Crossing Proofs ==========

    /// Proof: a crossing is reported exactly for a forward distance of 0xFF or more
    #[kani::proof]
    fn proof_page_crossed_matches_distance() {
        let base: u16 = kani::any();
        let effective: u16 = kani::any();

        let distance = effective as i32 - base as i32;

        kani::assert(
            page_crossed(base, effective) == (distance >= 0xFF),
            "page_crossed must be the coarse distance test"
        );
    }

    /// Proof: an index below 0xFF never costs the extra cycle
    #[kani::proof]
    fn proof_small_index_never_crosses() {
        let base: u16 = kani::any();
        let index: u8 = kani::any();
        kani::assume(index < 0xFF);

        let effective = base.wrapping_add(index as u16);

        kani::assert(
            !page_crossed(base, effective),
            "Index below 0xFF must not cross"
        );
    }

    // ========== Zero Page Wrap Proofs ==========

    /// Proof: Zero page + index stays in zero page
    #[kani::proof]
    fn proof_zero_page_indexed_wrap() {
        let base: u8 = kani::any();
        let index: u8 = kani::any();

        let effective_addr: u16 = base.wrapping_add(index) as u16;

        kani::assert(
            effective_addr <= 0x00FF,
            "Zero page + index must stay in zero page"
        );
    }

    /// Proof: the high pointer byte of a zero page pointer stays in zero page
    #[kani::proof]
    fn proof_zero_page_pointer_high_byte_wraps() {
        let pointer: u8 = kani::any();
        let high_addr: u16 = pointer.wrapping_add(1) as u16;

        kani::assert(high_addr <= 0x00FF, "Pointer high byte must come from zero page");
        if pointer == 0xFF {
            kani::assert(high_addr == 0x0000, "Pointer at 0xFF must wrap to 0x00");
        }
    }

    // ========== Status Register Proofs ==========

    /// Proof: status round-trips through set_status with bit 5 forced on
    #[kani::proof]
    fn proof_status_round_trip() {
        let status: u8 = kani::any();
        let mut cpu = CPU::new();
        cpu.set_status(status);

        kani::assert(
            cpu.status() == status | 0b0010_0000,
            "status() must restore every flag bit"
        );
    }

    // ========== Execution Proofs ==========

    /// Proof: LDA immediate sets Z and N from any value
    #[kani::proof]
    #[kani::unwind(3)]
    fn proof_lda_immediate_flags() {
        let value: u8 = kani::any();
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0xA9);
        memory.write(0xFFFD, value);
        let mut cpu = CPU::new();

        let used = cpu.execute(2, &mut memory);

        kani::assert(used == Ok(2), "LDA immediate costs 2 cycles");
        kani::assert(cpu.a == value, "A must hold the operand");
        kani::assert(cpu.flag_z == (value == 0), "Z must reflect zero");
        kani::assert(cpu.flag_n == (value >= 0x80), "N must reflect bit 7");
    }
}
