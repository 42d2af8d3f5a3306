//! # SRAM Corruption Model
//!
//! Core types for simulating the corruption routine of a battery-backed
//! cartridge SRAM.
//!
//! ## Key Features
//! - 8 KiB SRAM mapped at external address `$A000`
//! - Nine corruption operations (identifiers 0-8)
//! - Behavior programs stored as raw `(operation, param, param)` triples
//! - A single carried nibble ("last result") threaded through diff-encoding
//! - A 16-byte signature window at internal offset `$07D0`

pub mod error;
pub mod opcode;
pub mod instruction;
pub mod program;

pub use error::SpecError;
pub use opcode::Opcode;
pub use instruction::{Instruction, RawInstruction};
pub use program::Program;

/// SRAM size in bytes
pub const SRAM_SIZE: usize = 0x2000;

/// External address of internal index 0
pub const SRAM_OFFSET: u16 = 0xA000;

/// Internal index of the signature window
pub const WINDOW_OFFSET: usize = 0x7D0;

/// Bytes captured with every match
pub const WINDOW_LEN: usize = 16;

/// Bytes covered by the cycle digest
pub const DIGEST_LEN: usize = 10;

/// Bytes of the window scanned for a jump opcode
pub const SCAN_LEN: usize = 14;

/// Byte values encoding an unconditional jump (`JP NC,nn` / `JP nn`)
pub const JUMP_OPCODES: [u8; 2] = [0xD2, 0xC3];

/// Seed of the djb2 window digest
pub const DIGEST_SEED: u32 = 5381;

/// Default outer (seed) iteration count
pub const DEFAULT_OUTER_ITERATIONS: u32 = 10_000;

/// Default inner (probe) iteration count
pub const DEFAULT_INNER_ITERATIONS: u32 = 400;

/// Default number of passes recorded by dump mode
pub const DEFAULT_DUMP_ITERATIONS: usize = 63;

/// Translate an external SRAM address to an internal index
///
/// Returns `None` when the address falls outside the mapped region.
#[inline]
pub fn sram_index(address: u16) -> Option<usize> {
    let index = address.checked_sub(SRAM_OFFSET)? as usize;
    (index < SRAM_SIZE).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sram_index_bounds() {
        assert_eq!(sram_index(0xA000), Some(0));
        assert_eq!(sram_index(0xA7D0), Some(WINDOW_OFFSET));
        assert_eq!(sram_index(0xBFFF), Some(SRAM_SIZE - 1));
        assert_eq!(sram_index(0xC000), None);
        assert_eq!(sram_index(0x9FFF), None);
        assert_eq!(sram_index(0x0000), None);
    }

    #[test]
    fn test_window_fits() {
        assert!(WINDOW_OFFSET + WINDOW_LEN <= SRAM_SIZE);
        assert!(DIGEST_LEN <= WINDOW_LEN);
        // a hit at the last scanned byte still has both address bytes in the window
        assert!(SCAN_LEN + 2 <= WINDOW_LEN);
    }
}
