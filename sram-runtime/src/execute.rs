//! Instruction execution for the corruption engine
//!
//! Every operation is bit-exact with the cartridge routine; the search
//! results depend on reproducing the nibble arithmetic exactly.

use crate::error::Result;
use crate::state::{CorruptionState, LastResult};
use sram_spec::Instruction;

/// Diff-encoding table, indexed by `carried_bit * 8 + invert * 16 + nibble / 2`.
/// Even input nibbles take the high half of the entry, odd ones the low half.
const DIFF_TABLE: [u8; 32] = [
    0x01, 0x32, 0x76, 0x45, 0xFE, 0xCD, 0x89, 0xBA,
    0xFE, 0xCD, 0x89, 0xBA, 0x01, 0x32, 0x76, 0x45,
    0x08, 0xC4, 0xE6, 0x2A, 0xF7, 0x3B, 0x19, 0xD5,
    0xF7, 0x3B, 0x19, 0xD5, 0x08, 0xC4, 0xE6, 0x2A,
];

/// 4-bit reversal
const NIBBLE_REVERSE: [u8; 16] = [
    0x0, 0x8, 0x4, 0xC, 0x2, 0xA, 0x6, 0xE,
    0x1, 0x9, 0x5, 0xD, 0x3, 0xB, 0x7, 0xF,
];

/// Encode one nibble, feeding the result back into the carried state
#[inline]
pub fn diff_encode_nibble(nibble: u8, invert: bool, last: &mut LastResult) -> u8 {
    let nibble = nibble & 0x0F;
    let bit = if invert { last.bit(3) } else { last.bit(0) };
    let index = bit as usize * 8 + invert as usize * 16 + (nibble >> 1) as usize;
    let entry = DIFF_TABLE[index];
    let out = if nibble & 1 == 0 { entry >> 4 } else { entry & 0x0F };
    last.set(out);
    out
}

/// Encode a whole byte, high nibble first
#[inline]
pub fn diff_encode_byte(byte: u8, invert: bool, last: &mut LastResult) -> u8 {
    let hi = diff_encode_nibble(byte >> 4, invert, last);
    let lo = diff_encode_nibble(byte & 0x0F, invert, last);
    hi << 4 | lo
}

#[inline]
pub fn nibble_reverse(byte: u8) -> u8 {
    NIBBLE_REVERSE[(byte >> 4) as usize] << 4 | NIBBLE_REVERSE[(byte & 0x0F) as usize]
}

#[inline]
pub fn swap_nibbles(byte: u8) -> u8 {
    byte.rotate_left(4)
}

/// Execute single instruction
pub fn execute(instr: &Instruction, state: &mut CorruptionState) -> Result<()> {
    let sram = &mut state.sram;

    match *instr {
        Instruction::Init | Instruction::ResetLastResult => {
            state.last_result.reset();
        }

        Instruction::Fill { dst, byte } => {
            sram.write(dst, byte)?;
        }

        Instruction::SwapNibbles { dst } => {
            sram.update(dst, swap_nibbles)?;
        }

        Instruction::DiffEncode { dst, invert } => {
            let last = &mut state.last_result;
            sram.update(dst, |b| diff_encode_byte(b, invert, last))?;
        }

        Instruction::NibbleReverse { dst } => {
            sram.update(dst, nibble_reverse)?;
        }

        Instruction::XorAddr { dst, src } => {
            let value = sram.read(src)?;
            sram.update(dst, |b| b ^ value)?;
        }

        Instruction::CopyAddr { dst, src } => {
            let value = sram.read(src)?;
            sram.write(dst, value)?;
        }

        Instruction::Bitset { dst, mask } => {
            sram.update(dst, |b| b | mask)?;
        }
    }

    Ok(())
}
