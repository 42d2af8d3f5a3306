//! Corruption instructions
//!
//! Behavior files hold raw integer triples. A triple is only decoded into a
//! typed [`Instruction`] when the engine reaches it, so a program with an
//! unknown operation still loads and fails at run time.
//!
//! ## Operand Conversion
//! - Addresses: low 16 bits of the parameter
//! - FILL byte, BITSET mask: low 8 bits
//! - DIFF invert flag: true when the low 8 bits are non-zero

use crate::error::SpecError;
use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `(operation, param1, param2)` triple as read from a behavior file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RawInstruction {
    pub opcode: i64,
    pub param1: i64,
    pub param2: i64,
}

impl RawInstruction {
    pub const fn new(opcode: i64, param1: i64, param2: i64) -> Self {
        Self { opcode, param1, param2 }
    }
}

impl From<(i64, i64, i64)> for RawInstruction {
    fn from((opcode, param1, param2): (i64, i64, i64)) -> Self {
        Self::new(opcode, param1, param2)
    }
}

/// Decoded corruption instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// INIT: last_result = 0
    Init,

    /// FILL: mem[dst] = byte
    Fill { dst: u16, byte: u8 },

    /// SWAP: exchange the nibbles of mem[dst]
    SwapNibbles { dst: u16 },

    /// DIFF: differential-encode both nibbles of mem[dst], high first
    DiffEncode { dst: u16, invert: bool },

    /// NREV: bit-reverse each nibble of mem[dst]
    NibbleReverse { dst: u16 },

    /// XOR: mem[dst] ^= mem[src]
    XorAddr { dst: u16, src: u16 },

    /// COPY: mem[dst] = mem[src]
    CopyAddr { dst: u16, src: u16 },

    /// BITSET: mem[dst] |= mask
    Bitset { dst: u16, mask: u8 },

    /// RESET: last_result = 0
    ResetLastResult,
}

impl Instruction {
    /// Decode a raw triple
    pub fn decode(raw: &RawInstruction) -> Result<Self, SpecError> {
        let opcode = Opcode::from_raw(raw.opcode)
            .ok_or(SpecError::InvalidOpcode { opcode: raw.opcode })?;
        let dst = raw.param1 as u16;
        let arg = raw.param2 as u16;

        Ok(match opcode {
            Opcode::Init => Instruction::Init,
            Opcode::Fill => Instruction::Fill { dst, byte: arg as u8 },
            Opcode::SwapNibbles => Instruction::SwapNibbles { dst },
            Opcode::DiffEncode => Instruction::DiffEncode { dst, invert: arg as u8 != 0 },
            Opcode::NibbleReverse => Instruction::NibbleReverse { dst },
            Opcode::XorAddr => Instruction::XorAddr { dst, src: arg },
            Opcode::CopyAddr => Instruction::CopyAddr { dst, src: arg },
            Opcode::Bitset => Instruction::Bitset { dst, mask: arg as u8 },
            Opcode::ResetLastResult => Instruction::ResetLastResult,
        })
    }

    /// Encode to the canonical triple (unused parameters are zero)
    pub fn encode(&self) -> RawInstruction {
        let op = self.opcode().to_u8() as i64;
        let (p1, p2) = match *self {
            Instruction::Init | Instruction::ResetLastResult => (0, 0),
            Instruction::Fill { dst, byte } => (dst, byte as u16),
            Instruction::SwapNibbles { dst } | Instruction::NibbleReverse { dst } => (dst, 0),
            Instruction::DiffEncode { dst, invert } => (dst, invert as u16),
            Instruction::XorAddr { dst, src } | Instruction::CopyAddr { dst, src } => (dst, src),
            Instruction::Bitset { dst, mask } => (dst, mask as u16),
        };
        RawInstruction::new(op, p1 as i64, p2 as i64)
    }

    /// Get the opcode
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Init => Opcode::Init,
            Instruction::Fill { .. } => Opcode::Fill,
            Instruction::SwapNibbles { .. } => Opcode::SwapNibbles,
            Instruction::DiffEncode { .. } => Opcode::DiffEncode,
            Instruction::NibbleReverse { .. } => Opcode::NibbleReverse,
            Instruction::XorAddr { .. } => Opcode::XorAddr,
            Instruction::CopyAddr { .. } => Opcode::CopyAddr,
            Instruction::Bitset { .. } => Opcode::Bitset,
            Instruction::ResetLastResult => Opcode::ResetLastResult,
        }
    }

    /// Destination address, if the instruction touches SRAM
    pub const fn destination(&self) -> Option<u16> {
        match *self {
            Instruction::Init | Instruction::ResetLastResult => None,
            Instruction::Fill { dst, .. }
            | Instruction::SwapNibbles { dst }
            | Instruction::DiffEncode { dst, .. }
            | Instruction::NibbleReverse { dst }
            | Instruction::XorAddr { dst, .. }
            | Instruction::CopyAddr { dst, .. }
            | Instruction::Bitset { dst, .. } => Some(dst),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode().mnemonic();
        match *self {
            Instruction::Init | Instruction::ResetLastResult => f.write_str(m),
            Instruction::Fill { dst, byte } => write!(f, "{m} ${dst:04x}, ${byte:02x}"),
            Instruction::SwapNibbles { dst } | Instruction::NibbleReverse { dst } => {
                write!(f, "{m} ${dst:04x}")
            }
            Instruction::DiffEncode { dst, invert: false } => write!(f, "{m} ${dst:04x}"),
            Instruction::DiffEncode { dst, invert: true } => write!(f, "{m} ${dst:04x}, inv"),
            Instruction::XorAddr { dst, src } | Instruction::CopyAddr { dst, src } => {
                write!(f, "{m} ${dst:04x}, ${src:04x}")
            }
            Instruction::Bitset { dst, mask } => write!(f, "{m} ${dst:04x}, ${mask:02x}"),
        }
    }
}
