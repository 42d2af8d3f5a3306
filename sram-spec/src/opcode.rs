//! # Corruption Operation Identifiers
//!
//! Behavior programs name operations by small integers (0-8). Anything else
//! is a malformed program and aborts the corruption pass that reaches it.
//!
//! ## Operation Families
//! - 0, 8: carried-state resets (INIT, RESET)
//! - 1-4: single-byte rewrites (FILL, SWAP, DIFF, NREV)
//! - 5-7: two-address / mask operations (XOR, COPY, BITSET)

use serde::{Deserialize, Serialize};

/// Corruption operation identifier
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// INIT: last_result = 0
    Init = 0,
    /// FILL: mem[dst] = byte
    Fill = 1,
    /// SWAP: mem[dst] = (lo << 4) | hi
    SwapNibbles = 2,
    /// DIFF: differential nibble encode of mem[dst]
    DiffEncode = 3,
    /// NREV: bit-reverse each nibble of mem[dst]
    NibbleReverse = 4,
    /// XOR: mem[dst] ^= mem[src]
    XorAddr = 5,
    /// COPY: mem[dst] = mem[src]
    CopyAddr = 6,
    /// BITSET: mem[dst] |= mask
    Bitset = 7,
    /// RESET: last_result = 0
    ResetLastResult = 8,
}

impl Opcode {
    /// All operations in identifier order
    pub const ALL: [Opcode; 9] = [
        Opcode::Init,
        Opcode::Fill,
        Opcode::SwapNibbles,
        Opcode::DiffEncode,
        Opcode::NibbleReverse,
        Opcode::XorAddr,
        Opcode::CopyAddr,
        Opcode::Bitset,
        Opcode::ResetLastResult,
    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Try to convert from a raw behavior-file identifier
    pub fn from_raw(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_u8)
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Init => "init",
            Opcode::Fill => "fill",
            Opcode::SwapNibbles => "swap",
            Opcode::DiffEncode => "diff",
            Opcode::NibbleReverse => "nrev",
            Opcode::XorAddr => "xor",
            Opcode::CopyAddr => "copy",
            Opcode::Bitset => "bitset",
            Opcode::ResetLastResult => "reset",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
