//! Window digest used for cycle detection
//!
//! djb2 over the first ten bytes of the signature window. Equal digests are
//! treated as the same state; collisions are accepted and never re-checked
//! against the full window.

use crate::memory::Sram;
use sram_spec::DIGEST_SEED;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub u32);

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// djb2 of an arbitrary byte slice
#[inline]
pub fn djb2(bytes: &[u8]) -> u32 {
    bytes.iter().fold(DIGEST_SEED, |hash, &b| {
        (hash << 5).wrapping_add(hash).wrapping_add(b as u32)
    })
}

/// Digest of the SRAM's signature window
#[inline]
pub fn digest(sram: &Sram) -> Digest {
    Digest(djb2(sram.digest_window()))
}
