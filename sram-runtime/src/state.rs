//! Engine state: the SRAM plus the carried "last result" nibble

use crate::memory::Sram;

/// The nibble threaded through diff-encoding
///
/// Only DIFF writes it; INIT and RESET are its only reset points. It
/// survives across corruption passes, so re-running a program is not the
/// same as running it on a fresh engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LastResult(u8);

impl LastResult {
    pub const fn new(value: u8) -> Self {
        LastResult(value & 0x0F)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: u8) {
        self.0 = value & 0x0F;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Bit `n` of the nibble (0 or 1)
    #[inline]
    pub const fn bit(self, n: u32) -> u8 {
        (self.0 >> n) & 1
    }
}

/// Everything a corruption pass mutates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorruptionState {
    pub sram: Sram,
    pub last_result: LastResult,
}

impl CorruptionState {
    pub fn new(sram: Sram) -> Self {
        CorruptionState {
            sram,
            last_result: LastResult::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_result_masks_to_nibble() {
        let mut lr = LastResult::new(0xAB);
        assert_eq!(lr.get(), 0x0B);
        lr.set(0xF7);
        assert_eq!(lr.get(), 0x07);
        lr.reset();
        assert_eq!(lr.get(), 0);
    }

    #[test]
    fn test_last_result_bits() {
        let lr = LastResult::new(0b1001);
        assert_eq!(lr.bit(0), 1);
        assert_eq!(lr.bit(1), 0);
        assert_eq!(lr.bit(3), 1);
    }

    #[test]
    fn test_state_new() {
        let state = CorruptionState::new(Sram::new());
        assert_eq!(state.last_result.get(), 0);
    }
}
