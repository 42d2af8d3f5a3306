//! SRAM memory store
//!
//! A fixed 8 KiB buffer addressed by external addresses in
//! `[$A000, $C000)`. Every access goes through [`sram_index`], so an
//! address outside the mapped region is reported instead of wrapping.

use crate::error::{Result, RuntimeError};
use sram_spec::{sram_index, DIGEST_LEN, SRAM_SIZE, WINDOW_LEN, WINDOW_OFFSET};

#[derive(Clone, PartialEq, Eq)]
pub struct Sram {
    data: Box<[u8; SRAM_SIZE]>,
}

impl Sram {
    /// Zero-filled SRAM
    pub fn new() -> Self {
        Sram {
            data: Box::new([0; SRAM_SIZE]),
        }
    }

    /// Build from a byte slice, zero-filling or truncating to `SRAM_SIZE`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut sram = Self::new();
        let n = bytes.len().min(SRAM_SIZE);
        sram.data[..n].copy_from_slice(&bytes[..n]);
        sram
    }

    /// Replace the whole contents; `bytes` must be exactly `SRAM_SIZE` long
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != SRAM_SIZE {
            return Err(RuntimeError::SnapshotSize { found: bytes.len() });
        }
        self.data.copy_from_slice(bytes);
        Ok(())
    }

    /// Copy the contents of another store
    pub fn load_from(&mut self, other: &Sram) {
        self.data.copy_from_slice(&other.data[..]);
    }

    #[inline]
    fn index(address: u16) -> Result<usize> {
        sram_index(address).ok_or(RuntimeError::OutOfBounds { address })
    }

    #[inline]
    pub fn read(&self, address: u16) -> Result<u8> {
        Ok(self.data[Self::index(address)?])
    }

    #[inline]
    pub fn write(&mut self, address: u16, value: u8) -> Result<()> {
        self.data[Self::index(address)?] = value;
        Ok(())
    }

    /// Read-modify-write of a single byte
    #[inline]
    pub fn update<F>(&mut self, address: u16, f: F) -> Result<()>
    where
        F: FnOnce(u8) -> u8,
    {
        let slot = &mut self.data[Self::index(address)?];
        *slot = f(*slot);
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    /// The 16-byte signature window
    pub fn window(&self) -> [u8; WINDOW_LEN] {
        let mut window = [0; WINDOW_LEN];
        window.copy_from_slice(&self.data[WINDOW_OFFSET..WINDOW_OFFSET + WINDOW_LEN]);
        window
    }

    /// The bytes covered by the cycle digest
    pub fn digest_window(&self) -> &[u8] {
        &self.data[WINDOW_OFFSET..WINDOW_OFFSET + DIGEST_LEN]
    }
}

impl Default for Sram {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sram")
            .field("window", &self.window())
            .finish_non_exhaustive()
    }
}
