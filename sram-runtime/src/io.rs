//! SRAM snapshot files
//!
//! A snapshot is the raw 8 KiB SRAM image. Short files are accepted and
//! zero-filled; bytes past `SRAM_SIZE` are ignored.

use crate::error::Result;
use crate::memory::Sram;
use sram_spec::SRAM_SIZE;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Read a snapshot from `path`
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Sram> {
    let path = path.as_ref();
    let mut bytes = Vec::with_capacity(SRAM_SIZE);
    File::open(path)?
        .take(SRAM_SIZE as u64)
        .read_to_end(&mut bytes)?;

    if bytes.len() < SRAM_SIZE {
        warn!(
            path = %path.display(),
            found = bytes.len(),
            "short snapshot, zero-filling remainder"
        );
    } else {
        debug!(path = %path.display(), "loaded snapshot");
    }

    Ok(Sram::from_bytes(&bytes))
}

/// Write the full SRAM image to `path`
pub fn write_snapshot<P: AsRef<Path>>(path: P, sram: &Sram) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(sram.as_bytes())?;
    file.flush()?;
    debug!(path = %path.display(), "wrote snapshot");
    Ok(())
}
