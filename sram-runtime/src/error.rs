//! Runtime error types for the corruption engine

use sram_spec::SRAM_SIZE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("SRAM out of bounds: address {address:#06x}")]
    OutOfBounds { address: u16 },

    #[error("Unknown operation {opcode} at instruction {index}")]
    UnknownOperation { index: usize, opcode: i64 },

    #[error("Invalid snapshot size: expected {expected} bytes, found {found} bytes", expected = SRAM_SIZE)]
    SnapshotSize { found: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_out_of_bounds_display() {
        let err = RuntimeError::OutOfBounds { address: 0xC000 };
        assert_eq!(err.to_string(), "SRAM out of bounds: address 0xc000");

        let err = RuntimeError::OutOfBounds { address: 0x12 };
        assert_eq!(err.to_string(), "SRAM out of bounds: address 0x0012");
    }

    #[test]
    fn test_unknown_operation_display() {
        let err = RuntimeError::UnknownOperation { index: 4, opcode: 9 };
        assert_eq!(err.to_string(), "Unknown operation 9 at instruction 4");
    }

    #[test]
    fn test_snapshot_size_display() {
        let err = RuntimeError::SnapshotSize { found: 12 };
        assert_eq!(
            err.to_string(),
            "Invalid snapshot size: expected 8192 bytes, found 12 bytes"
        );
    }

    #[test]
    fn test_io_error_from() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let runtime_err: RuntimeError = io_err.into();
        assert!(runtime_err.to_string().contains("file not found"));
    }
}
