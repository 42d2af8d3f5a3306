//! # Error Types for the SRAM corruption model

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Unknown operation: {opcode} (valid range: 0-8)")]
    InvalidOpcode { opcode: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::InvalidOpcode { opcode: 9 };
        assert_eq!(err.to_string(), "Unknown operation: 9 (valid range: 0-8)");

        let err = SpecError::InvalidOpcode { opcode: -1 };
        assert_eq!(err.to_string(), "Unknown operation: -1 (valid range: 0-8)");
    }
}
