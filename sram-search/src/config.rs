//! # Search Configuration
//!
//! Iteration bounds of the two nested loops. The defaults are the bounds
//! the published results were produced with.

use sram_spec::{DEFAULT_INNER_ITERATIONS, DEFAULT_OUTER_ITERATIONS};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// Seed advances (outer loop, indices `0..outer_iterations`)
    pub outer_iterations: u32,
    /// Probe passes per seed (inner loop, indices `1..=inner_iterations`)
    pub inner_iterations: u32,
}

impl SearchConfig {
    /// 10,000 seeds × 400 probe passes
    pub const DEFAULT: Self = Self {
        outer_iterations: DEFAULT_OUTER_ITERATIONS,
        inner_iterations: DEFAULT_INNER_ITERATIONS,
    };

    /// Create a new configuration with validation
    pub fn new(outer_iterations: u32, inner_iterations: u32) -> Result<Self, ConfigError> {
        let config = Self {
            outer_iterations,
            inner_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inner_iterations == 0 {
            return Err(ConfigError::ZeroInnerIterations);
        }
        Ok(())
    }

    /// Upper bound on probe passes
    pub const fn max_inner_runs(&self) -> u64 {
        self.outer_iterations as u64 * self.inner_iterations as u64
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seeds x {} probe passes",
            self.outer_iterations, self.inner_iterations
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroInnerIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroInnerIterations => {
                write!(f, "inner iteration count must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
