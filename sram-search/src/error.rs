//! Search errors

use crate::config::ConfigError;
use sram_runtime::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Seed pass failed after outer iteration {outer}: {source}")]
    SeedFailed {
        outer: u32,
        #[source]
        source: RuntimeError,
    },

    #[error("Probe pass failed at outer {outer}, inner {inner}: {source}")]
    ProbeFailed {
        outer: u32,
        inner: u32,
        #[source]
        source: RuntimeError,
    },

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
