//! # Jump Signature Search
//!
//! Drives two corruption engines over a bounded 2D iteration space looking
//! for `JP nn` (`$C3`) / `JP NC,nn` (`$D2`) opcodes appearing in the SRAM
//! signature window, and groups the hits by the jump target they encode.
//!
//! ## Example
//!
//! ```rust
//! use sram_runtime::{Engine, Sram};
//! use sram_search::{Search, SearchConfig};
//! use sram_spec::Program;
//!
//! let seed = Engine::with_program(Sram::new(), Program::new());
//! let config = SearchConfig::new(4, 10).unwrap();
//! let mut search = Search::new(seed, Program::new(), config).unwrap();
//! let outcome = search.run().unwrap();
//! assert!(outcome.report.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod matches;
pub mod search;
pub mod dump;
pub mod report;

pub use config::{ConfigError, SearchConfig};
pub use error::{Result, SearchError};
pub use matches::{Match, MatchReport};
pub use search::{cycled, scan_window, Search, SearchOutcome};
pub use dump::run_dump;
pub use report::{format_dump, format_report, hex_window};
