//! Behavior Program Loader
//!
//! Reads behavior files (whitespace-separated integer triples) into
//! [`sram_spec::Program`]s.
//!
//! ## Example
//!
//! ```rust
//! use sram_loader::parse_program;
//!
//! let source = r#"
//!     0 0 0
//!     1 0xa7d0 0xd2
//! "#;
//!
//! let program = parse_program(source).strict().unwrap();
//! assert_eq!(program.len(), 2);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod loader;

pub use error::{LoaderError, Result};
pub use parser::{parse_program, Loaded};
pub use loader::load_program;
