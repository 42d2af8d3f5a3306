//! # SRAM Corruption Runtime
//!
//! Executes behavior programs against a simulated 8 KiB cartridge SRAM.
//!
//! ## Features
//!
//! - **Memory store**: fixed 8 KiB buffer mapped at `$A000`, bounds-checked
//! - **9 operations**: fill, nibble swap/reverse, diff-encode, xor, copy, bitset, resets
//! - **Carried state**: the diff-encode nibble survives across passes
//! - **Digest**: djb2 over the signature window for cycle detection
//! - **Snapshots**: raw SRAM image load/store
//!
//! ## Example
//!
//! ```rust
//! use sram_runtime::{Engine, Sram};
//! use sram_spec::{Instruction, Program};
//!
//! let program = Program::from_instructions([Instruction::Fill { dst: 0xA7D0, byte: 0xD2 }]);
//! let mut engine = Engine::with_program(Sram::new(), program);
//! engine.run_once().unwrap();
//! assert_eq!(engine.sram().read(0xA7D0).unwrap(), 0xD2);
//! ```

pub mod error;
pub mod memory;
pub mod state;
pub mod execute;
pub mod engine;
pub mod digest;
pub mod io;

pub use error::{Result, RuntimeError};
pub use memory::Sram;
pub use state::{CorruptionState, LastResult};
pub use engine::Engine;
pub use digest::{digest, Digest};
pub use io::{read_snapshot, write_snapshot};
