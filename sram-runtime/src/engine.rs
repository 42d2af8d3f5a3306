//! Corruption engine
//!
//! Owns one SRAM, one behavior program and the carried nibble. A call to
//! [`Engine::run_once`] is one full corruption pass.

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::memory::Sram;
use crate::state::{CorruptionState, LastResult};
use sram_spec::{Instruction, Program};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: CorruptionState,
    program: Program,
    passes: u64,
}

impl Engine {
    /// Engine over a zeroed SRAM with an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine over an initial SRAM image with a program loaded
    pub fn with_program(sram: Sram, program: Program) -> Self {
        Engine {
            state: CorruptionState::new(sram),
            program,
            passes: 0,
        }
    }

    /// Replace the behavior program
    pub fn load_program(&mut self, program: Program) {
        self.program = program;
    }

    pub fn clear_program(&mut self) {
        self.program.clear();
    }

    /// Replace the SRAM contents; the carried nibble is kept
    pub fn seed_from(&mut self, sram: &Sram) {
        self.state.sram.load_from(sram);
    }

    /// Replace the SRAM contents from raw bytes (must be exactly `SRAM_SIZE`)
    pub fn load_sram(&mut self, bytes: &[u8]) -> Result<()> {
        self.state.sram.load(bytes)
    }

    /// Run every instruction of the program once, in order
    ///
    /// Stops at the first instruction that fails. Effects of the
    /// instructions before it are kept.
    pub fn run_once(&mut self) -> Result<()> {
        for (index, raw) in self.program.iter().enumerate() {
            let instr = Instruction::decode(raw).map_err(|_| RuntimeError::UnknownOperation {
                index,
                opcode: raw.opcode,
            })?;

            execute(&instr, &mut self.state)?;

            let written = instr.destination().and_then(|dst| self.state.sram.read(dst).ok());
            trace!(
                pass = self.passes,
                index,
                %instr,
                ?written,
                last_result = self.state.last_result.get(),
                "executed"
            );
        }

        self.passes += 1;
        Ok(())
    }

    /// Run `n` full passes
    pub fn run(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.run_once()?;
        }
        Ok(())
    }

    pub fn sram(&self) -> &Sram {
        &self.state.sram
    }

    pub fn sram_mut(&mut self) -> &mut Sram {
        &mut self.state.sram
    }

    pub fn last_result(&self) -> LastResult {
        self.state.last_result
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Completed passes since construction
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
