//! # Behavior Programs
//!
//! An ordered list of raw instructions describing one corruption pass.

use crate::instruction::{Instruction, RawInstruction};
use std::fmt;

/// Behavior program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instructions in execution order
    pub code: Vec<RawInstruction>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Build a program from decoded instructions
    pub fn from_instructions<I>(instructions: I) -> Self
    where
        I: IntoIterator<Item = Instruction>,
    {
        Self {
            code: instructions.into_iter().map(|i| i.encode()).collect(),
        }
    }

    pub fn push(&mut self, raw: RawInstruction) {
        self.code.push(raw);
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn clear(&mut self) {
        self.code.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawInstruction> {
        self.code.iter()
    }

    /// Number of triples that do not decode to a known operation
    pub fn invalid_count(&self) -> usize {
        self.code
            .iter()
            .filter(|raw| Instruction::decode(raw).is_err())
            .count()
    }
}

impl From<Vec<RawInstruction>> for Program {
    fn from(code: Vec<RawInstruction>) -> Self {
        Self { code }
    }
}

impl FromIterator<RawInstruction> for Program {
    fn from_iter<T: IntoIterator<Item = RawInstruction>>(iter: T) -> Self {
        Self {
            code: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a RawInstruction;
    type IntoIter = std::slice::Iter<'a, RawInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.code.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, raw) in self.code.iter().enumerate() {
            match Instruction::decode(raw) {
                Ok(instr) => writeln!(f, "{i:4}: {instr}")?,
                Err(_) => writeln!(
                    f,
                    "{i:4}: .invalid {} {} {}",
                    raw.opcode, raw.param1, raw.param2
                )?,
            }
        }
        Ok(())
    }
}
