//! Behavior program parser
//!
//! Groups the integer stream into `(operation, param1, param2)` triples.
//! Operation identifiers are not validated here; the engine rejects unknown
//! ones when it reaches them.

use crate::error::{LoaderError, Result};
use crate::lexer::Token;
use logos::Logos;
use sram_spec::{Program, RawInstruction};
use tracing::warn;

/// Result of reading a behavior source
///
/// Loading stops at the first malformed token or at a trailing partial
/// triple. Every complete triple read before that point is kept.
#[derive(Debug)]
pub struct Loaded {
    pub program: Program,
    pub stopped: Option<LoaderError>,
}

impl Loaded {
    /// Whether the whole source was consumed
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }

    /// The program, or the reason loading stopped early
    pub fn strict(self) -> Result<Program> {
        match self.stopped {
            Some(err) => Err(err),
            None => Ok(self.program),
        }
    }
}

/// Parse a behavior program from text
pub fn parse_program(source: &str) -> Loaded {
    let mut program = Program::new();
    let mut pending: Vec<i64> = Vec::with_capacity(3);
    let mut lex = Token::lexer(source);

    while let Some(token) = lex.next() {
        match token {
            Ok(Token::Number(value)) => {
                pending.push(value);
                if pending.len() == 3 {
                    program.push(RawInstruction::new(pending[0], pending[1], pending[2]));
                    pending.clear();
                }
            }
            Err(()) => {
                let err = LoaderError::InvalidToken {
                    offset: lex.span().start,
                    text: lex.slice().to_string(),
                };
                warn!(loaded = program.len(), "{err}; keeping instructions read so far");
                return Loaded {
                    program,
                    stopped: Some(err),
                };
            }
        }
    }

    let stopped = (!pending.is_empty()).then(|| LoaderError::IncompleteInstruction {
        index: program.len(),
        found: pending.len(),
    });
    if let Some(err) = &stopped {
        warn!(loaded = program.len(), "{err}; dropping trailing values");
    }

    Loaded { program, stopped }
}
