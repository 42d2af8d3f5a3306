//! Behavior file loading

use crate::error::Result;
use crate::parser::{parse_program, Loaded};
use std::path::Path;
use tracing::debug;

/// Read and parse a behavior file
///
/// Fails only when the file cannot be read; parse problems are reported
/// through [`Loaded::stopped`].
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Loaded> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let loaded = parse_program(&source);
    debug!(
        path = %path.display(),
        instructions = loaded.program.len(),
        complete = loaded.is_complete(),
        "loaded behavior program"
    );
    Ok(loaded)
}
