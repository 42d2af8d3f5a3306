//! Dump mode: watch the signature window over consecutive passes of a
//! single engine

use sram_runtime::{Engine, Result};
use sram_spec::WINDOW_LEN;
use tracing::debug;

/// Window before the first pass followed by the window after each pass
pub fn run_dump(engine: &mut Engine, iterations: usize) -> Result<Vec<[u8; WINDOW_LEN]>> {
    let mut windows = Vec::with_capacity(iterations + 1);
    windows.push(engine.sram().window());

    for i in 0..iterations {
        engine.run_once()?;
        debug!(iteration = i, last_result = engine.last_result().get(), "dump pass");
        windows.push(engine.sram().window());
    }

    Ok(windows)
}
