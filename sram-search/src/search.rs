//! Brute-force jump-signature search
//!
//! Two engines: the *seed* engine advances one pass per outer iteration and
//! the *probe* engine, re-seeded from it each time, is run up to
//! `inner_iterations` passes while its signature window is scanned for a
//! jump opcode. The inner loop ends early once the window digest returns to
//! its value at the start of the round.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::matches::{Match, MatchReport};
use sram_runtime::{digest, Digest, Engine, Sram};
use sram_spec::{Program, JUMP_OPCODES, SCAN_LEN, WINDOW_LEN};
use tracing::{debug, info, trace};

/// Outer iterations between `info` progress events
const PROGRESS_INTERVAL: u32 = 1000;

/// Find the first jump opcode among the first `SCAN_LEN` window bytes
///
/// Returns its position and the little-endian target that follows it.
pub fn scan_window(window: &[u8; WINDOW_LEN]) -> Option<(usize, u16)> {
    let position = window[..SCAN_LEN]
        .iter()
        .position(|b| JUMP_OPCODES.contains(b))?;
    let address = u16::from_le_bytes([window[position + 1], window[position + 2]]);
    Some((position, address))
}

/// Whether the probe has returned to the state it started the round in
///
/// Compares window digests only; a collision ends the round the same way a
/// true cycle does.
#[inline]
pub fn cycled(start: Digest, sram: &Sram) -> bool {
    digest(sram) == start
}

/// Totals of a finished search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub report: MatchReport,
    /// Outer iterations run
    pub outer_completed: u32,
    /// Probe passes run across all rounds
    pub inner_runs: u64,
    /// Rounds ended by the digest check
    pub early_exits: u32,
}

pub struct Search {
    seed: Engine,
    probe: Engine,
    config: SearchConfig,
}

impl Search {
    /// Set up a search from a loaded seed engine and the probe behavior
    pub fn new(seed: Engine, probe_program: Program, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let mut probe = Engine::new();
        probe.load_program(probe_program);
        Ok(Search { seed, probe, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn seed(&self) -> &Engine {
        &self.seed
    }

    pub fn probe(&self) -> &Engine {
        &self.probe
    }

    /// Run every outer iteration and collect the matches
    pub fn run(&mut self) -> Result<SearchOutcome> {
        let mut outcome = SearchOutcome::default();
        info!(
            config = %self.config,
            max_inner_runs = self.config.max_inner_runs(),
            "starting search"
        );

        for outer in 0..self.config.outer_iterations {
            debug!(
                outer,
                reachable = outcome.report.unique_addresses(),
                coverage = outcome.report.coverage() * 100.0,
                "seed round"
            );
            if outer > 0 && outer % PROGRESS_INTERVAL == 0 {
                info!(
                    outer,
                    matches = outcome.report.len(),
                    reachable = outcome.report.unique_addresses(),
                    "progress"
                );
            }

            self.probe_round(outer, &mut outcome)?;

            self.seed
                .run_once()
                .map_err(|source| SearchError::SeedFailed { outer, source })?;
            outcome.outer_completed = outer + 1;
        }

        info!(
            matches = outcome.report.len(),
            reachable = outcome.report.unique_addresses(),
            coverage = outcome.report.coverage() * 100.0,
            inner_runs = outcome.inner_runs,
            early_exits = outcome.early_exits,
            "search finished"
        );
        Ok(outcome)
    }

    fn probe_round(&mut self, outer: u32, outcome: &mut SearchOutcome) -> Result<()> {
        self.probe.seed_from(self.seed.sram());
        let start = digest(self.probe.sram());

        for inner in 1..=self.config.inner_iterations {
            self.probe
                .run_once()
                .map_err(|source| SearchError::ProbeFailed { outer, inner, source })?;
            outcome.inner_runs += 1;

            let window = self.probe.sram().window();
            if let Some((position, address)) = scan_window(&window) {
                trace!(outer, inner, position, address, "jump signature");
                outcome.report.record(Match {
                    snapshot: window,
                    outer,
                    inner,
                    position,
                    address,
                });
            }

            if cycled(start, self.probe.sram()) {
                trace!(outer, inner, %start, "probe cycled");
                outcome.early_exits += 1;
                break;
            }
        }

        Ok(())
    }
}
