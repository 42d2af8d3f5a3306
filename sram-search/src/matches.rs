//! Match records and the address-grouped report

use serde::{Deserialize, Serialize};
use sram_spec::WINDOW_LEN;
use std::collections::BTreeMap;

/// A jump opcode found in the signature window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The full signature window at the time of the hit
    pub snapshot: [u8; WINDOW_LEN],
    /// Outer (seed) iteration
    pub outer: u32,
    /// Inner (probe) iteration
    pub inner: u32,
    /// Offset of the jump opcode inside the window
    pub position: usize,
    /// Little-endian jump target following the opcode
    pub address: u16,
}

/// Matches grouped by jump target
///
/// Groups iterate in ascending address order; within a group, matches keep
/// the order they were found in.
#[derive(Debug, Clone, Default)]
pub struct MatchReport {
    groups: BTreeMap<u16, Vec<Match>>,
    total: usize,
}

/// Size of the 16-bit jump target space
pub const ADDRESS_SPACE: usize = 1 << 16;

impl MatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, m: Match) {
        self.groups.entry(m.address).or_default().push(m);
        self.total += 1;
    }

    /// `(address, matches)` in ascending address order
    pub fn groups(&self) -> impl Iterator<Item = (u16, &[Match])> + '_ {
        self.groups.iter().map(|(&addr, ms)| (addr, ms.as_slice()))
    }

    pub fn get(&self, address: u16) -> Option<&[Match]> {
        self.groups.get(&address).map(Vec::as_slice)
    }

    /// All matches, grouped and ordered as reported
    pub fn iter(&self) -> impl Iterator<Item = &Match> + '_ {
        self.groups.values().flatten()
    }

    /// Total number of recorded matches
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct jump targets reached
    pub fn unique_addresses(&self) -> usize {
        self.groups.len()
    }

    /// Fraction of the 16-bit address space reached
    pub fn coverage(&self) -> f64 {
        self.unique_addresses() as f64 / ADDRESS_SPACE as f64
    }
}

impl Extend<Match> for MatchReport {
    fn extend<T: IntoIterator<Item = Match>>(&mut self, iter: T) {
        for m in iter {
            self.record(m);
        }
    }
}
