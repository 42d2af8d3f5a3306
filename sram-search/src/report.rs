//! Text formatting of search and dump results

use crate::matches::MatchReport;
use sram_spec::WINDOW_LEN;
use std::fmt::Write;

/// Bytes as space-terminated lowercase hex pairs (`"d2 50 01 "`)
pub fn hex_window(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for b in bytes {
        let _ = write!(out, "{b:02x} ");
    }
    out
}

/// Format the grouped match report
///
/// ```text
/// [[ $0150 ]]
///   Hi=12   Lo=3      00 c3 50 01 ...
/// ```
pub fn format_report(report: &MatchReport) -> String {
    let mut out = String::new();
    for (address, matches) in report.groups() {
        let _ = writeln!(out, "[[ ${address:04X} ]]");
        for m in matches {
            let _ = writeln!(
                out,
                "  Hi={:<4} Lo={:<3}    {}",
                m.outer,
                m.inner,
                hex_window(&m.snapshot)
            );
        }
    }
    out
}

/// Format a dump-mode window sequence
///
/// The first window is the state before any pass.
pub fn format_dump(windows: &[[u8; WINDOW_LEN]]) -> String {
    let mut out = String::new();
    let mut iter = windows.iter();
    if let Some(initial) = iter.next() {
        let _ = writeln!(out, "{}", hex_window(initial));
    }
    for (i, w) in iter.enumerate() {
        let _ = writeln!(out, "Iteration {i}:");
        let _ = writeln!(out, "    {}", hex_window(w));
    }
    out
}
