//! Integration tests for the search driver
//!
//! Small hand-built seed/probe programs with outcomes that can be worked
//! out by hand.

use sram_runtime::{Engine, Sram};
use sram_search::{format_report, Search, SearchConfig};
use sram_spec::{Instruction, Program};

fn sram_with(bytes: &[(u16, u8)]) -> Sram {
    let mut sram = Sram::new();
    for &(addr, value) in bytes {
        sram.write(addr, value).unwrap();
    }
    sram
}

#[test]
fn test_empty_probe_cycles_immediately() {
    let seed = Engine::with_program(
        Sram::new(),
        Program::from_instructions([
            Instruction::Bitset { dst: 0xA7D3, mask: 0x01 },
            Instruction::NibbleReverse { dst: 0xA7D3 },
            Instruction::Fill { dst: 0xA100, byte: 0xD2 },
        ]),
    );
    let config = SearchConfig::new(25, 400).unwrap();
    let mut search = Search::new(seed, Program::new(), config).unwrap();

    let outcome = search.run().unwrap();
    assert!(outcome.report.is_empty());
    assert_eq!(outcome.outer_completed, 25);
    assert_eq!(outcome.early_exits, 25);
    assert_eq!(outcome.inner_runs, 25);
}

#[test]
fn test_alternating_seed_groups_by_address() {
    // seed flips $A7D1 between $12 and $21; the probe plants a JP NC in front of it
    let seed = Engine::with_program(
        sram_with(&[(0xA7D1, 0x12)]),
        Program::from_instructions([Instruction::SwapNibbles { dst: 0xA7D1 }]),
    );
    let probe = Program::from_instructions([Instruction::Fill { dst: 0xA7D0, byte: 0xD2 }]);
    let mut search = Search::new(seed, probe, SearchConfig::new(4, 3).unwrap()).unwrap();

    let outcome = search.run().unwrap();
    assert_eq!(outcome.early_exits, 0);
    assert_eq!(outcome.inner_runs, 12);
    assert_eq!(outcome.inner_runs, search.config().max_inner_runs());
    assert_eq!(outcome.report.len(), 12);
    assert_eq!(outcome.report.unique_addresses(), 2);

    let groups: Vec<(u16, Vec<(u32, u32)>)> = outcome
        .report
        .groups()
        .map(|(addr, ms)| (addr, ms.iter().map(|m| (m.outer, m.inner)).collect()))
        .collect();
    assert_eq!(
        groups,
        vec![
            (0x0012, vec![(0, 1), (0, 2), (0, 3), (2, 1), (2, 2), (2, 3)]),
            (0x0021, vec![(1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3)]),
        ]
    );
    assert!(outcome.report.iter().all(|m| m.position == 0 && m.snapshot[0] == 0xD2));
}

#[test]
fn test_cycle_exit_after_match() {
    // $D2 <-> $2D under nibble swap: the hit on pass 2 is recorded before the digest check ends the round
    let seed = Engine::with_program(
        sram_with(&[(0xA7D0, 0xD2), (0xA7D1, 0x00), (0xA7D2, 0x40)]),
        Program::new(),
    );
    let probe = Program::from_instructions([Instruction::SwapNibbles { dst: 0xA7D0 }]);
    let mut search = Search::new(seed, probe, SearchConfig::new(3, 400).unwrap()).unwrap();

    let outcome = search.run().unwrap();
    assert_eq!(outcome.early_exits, 3);
    assert_eq!(outcome.inner_runs, 6);
    let group = outcome.report.get(0x4000).unwrap();
    let coords: Vec<(u32, u32)> = group.iter().map(|m| (m.outer, m.inner)).collect();
    assert_eq!(coords, vec![(0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_only_first_hit_per_pass() {
    let seed = Engine::with_program(Sram::new(), Program::new());
    let probe = Program::from_instructions([
        Instruction::Fill { dst: 0xA7D4, byte: 0xC3 },
        Instruction::Fill { dst: 0xA7D5, byte: 0xEF },
        Instruction::Fill { dst: 0xA7D6, byte: 0xBE },
        Instruction::Fill { dst: 0xA7D9, byte: 0xD2 },
    ]);
    let mut search = Search::new(seed, probe, SearchConfig::new(1, 2).unwrap()).unwrap();

    let outcome = search.run().unwrap();
    assert_eq!(outcome.report.len(), 2);
    assert_eq!(outcome.report.unique_addresses(), 1);
    let group = outcome.report.get(0xBEEF).unwrap();
    assert_eq!(group[0].position, 4);
}

#[test]
fn test_hit_in_last_two_bytes_ignored() {
    let seed = Engine::with_program(Sram::new(), Program::new());
    let probe = Program::from_instructions([
        Instruction::Fill { dst: 0xA7DE, byte: 0xC3 },
        Instruction::Fill { dst: 0xA7DF, byte: 0xD2 },
    ]);
    let mut search = Search::new(seed, probe, SearchConfig::new(2, 5).unwrap()).unwrap();

    let outcome = search.run().unwrap();
    assert!(outcome.report.is_empty());
    // neither write is inside the digested bytes, so every round exits at once
    assert_eq!(outcome.early_exits, 2);
}

#[test]
fn test_report_text() {
    let seed = Engine::with_program(sram_with(&[(0xA7D1, 0x12)]), Program::new());
    let probe = Program::from_instructions([Instruction::Fill { dst: 0xA7D0, byte: 0xC3 }]);
    let mut search = Search::new(seed, probe, SearchConfig::new(1, 2).unwrap()).unwrap();

    let text = format_report(&search.run().unwrap().report);
    assert_eq!(
        text,
        "[[ $0012 ]]\n\
         \x20 Hi=0    Lo=1      c3 12 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \n\
         \x20 Hi=0    Lo=2      c3 12 00 00 00 00 00 00 00 00 00 00 00 00 00 00 \n"
    );
}
