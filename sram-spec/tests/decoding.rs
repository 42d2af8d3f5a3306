//! Decoding behavior over arbitrary behavior-file triples

use proptest::prelude::*;
use sram_spec::{Instruction, Opcode, RawInstruction, SpecError};

proptest! {
    #[test]
    fn test_known_opcodes_always_decode(op in 0i64..=8, p1 in any::<i64>(), p2 in any::<i64>()) {
        let instr = Instruction::decode(&RawInstruction::new(op, p1, p2)).unwrap();
        prop_assert_eq!(instr.opcode().to_u8() as i64, op);
    }

    #[test]
    fn test_unknown_opcodes_rejected(op in prop_oneof![i64::MIN..0i64, 9i64..i64::MAX], p1 in any::<i64>()) {
        let err = Instruction::decode(&RawInstruction::new(op, p1, 0)).unwrap_err();
        prop_assert_eq!(err, SpecError::InvalidOpcode { opcode: op });
    }

    #[test]
    fn test_destination_is_low_16_bits(op in 1i64..=7, p1 in any::<i64>()) {
        let instr = Instruction::decode(&RawInstruction::new(op, p1, 0)).unwrap();
        prop_assert_eq!(instr.destination(), Some(p1 as u16));
    }

    #[test]
    fn test_invert_follows_low_byte(p2 in any::<i64>()) {
        let instr = Instruction::decode(&RawInstruction::new(3, 0xA000, p2)).unwrap();
        prop_assert_eq!(instr, Instruction::DiffEncode { dst: 0xA000, invert: p2 as u8 != 0 });
    }
}

#[test]
fn test_reset_operations_ignore_parameters() {
    let init = Instruction::decode(&RawInstruction::new(0, 0xA000, 0xFF)).unwrap();
    let reset = Instruction::decode(&RawInstruction::new(8, 0xBFFF, 1)).unwrap();
    assert_eq!(init, Instruction::Init);
    assert_eq!(reset, Instruction::ResetLastResult);
    assert_eq!(init.destination(), None);
    assert_eq!(reset.destination(), None);
    assert_ne!(init.opcode(), Opcode::ResetLastResult);
}

#[test]
fn test_bitset_mask_is_raw_or_value() {
    // the parameter is an OR mask, not a bit index
    let instr = Instruction::decode(&RawInstruction::new(7, 0xA010, 3)).unwrap();
    assert_eq!(instr, Instruction::Bitset { dst: 0xA010, mask: 0x03 });
}
