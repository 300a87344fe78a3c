//! Integration tests for FLOAT_LITERAL encoding and decoding.

use expr_bytecode::decode::read_f64_le;
use expr_bytecode::encode::{push_float_literal, push_opcode};
use expr_bytecode::{Decoder, Instruction, Opcode};
use proptest::prelude::*;
use rstest::rstest;

fn decode_single_literal(bytecode: &[u8]) -> f64 {
    let mut decoder = Decoder::new(bytecode);
    match decoder.next() {
        Some(Ok((0, Instruction::FloatLiteral(value)))) => value,
        other => panic!("expected a single literal, got {other:?}"),
    }
}

#[rstest]
#[case(0.0)]
#[case(-0.0)]
#[case(f64::MIN_POSITIVE / 2.0)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
#[case(f64::NAN)]
#[case(f64::from_bits(0x7FF0_0000_0000_0001))]
#[case(-123.456)]
fn literal_when_special_value_then_bits_preserved(#[case] value: f64) {
    let mut bytecode = Vec::new();
    push_float_literal(&mut bytecode, value);

    assert_eq!(bytecode.len(), 9);
    assert_eq!(decode_single_literal(&bytecode).to_bits(), value.to_bits());
}

#[test]
fn literal_when_followed_by_operator_then_operand_is_exactly_eight_bytes() {
    let mut bytecode = Vec::new();
    push_float_literal(&mut bytecode, 7.0);
    push_opcode(&mut bytecode, Opcode::Log);

    assert_eq!(bytecode[9], 0x04);
    assert_eq!(read_f64_le(&bytecode, 1), Some(7.0));
}

proptest! {
    #[test]
    fn literal_when_any_bit_pattern_then_roundtrips(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        let mut bytecode = Vec::new();
        push_float_literal(&mut bytecode, value);

        prop_assert_eq!(decode_single_literal(&bytecode).to_bits(), bits);
    }
}
