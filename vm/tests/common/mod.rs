//! Shared test helpers for VM integration tests.

use expr_vm::error::Trap;

/// Returns the 9-byte FLOAT_LITERAL encoding of `value`.
#[allow(dead_code)]
pub fn lit(value: f64) -> Vec<u8> {
    let mut bytes = vec![0x01];
    bytes.extend_from_slice(&value.to_bits().to_le_bytes());
    bytes
}

/// Returns a bare opcode byte as an instruction fragment.
#[allow(dead_code)]
pub fn op(byte: u8) -> Vec<u8> {
    vec![byte]
}

/// Concatenates instruction fragments into one buffer.
#[allow(dead_code)]
pub fn program(parts: &[Vec<u8>]) -> Vec<u8> {
    parts.concat()
}

/// Asserts that running `bytecode` produces a specific trap.
#[allow(dead_code)]
pub fn assert_trap(bytecode: &[u8], expected: Trap) {
    let result = expr_vm::run(bytecode);
    assert!(
        result.is_err(),
        "expected trap {expected} but run succeeded with {result:?}"
    );
    assert_eq!(result.unwrap_err(), expected);
}
