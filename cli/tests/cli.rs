use std::path::Path;

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Writes the bytecode for `5 3 -` to `path`.
fn write_subtract_bytecode(path: &Path) {
    #[rustfmt::skip]
    let bytecode: Vec<u8> = vec![
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14, 0x40,  // FLOAT_LITERAL 5.0
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x40,  // FLOAT_LITERAL 3.0
        0x03,                                                  // SUB
    ];
    std::fs::write(path, bytecode).unwrap();
}

fn exprc() -> Command {
    Command::new(cargo::cargo_bin!("exprc"))
}

#[test]
fn eval_when_postfix_expression_then_prints_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("eval").arg("1 2 + 1 -");
    cmd.assert().success().stdout("2\n");

    Ok(())
}

#[test]
fn eval_when_log_of_one_then_prints_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("eval").arg("1 log");
    cmd.assert().success().stdout("0\n");

    Ok(())
}

#[test]
fn eval_when_infix_expression_then_compile_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("eval").arg("1 + 2");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("E0007"));

    Ok(())
}

#[test]
fn eval_when_leftover_values_then_vm_trap() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("eval").arg("1 2");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("VM trap"));

    Ok(())
}

#[test]
fn eval_when_strict_and_leftover_values_then_compile_error(
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("eval").arg("--strict").arg("1 2");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("E0009"));

    Ok(())
}

#[test]
fn eval_when_max_stack_depth_exceeded_then_overflow() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("eval")
        .arg("--max-stack-depth")
        .arg("1")
        .arg("1 2 +");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("stack overflow"));

    Ok(())
}

#[test]
fn compile_when_source_file_then_writes_bytecode() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let source_path = dir.path().join("sub.expr");
    std::fs::write(&source_path, "5 3 -")?;

    let mut cmd = exprc();
    cmd.arg("compile").arg(&source_path);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let expected_dir = TempDir::new()?;
    let expected_path = expected_dir.path().join("expected.exprbc");
    write_subtract_bytecode(&expected_path);
    assert_eq!(
        std::fs::read(dir.path().join("sub.exprbc"))?,
        std::fs::read(expected_path)?
    );

    Ok(())
}

#[test]
fn compile_when_output_given_then_writes_there() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let source_path = dir.path().join("sub.expr");
    let output_path = dir.path().join("out.bin");
    std::fs::write(&source_path, "5 3 -")?;

    let mut cmd = exprc();
    cmd.arg("compile")
        .arg(&source_path)
        .arg("--output")
        .arg(&output_path);
    cmd.assert().success();

    assert_eq!(std::fs::read(output_path)?.len(), 19);

    Ok(())
}

#[test]
fn compile_when_file_does_not_exist_then_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("compile").arg("does-not-exist.expr");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unable to open"));

    Ok(())
}

#[test]
fn run_when_bytecode_file_then_prints_value() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sub.exprbc");
    write_subtract_bytecode(&path);

    let mut cmd = exprc();
    cmd.arg("run").arg(&path);
    cmd.assert().success().stdout("2\n");

    Ok(())
}

#[test]
fn run_when_invalid_opcode_then_trap() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad.exprbc");
    std::fs::write(&path, [0xFFu8])?;

    let mut cmd = exprc();
    cmd.arg("run").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid instruction: 0xFF"));

    Ok(())
}

#[test]
fn disasm_when_bytecode_file_then_prints_listing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sub.exprbc");
    write_subtract_bytecode(&path);

    let mut cmd = exprc();
    cmd.arg("disasm").arg(&path);
    cmd.assert().success().stdout(
        "0000 FLOAT_LITERAL 5.0\n0009 FLOAT_LITERAL 3.0\n0018 SUB\n",
    );

    Ok(())
}

#[test]
fn version_when_called_then_prints_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = exprc();
    cmd.arg("version");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("exprc version"));

    Ok(())
}

#[test]
fn eval_when_verbose_with_log_file_then_writes_log() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let log_path = dir.path().join("exprc.log");

    let mut cmd = exprc();
    cmd.arg("-vvvv")
        .arg("--log-file")
        .arg(&log_path)
        .arg("eval")
        .arg("1 2 +");
    cmd.assert().success().stdout("3\n");

    let log = std::fs::read_to_string(log_path)?;
    assert!(log.contains("ADD"), "{log}");

    Ok(())
}
