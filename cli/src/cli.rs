//! Implements the command line behavior.

use std::fs;
use std::path::{Path, PathBuf};

use expr_codegen::Compiler;
use expr_vm::Vm;
use log::{debug, info};

/// Default extension for bytecode files.
const BYTECODE_EXTENSION: &str = "exprbc";

/// Compiles and runs `expression`, printing the result.
pub fn eval(expression: &str, strict: bool, max_stack_depth: Option<usize>) -> Result<(), String> {
    let bytecode = Compiler::new()
        .require_single_result(strict)
        .compile(expression)
        .map_err(|e| format!("Unable to compile expression: {e}"))?;

    let value = execute(&bytecode, max_stack_depth)?;
    println!("{value}");
    Ok(())
}

/// Compiles the expression in `path` and writes the bytecode.
///
/// When `output` is `None`, writes next to the source with the
/// `exprbc` extension.
pub fn compile(path: &Path, output: Option<&Path>, strict: bool) -> Result<(), String> {
    let file =
        fs::File::open(path).map_err(|e| format!("Unable to open {}: {}", path.display(), e))?;

    let bytecode = Compiler::new()
        .require_single_result(strict)
        .compile_reader(file)
        .map_err(|e| format!("Unable to compile {}: {e}", path.display()))?;

    let output: PathBuf = match output {
        Some(p) => p.to_path_buf(),
        None => path.with_extension(BYTECODE_EXTENSION),
    };

    fs::write(&output, &bytecode)
        .map_err(|e| format!("Unable to write {}: {e}", output.display()))?;
    info!("Wrote {} bytes to {}", bytecode.len(), output.display());
    Ok(())
}

/// Executes the bytecode file in `path`, printing the result.
pub fn run(path: &Path, max_stack_depth: Option<usize>) -> Result<(), String> {
    let bytecode = read_bytecode(path)?;
    let value = execute(&bytecode, max_stack_depth)?;
    println!("{value}");
    Ok(())
}

/// Prints the instruction listing for the bytecode file in `path`.
pub fn disasm(path: &Path) -> Result<(), String> {
    let bytecode = read_bytecode(path)?;
    let listing = expr_bytecode::disassemble(&bytecode)
        .map_err(|e| format!("Unable to decode {}: {e}", path.display()))?;
    print!("{listing}");
    Ok(())
}

fn read_bytecode(path: &Path) -> Result<Vec<u8>, String> {
    let bytecode =
        fs::read(path).map_err(|e| format!("Unable to read {}: {}", path.display(), e))?;
    debug!("Read {} bytes from {}", bytecode.len(), path.display());
    Ok(bytecode)
}

fn execute(bytecode: &[u8], max_stack_depth: Option<usize>) -> Result<f64, String> {
    let vm = match max_stack_depth {
        Some(depth) => Vm::new().with_max_stack_depth(depth),
        None => Vm::new(),
    };
    vm.run(bytecode).map_err(|trap| format!("VM trap: {trap}"))
}
