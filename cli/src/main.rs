use std::path::PathBuf;

use clap::Parser;

mod cli;
mod logger;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "exprc", about = "Postfix expression compiler and virtual machine")]
struct Args {
    /// Turn on verbose logging. Repeat to increase verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Sets the logging to write to a file.
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Selects the subcommand.
    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Subcommand, Debug)]
enum Action {
    /// Compiles and executes an expression given on the command line.
    Eval {
        /// The expression in postfix order, for example "5 3 -".
        expression: String,

        /// Reject expressions that do not leave exactly one value.
        #[arg(long)]
        strict: bool,

        /// Limit the VM operand stack to this many values.
        #[arg(long)]
        max_stack_depth: Option<usize>,
    },
    /// Compiles an expression file into a bytecode file.
    Compile {
        /// Path to the expression source file.
        file: PathBuf,

        /// Path of the bytecode file to write (default: FILE with extension .exprbc).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject expressions that do not leave exactly one value.
        #[arg(long)]
        strict: bool,
    },
    /// Executes a bytecode file and prints the result.
    Run {
        /// Path to the bytecode file.
        file: PathBuf,

        /// Limit the VM operand stack to this many values.
        #[arg(long)]
        max_stack_depth: Option<usize>,
    },
    /// Prints the instructions in a bytecode file.
    Disasm {
        /// Path to the bytecode file.
        file: PathBuf,
    },
    /// Prints the version number.
    Version,
}

pub fn main() -> Result<(), String> {
    let args = Args::parse();

    logger::configure(args.verbose, args.log_file)?;

    match args.action {
        Action::Eval {
            expression,
            strict,
            max_stack_depth,
        } => cli::eval(&expression, strict, max_stack_depth),
        Action::Compile {
            file,
            output,
            strict,
        } => cli::compile(&file, output.as_deref(), strict),
        Action::Run {
            file,
            max_stack_depth,
        } => cli::run(&file, max_stack_depth),
        Action::Disasm { file } => cli::disasm(&file),
        Action::Version => {
            println!("exprc version {VERSION}");
            Ok(())
        }
    }
}
