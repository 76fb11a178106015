//! Runs a Brainfuck program file against stdin and stdout.
//!
//! ```text
//! STRINGSCAN_LOG=trace cargo run --example brainfuck -- hello.bf
//! ```

use std::{fs, io, process::ExitCode};

use stringscan::{InterpreterOptions, brainfuck::Interpreter};
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("STRINGSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: brainfuck <program.bf>");
        return ExitCode::from(2);
    };
    let program = match fs::read_to_string(&path) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("brainfuck: {path}: {e}");
            return ExitCode::from(2);
        }
    };

    let mut interpreter = Interpreter::new(&program, InterpreterOptions::default());
    match interpreter.run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("brainfuck: {e}");
            ExitCode::FAILURE
        }
    }
}
