use thiserror::Error;

/// Error raised while compiling a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regular expression failed to compile.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
    /// The regular expression parsed but its anchored matcher could not be
    /// built.
    #[error("failed to build anchored matcher: {0}")]
    Automaton(#[from] regex_automata::meta::BuildError),
}

/// Error raised by the interpreter while running a program.
#[cfg(feature = "brainfuck")]
#[derive(Debug, Error)]
pub enum InterpretError {
    /// A `]` was read with no open `[` on the loop stack.
    #[error("found loop end without loop start at offset {offset}")]
    UnmatchedLoopEnd {
        /// Byte offset of the offending `]`.
        offset: usize,
    },
    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for interpreter runs.
#[cfg(feature = "brainfuck")]
pub type Result<T> = core::result::Result<T, InterpretError>;
