//! A Brainfuck interpreter driven by a [`Scanner`].
//!
//! The program text is never compiled: the interpreter reads one character at
//! a time with `take(1)` and implements loops by rewinding the scanner's
//! offset to the `[` that opened them.
//!
//! Loops
//! - `[` pushes a frame holding its own position and whether the body is to
//!   be skipped (the current cell is zero, or an enclosing loop is already
//!   being skipped).
//! - `]` pops the innermost frame. If that body was executed, the offset is
//!   rewound to the `[` so its condition is tested again; otherwise execution
//!   simply continues after the `]`.
//! - While the innermost frame is skipping, every other instruction is a
//!   no-op.

use std::io::{self, Read, Write};

use crate::{
    Scanner,
    error::{InterpretError, Result},
    options::{EofBehavior, InterpreterOptions},
};

#[derive(Debug, Clone, Copy)]
struct LoopFrame {
    start: usize,
    skip: bool,
}

/// Runs a Brainfuck program over a byte tape.
#[derive(Debug, Clone)]
pub struct Interpreter<'src> {
    program: &'src str,
    options: InterpreterOptions,
    tape: Vec<u8>,
    pointer: usize,
    loops: Vec<LoopFrame>,
}

impl<'src> Interpreter<'src> {
    /// Creates an interpreter for `program` with a zeroed tape.
    #[must_use]
    pub fn new(program: &'src str, options: InterpreterOptions) -> Self {
        Self {
            program,
            options,
            tape: vec![0; options.tape_len.max(1)],
            pointer: 0,
            loops: Vec::new(),
        }
    }

    /// The tape cells.
    #[must_use]
    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    /// Index of the current cell.
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Runs the program to completion, reading `,` from `input` and writing
    /// `.` to `output`.
    ///
    /// Loops still open when the program ends are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InterpretError::UnmatchedLoopEnd`] on a `]` without a
    /// matching `[`, and [`InterpretError::Io`] if `input` or `output` fail.
    pub fn run<R: Read, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut scanner = Scanner::new(self.program);
        self.loops.clear();
        loop {
            let token = scanner.take(1);
            if let Some(op) = token.chars().next() {
                self.step(op, &mut scanner, &mut input, &mut output)?;
            }
            if scanner.eos() {
                break;
            }
        }
        if !self.loops.is_empty() {
            tracing::debug!(open = self.loops.len(), "program ended inside a loop");
        }
        output.flush()?;
        Ok(())
    }

    fn step<R: Read, W: Write>(
        &mut self,
        op: char,
        scanner: &mut Scanner<'src>,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        match op {
            '[' => {
                // `take(1)` has already moved past the bracket.
                let start = scanner.offset() - 1;
                let skip = self.skipping() || self.tape[self.pointer] == 0;
                tracing::trace!(start, skip, "loop start");
                self.loops.push(LoopFrame { start, skip });
            }
            ']' => {
                let Some(frame) = self.loops.pop() else {
                    let offset = scanner.offset() - 1;
                    tracing::debug!(offset, "loop end without loop start");
                    return Err(InterpretError::UnmatchedLoopEnd { offset });
                };
                if !frame.skip {
                    tracing::trace!(start = frame.start, "loop rewind");
                    scanner.set_offset(frame.start);
                }
            }
            _ if self.skipping() => {}
            '>' => self.pointer = (self.pointer + 1) % self.tape.len(),
            '<' => {
                self.pointer = self
                    .pointer
                    .checked_sub(1)
                    .unwrap_or(self.tape.len() - 1);
            }
            '+' => self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1),
            '-' => self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1),
            '.' => output.write_all(&[self.tape[self.pointer]])?,
            ',' => {
                if let Some(byte) = read_byte(input)? {
                    self.tape[self.pointer] = byte;
                } else {
                    match self.options.eof {
                        EofBehavior::Zero => self.tape[self.pointer] = 0,
                        EofBehavior::AllOnes => self.tape[self.pointer] = u8::MAX,
                        EofBehavior::Unchanged => {}
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn skipping(&self) -> bool {
        self.loops.last().is_some_and(|frame| frame.skip)
    }
}

/// Runs `program` with default options and returns everything it printed.
///
/// # Errors
///
/// See [`Interpreter::run`].
pub fn run_to_vec(program: &str, input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    Interpreter::new(program, InterpreterOptions::default()).run(input, &mut out)?;
    Ok(out)
}

fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match input.read_exact(&mut buf) {
        Ok(()) => Ok(Some(buf[0])),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests;
