//! A cursor-based string scanner.
//!
//! [`Scanner`] walks left-to-right over an immutable `&str`, matching caller
//! supplied [`Pattern`]s against the unconsumed remainder of the text. Every
//! scanning method is either *anchored* (the pattern must match at the current
//! offset) or *seeking* (the pattern may match anywhere ahead, and everything
//! up to the end of the match counts as consumed), and either advances the
//! offset or only reports what it would consume.
//!
//! ```rust
//! use regex::Regex;
//! use stringscan::Scanner;
//!
//! let digits = Regex::new(r"\d+").unwrap();
//! let mut scanner = Scanner::new("ab12cd");
//!
//! assert_eq!(scanner.scan(&digits), None);
//! assert_eq!(scanner.take(2), "ab");
//! assert_eq!(scanner.scan(&digits), Some("12"));
//! assert_eq!(scanner.offset(), 4);
//! assert_eq!(scanner.scan_until('d'), Some("cd"));
//! assert!(scanner.eos());
//! ```

mod error;
mod options;
mod pattern;
mod scanner;

#[cfg(feature = "brainfuck")]
pub mod brainfuck;

pub use error::PatternError;
#[cfg(feature = "brainfuck")]
pub use error::{InterpretError, Result};
#[cfg(feature = "brainfuck")]
pub use options::{EofBehavior, InterpreterOptions};
pub use options::ScannerOptions;
pub use pattern::{Pattern, PatternMatch, RegexPattern};
pub use scanner::Scanner;
