//! Patterns the scanner can match against the remaining text.
//!
//! A [`Pattern`] answers one question: where does it match in a haystack,
//! either anywhere (a *seek*) or only at position 0 (*anchored*)? The scanner
//! always hands patterns the unconsumed remainder of its text, so position 0
//! is the scanner's current offset.
//!
//! Implementations are provided for:
//! - `&str` and `String` literals (SIMD search via `memchr::memmem`)
//! - `char`
//! - [`regex::Regex`]
//! - [`RegexPattern`], a regex paired with a `regex_automata` matcher that
//!   runs anchored searches, so anchored attempts fail fast

use memchr::memmem;
use regex::Regex;
use regex_automata::{Anchored, Input, meta};

use crate::error::PatternError;

/// Byte range of a match within the haystack passed to [`Pattern::find_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset where the match ends (exclusive).
    pub end: usize,
}

impl PatternMatch {
    /// Length of the matched text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Something that can be searched for in a string.
///
/// Returned ranges must lie on `char` boundaries of `haystack`. When
/// `anchored` is true, a returned match must start at `0`.
pub trait Pattern {
    /// Finds the leftmost match in `haystack`, or the match at position 0
    /// when `anchored`.
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch>;
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch> {
        (**self).find_in(haystack, anchored)
    }
}

impl Pattern for str {
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch> {
        let start = if anchored {
            haystack.starts_with(self).then_some(0)?
        } else {
            memmem::find(haystack.as_bytes(), self.as_bytes())?
        };
        Some(PatternMatch {
            start,
            end: start + self.len(),
        })
    }
}

impl Pattern for String {
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch> {
        self.as_str().find_in(haystack, anchored)
    }
}

impl Pattern for char {
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch> {
        let start = if anchored {
            haystack.starts_with(*self).then_some(0)?
        } else {
            haystack.find(*self)?
        };
        Some(PatternMatch {
            start,
            end: start + self.len_utf8(),
        })
    }
}

impl Pattern for Regex {
    /// Leftmost-first search; a match at position 0 is preferred over any
    /// other, so an anchored attempt only has to check where the leftmost
    /// match starts.
    ///
    /// A failed anchored attempt still searches the whole haystack, so
    /// repeated anchored scans over long text are quadratic. Use
    /// [`RegexPattern`] when scanning token by token.
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch> {
        let m = self.find(haystack)?;
        if anchored && m.start() != 0 {
            return None;
        }
        Some(PatternMatch {
            start: m.start(),
            end: m.end(),
        })
    }
}

/// A regex plus an automaton that can search it anchored.
///
/// Anchored attempts stop at the first byte that cannot start a match,
/// instead of searching the whole remainder. The caller's pattern text is
/// compiled as written in both cases.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    regex: Regex,
    automaton: meta::Regex,
}

impl RegexPattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] if `pattern` is not a valid
    /// regular expression, or [`PatternError::Automaton`] if the anchored
    /// matcher exceeds its size limits.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;
        let automaton = meta::Regex::new(pattern)?;
        Ok(Self { regex, automaton })
    }

    /// The pattern source as written by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Pattern for RegexPattern {
    fn find_in(&self, haystack: &str, anchored: bool) -> Option<PatternMatch> {
        let (start, end) = if anchored {
            let m = self
                .automaton
                .search(&Input::new(haystack).anchored(Anchored::Yes))?;
            (m.start(), m.end())
        } else {
            let m = self.regex.find(haystack)?;
            (m.start(), m.end())
        };
        Some(PatternMatch { start, end })
    }
}
