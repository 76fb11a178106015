//! Scanner: a cursor over an immutable string plus the most recent match.
//!
//! What it does
//! - Borrows the full text up front and walks it with a byte `offset`.
//! - Matches caller supplied [`Pattern`]s against the remainder
//!   (`&text[offset..]`), either anchored at the offset or seeking forward.
//! - Records the consumed text of every successful match in `last_match`,
//!   whether or not the offset moved.
//!
//! Consumed text
//! - A match consumes everything from the offset *before* the attempt through
//!   the end of the match. For an anchored match that is exactly the matched
//!   text; for a seek match it also includes the skipped prefix, so
//!   `scan_until('4')` over `"xxx42"` consumes `"xxx4"`.
//!
//! Invariants
//! - `0 <= offset <= text.len()` and `offset` lies on a `char` boundary after
//!   every public call. Writes past the end clamp to the end; writes inside a
//!   multi-byte scalar round down to the scalar's start.
//! - Failed matches change nothing. Only [`Scanner::reset`] and
//!   [`Scanner::terminate`] clear `last_match`.
//! - No operation panics or errors on boundary input; out-of-range requests
//!   clamp or return `None`. A [`Pattern`] that reports a match off the
//!   offset (when anchored), past the end, or inside a scalar counts as no
//!   match.

use core::fmt;

use crate::{options::ScannerOptions, pattern::Pattern};

/// A cursor-based scanner over a borrowed string.
///
/// Typical loop:
/// ```rust
/// use stringscan::{RegexPattern, Scanner};
///
/// let word = RegexPattern::new(r"\w+").unwrap();
/// let mut scanner = Scanner::new("let x = 1;");
/// let mut words = Vec::new();
/// while scanner.skip_until(&word).is_some() {
///     words.push(scanner.last_match().unwrap().trim());
/// }
/// assert_eq!(words, ["let", "x", "= 1"]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    text: &'src str,
    offset: usize,
    last_match: Option<&'src str>,
    options: ScannerOptions,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `text`.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self::with_options(text, ScannerOptions::default())
    }

    /// Creates a scanner with explicit diagnostic options.
    #[must_use]
    pub fn with_options(text: &'src str, options: ScannerOptions) -> Self {
        Self {
            text,
            offset: 0,
            last_match: None,
            options,
        }
    }

    /// The full text being scanned.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// The current scan offset, in bytes.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the scan offset, keeping it within the text and on a `char`
    /// boundary. Returns the offset actually stored.
    ///
    /// Any position is accepted, so callers can rewind or fast-forward to
    /// positions they recorded earlier without checking bounds first.
    pub fn set_offset(&mut self, position: usize) -> usize {
        self.offset = self.floor_boundary(position);
        self.offset
    }

    /// The consumed text of the most recent successful match.
    #[inline]
    #[must_use]
    pub fn last_match(&self) -> Option<&'src str> {
        self.last_match
    }

    /// The unconsumed remainder of the text.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.text[self.offset..]
    }

    /// Matches `pattern` at the current offset. On success, advances past
    /// the match and returns it.
    pub fn scan<P: Pattern>(&mut self, pattern: P) -> Option<&'src str> {
        self.match_pattern(pattern, true, true)
    }

    /// Searches forward for `pattern`. On success, advances past the end of
    /// the match and returns everything from the old offset through it.
    pub fn scan_until<P: Pattern>(&mut self, pattern: P) -> Option<&'src str> {
        self.match_pattern(pattern, true, false)
    }

    /// Returns what [`scan`](Self::scan) would, without advancing. The
    /// last match is still recorded.
    pub fn check<P: Pattern>(&mut self, pattern: P) -> Option<&'src str> {
        self.match_pattern(pattern, false, true)
    }

    /// Returns what [`scan_until`](Self::scan_until) would, without
    /// advancing. The last match is still recorded.
    pub fn check_until<P: Pattern>(&mut self, pattern: P) -> Option<&'src str> {
        self.match_pattern(pattern, false, false)
    }

    /// Like [`scan`](Self::scan), but returns the number of bytes consumed.
    pub fn skip<P: Pattern>(&mut self, pattern: P) -> Option<usize> {
        self.scan(pattern).map(str::len)
    }

    /// Like [`scan_until`](Self::scan_until), but returns the number of bytes
    /// consumed.
    pub fn skip_until<P: Pattern>(&mut self, pattern: P) -> Option<usize> {
        self.scan_until(pattern).map(str::len)
    }

    /// Returns the `char` starting at absolute byte `index`, or `None` if the
    /// index is past the end or inside a multi-byte scalar.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.text.len() || !self.text.is_char_boundary(index) {
            return None;
        }
        self.text[index..].chars().next()
    }

    /// Whether the offset has reached the end of the text.
    #[inline]
    #[must_use]
    pub fn eos(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// Returns up to `len` bytes from the offset without advancing.
    ///
    /// The end is rounded up to the next `char` boundary so a scalar is never
    /// split, and clamped to the end of the text.
    #[must_use]
    pub fn peek(&self, len: usize) -> &'src str {
        let end = self.ceil_boundary(self.offset.saturating_add(len));
        &self.text[self.offset..end]
    }

    /// Returns what [`peek`](Self::peek) would and advances past it.
    pub fn take(&mut self, len: usize) -> &'src str {
        let taken = self.peek(len);
        self.offset += taken.len();
        taken
    }

    /// Rewinds to the start of the text and clears the last match.
    pub fn reset(&mut self) {
        self.last_match = None;
        self.offset = 0;
    }

    /// Moves to the end of the text and clears the last match.
    pub fn terminate(&mut self) {
        self.last_match = None;
        self.offset = self.text.len();
    }

    fn match_pattern<P: Pattern>(
        &mut self,
        pattern: P,
        advance: bool,
        anchored: bool,
    ) -> Option<&'src str> {
        let start = self.offset;
        let Some(found) = pattern.find_in(self.rest(), anchored) else {
            tracing::trace!(offset = start, anchored, advance, "no match");
            return None;
        };
        // A pattern that reports an unanchored or out-of-range match is
        // treated as not matching.
        let consumed = start
            .checked_add(found.end)
            .filter(|_| !anchored || found.start == 0)
            .filter(|_| found.start <= found.end)
            .and_then(|end| self.text.get(start..end));
        let Some(consumed) = consumed else {
            tracing::debug!(?found, anchored, "pattern broke its match contract");
            return None;
        };
        let end = start + consumed.len();
        self.last_match = Some(consumed);
        if advance {
            self.offset = end;
        }
        tracing::trace!(
            offset = start,
            end,
            anchored,
            advance,
            consumed,
            "matched"
        );
        Some(consumed)
    }

    fn floor_boundary(&self, position: usize) -> usize {
        let mut pos = position.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn ceil_boundary(&self, position: usize) -> usize {
        let mut pos = position.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

impl fmt::Display for Scanner<'_> {
    /// Renders `Scanner(<offset>/<len> "<snippet>")`, where the snippet is a
    /// short window of characters around the offset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ScannerOptions {
            snippet_width,
            snippet_lead,
        } = self.options;
        let total = self.text.chars().count();
        let at = self.text[..self.offset].chars().count();
        let first = at
            .saturating_sub(snippet_lead)
            .min(total.saturating_sub(snippet_width));
        let snippet: String = self.text.chars().skip(first).take(snippet_width).collect();
        write!(
            f,
            "Scanner({}/{} \"{}\")",
            self.offset,
            self.text.len(),
            snippet
        )
    }
}
