#![no_main]

use std::sync::LazyLock;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringscan::{Pattern, RegexPattern, Scanner};

/// Pattern shapes kept small so regex compilation stays cheap.
#[derive(Arbitrary, Debug)]
enum Needle {
    Literal(String),
    Char(char),
    Regex(u8),
}

const REGEXES: &[&str] = &[r"\d+", r"\w*", r"\s+", "a|b", r"[^;]*", "$", ".", "é+"];

static PATTERNS: LazyLock<Vec<RegexPattern>> = LazyLock::new(|| {
    REGEXES
        .iter()
        .map(|p| RegexPattern::new(p).expect("static pattern"))
        .collect()
});

#[derive(Arbitrary, Debug)]
enum Op {
    Scan(Needle),
    ScanUntil(Needle),
    Check(Needle),
    CheckUntil(Needle),
    Skip(Needle),
    SkipUntil(Needle),
    Peek(u8),
    Take(u8),
    SetOffset(usize),
    CharAt(usize),
    Reset,
    Terminate,
}

#[derive(Arbitrary, Debug)]
struct Session {
    text: String,
    ops: Vec<Op>,
}

fuzz_target!(|session: Session| {
    let regexes = &*PATTERNS;
    let text = session.text.as_str();
    let mut s = Scanner::new(text);

    for op in &session.ops {
        let before = s.offset();
        let last = s.last_match();
        let consumed = match op {
            Op::Scan(n) => with_needle(n, regexes, |p| s.scan(p)),
            Op::ScanUntil(n) => with_needle(n, regexes, |p| s.scan_until(p)),
            Op::Check(n) => with_needle(n, regexes, |p| s.check(p)),
            Op::CheckUntil(n) => with_needle(n, regexes, |p| s.check_until(p)),
            Op::Skip(n) => {
                let len = with_needle(n, regexes, |p| s.skip(p));
                assert_eq!(len.map(|l| before + l), len.map(|_| s.offset()));
                None
            }
            Op::SkipUntil(n) => {
                let len = with_needle(n, regexes, |p| s.skip_until(p));
                assert_eq!(len.map(|l| before + l), len.map(|_| s.offset()));
                None
            }
            Op::Peek(n) => {
                let peeked = s.peek(usize::from(*n));
                assert_eq!(s.offset(), before);
                assert!(text[before..].starts_with(peeked));
                None
            }
            Op::Take(n) => {
                let peeked = s.peek(usize::from(*n));
                assert_eq!(s.take(usize::from(*n)), peeked);
                assert_eq!(s.offset(), before + peeked.len());
                None
            }
            Op::SetOffset(o) => {
                let stored = s.set_offset(*o);
                assert!(stored <= (*o).min(text.len()));
                None
            }
            Op::CharAt(i) => {
                if let Some(c) = s.char_at(*i) {
                    assert!(text[*i..].starts_with(c));
                }
                None
            }
            Op::Reset => {
                s.reset();
                assert_eq!((s.offset(), s.last_match()), (0, None));
                None
            }
            Op::Terminate => {
                s.terminate();
                assert!(s.eos());
                None
            }
        };

        match consumed {
            Some(c) => {
                assert_eq!(s.last_match(), Some(c));
                assert!(text[before..].starts_with(c));
            }
            None if matches!(op, Op::Scan(_) | Op::ScanUntil(_) | Op::Check(_) | Op::CheckUntil(_)) => {
                assert_eq!(s.offset(), before);
                assert_eq!(s.last_match(), last);
            }
            None => {}
        }

        assert!(s.offset() <= text.len());
        assert!(text.is_char_boundary(s.offset()));
        assert_eq!(s.rest(), &text[s.offset()..]);
        let _ = s.to_string();
    }
});

fn with_needle<T>(
    needle: &Needle,
    regexes: &[RegexPattern],
    mut f: impl FnMut(&dyn Pattern) -> Option<T>,
) -> Option<T> {
    match needle {
        Needle::Literal(lit) => f(lit),
        Needle::Char(c) => f(c),
        Needle::Regex(i) => f(&regexes[usize::from(*i) % regexes.len()]),
    }
}
