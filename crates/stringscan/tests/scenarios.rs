#![allow(missing_docs)]

use regex::Regex;
use stringscan::{RegexPattern, Scanner};

#[test]
fn anchored_digits_after_take() {
    let digits = RegexPattern::new(r"\d+").unwrap();
    let mut scanner = Scanner::new("ab12cd");

    assert_eq!(scanner.scan(&digits), None);
    assert_eq!(scanner.offset(), 0);

    assert_eq!(scanner.take(2), "ab");
    assert_eq!(scanner.scan(&digits), Some("12"));
    assert_eq!(scanner.offset(), 4);
    assert_eq!(scanner.last_match(), Some("12"));
}

#[test]
fn seek_through_first_match() {
    let four = Regex::new("4").unwrap();
    let mut scanner = Scanner::new("xxx42yyy");

    assert_eq!(scanner.scan_until(&four), Some("xxx4"));
    assert_eq!(scanner.offset(), 4);
}

#[test]
fn tokenize_key_value_pairs() {
    let key = RegexPattern::new(r"[a-z]+").unwrap();
    let value = RegexPattern::new(r"[^;]*").unwrap();
    let mut scanner = Scanner::new("a=1;bc=two;d=");
    let mut pairs = Vec::new();

    while !scanner.eos() {
        let k = scanner.scan(&key).expect("key");
        scanner.scan('=').expect("equals");
        let v = scanner.scan(&value).expect("value");
        pairs.push((k, v));
        scanner.skip(';');
    }

    assert_eq!(pairs, [("a", "1"), ("bc", "two"), ("d", "")]);
}

#[test]
fn independent_scanners_share_text() {
    let text = String::from("one two");
    let mut first = Scanner::new(&text);
    let mut second = first.clone();

    first.scan_until(' ');
    assert_eq!(first.rest(), "two");
    assert_eq!(second.rest(), "one two");
    assert_eq!(second.scan("one"), Some("one"));
    assert_eq!(first.offset(), 4);
}

#[test]
fn offset_rewind_replays_text() {
    let mut scanner = Scanner::new("[ab]");
    let mut seen = String::new();
    let mut rewound = false;
    loop {
        let token = scanner.take(1);
        seen.push_str(token);
        if token == "]" && !rewound {
            rewound = true;
            scanner.set_offset(0);
        }
        if scanner.eos() {
            break;
        }
    }
    assert_eq!(seen, "[ab][ab]");
}

#[cfg(feature = "brainfuck")]
#[test]
fn interpreter_emits_one_byte_after_loop() {
    let out = stringscan::brainfuck::run_to_vec("++[-].", b"").unwrap();
    assert_eq!(out, [0u8]);
}
