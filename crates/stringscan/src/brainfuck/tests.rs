use rstest::rstest;

use super::*;

const HELLO: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

#[test]
fn loop_reenters_until_cell_is_zero() {
    assert_eq!(run_to_vec("++[-].", b"").unwrap(), [0u8]);
}

#[test]
fn hello_world() {
    assert_eq!(run_to_vec(HELLO, b"").unwrap(), b"Hello World!\n");
}

#[test]
fn echoes_input_until_eof() {
    assert_eq!(run_to_vec(",[.,]", b"abc").unwrap(), b"abc");
}

#[rstest]
#[case::empty("")]
#[case::comment_only("just words")]
#[case::skipped_nested("[[+].]")]
fn programs_without_output(#[case] program: &str) {
    assert_eq!(run_to_vec(program, b"").unwrap(), b"");
}

#[test]
fn skipped_loop_ignores_nested_loops() {
    assert_eq!(run_to_vec("[[+].]+.", b"").unwrap(), [1u8]);
}

#[test]
fn unmatched_loop_end_reports_its_offset() {
    let err = run_to_vec("+-]", b"").unwrap_err();
    assert!(matches!(err, InterpretError::UnmatchedLoopEnd { offset: 2 }));
    assert_eq!(
        err.to_string(),
        "found loop end without loop start at offset 2"
    );
}

#[test]
fn open_loop_at_end_is_ignored() {
    assert_eq!(run_to_vec("+.[", b"").unwrap(), [1u8]);
}

#[test]
fn cells_and_pointer_wrap() {
    let mut interp = Interpreter::new(
        "<-",
        InterpreterOptions {
            tape_len: 4,
            ..Default::default()
        },
    );
    interp.run(&b""[..], Vec::new()).unwrap();
    assert_eq!(interp.pointer(), 3);
    assert_eq!(interp.tape(), [0u8, 0, 0, 255]);
}

#[test]
fn zero_length_tape_still_has_a_cell() {
    let mut interp = Interpreter::new(
        ">+",
        InterpreterOptions {
            tape_len: 0,
            ..Default::default()
        },
    );
    interp.run(&b""[..], Vec::new()).unwrap();
    assert_eq!(interp.tape(), [1u8]);
}

#[rstest]
#[case(EofBehavior::Zero, 0)]
#[case(EofBehavior::AllOnes, 255)]
#[case(EofBehavior::Unchanged, 1)]
fn eof_behavior(#[case] eof: EofBehavior, #[case] expected: u8) {
    let mut out = Vec::new();
    Interpreter::new(
        "+,.",
        InterpreterOptions {
            eof,
            ..Default::default()
        },
    )
    .run(&b""[..], &mut out)
    .unwrap();
    assert_eq!(out, [expected]);
}

#[test]
fn output_errors_propagate() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = Interpreter::new("+.", InterpreterOptions::default())
        .run(&b""[..], Broken)
        .unwrap_err();
    assert!(matches!(err, InterpretError::Io(_)));
}

#[test]
fn interpreter_can_run_twice() {
    let mut interp = Interpreter::new("+.", InterpreterOptions::default());
    let mut out = Vec::new();
    interp.run(&b""[..], &mut out).unwrap();
    interp.run(&b""[..], &mut out).unwrap();
    assert_eq!(out, [1u8, 2]);
}
