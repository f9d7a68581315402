use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

const PROMPT: &str = "Enter a number of bits\n";

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bitseq"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("could not spawn the binary");

    // the binary may exit before reading its input
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());

    child.wait_with_output().unwrap()
}

/// the bits printed after the prompt
fn bits(output: &Output) -> String {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    stdout
        .strip_prefix(PROMPT)
        .unwrap_or_else(|| panic!("stdout should start with the prompt, found {:?}", stdout))
        .to_string()
}

fn is_binary(s: &str) -> bool {
    s.chars().all(|c| c == '0' || c == '1')
}

#[test]
fn five_bits() {
    let output = run(&[], "5\n");
    assert!(output.status.success());

    let bits = bits(&output);
    assert_eq!(bits.len(), 5, "found {:?}", bits);
    assert!(is_binary(&bits), "found {:?}", bits);
}

#[test]
fn zero_bits() {
    let output = run(&[], "0\n");
    assert!(output.status.success());
    assert_eq!(bits(&output), "");
}

#[test]
fn no_trailing_newline() {
    let output = run(&[], "128");
    let bits = bits(&output);
    assert_eq!(bits.len(), 128);
    assert!(!bits.ends_with('\n'));
}

#[test]
fn invalid_input() {
    for input in ["abc\n", "-3\n", ""] {
        let output = run(&[], input);
        assert_eq!(output.status.code(), Some(1), "TEST | input: {input:?}");
        assert_eq!(bits(&output), "", "TEST | input: {input:?}");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("invalid bit count"),
            "found {:?}\nTEST | input: {input:?}",
            stderr
        );
    }
}

#[test]
fn lenient_input() {
    for input in ["abc\n", "-3\n", ""] {
        let output = run(&["--lenient"], input);
        assert!(output.status.success(), "TEST | input: {input:?}");
        assert_eq!(bits(&output), "", "TEST | input: {input:?}");
    }
}

#[test]
fn bits_flag_skips_the_prompt() {
    for method in ["modulo", "scaled"] {
        let output = run(&["--bits", "64", "--method", method], "");
        assert!(output.status.success(), "TEST | method: {method}");

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.len(), 64, "TEST | method: {method}");
        assert!(is_binary(&stdout), "TEST | method: {method}");
    }
}

#[test]
fn unknown_method() {
    let output = run(&["--method", "xor"], "5\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
