//! acquire the number of bits to generate from the user
use std::{
    io::{BufRead, Write},
    num::IntErrorKind,
};

use tracing::{debug, warn};

use crate::error::BitSeqError;

/// the line shown to the user before reading the bit count
pub const PROMPT: &str = "Enter a number of bits";

/// what to do with input that is not a non-negative integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// reject it with [`BitSeqError::InvalidBitCount`]
    #[default]
    Strict,
    /// read it the way `>>` reads an integer from a stream
    ///
    /// the leading integer of the token is kept and the rest is ignored, so
    /// `12abc` is `12` and `3.5` is `3`. a negative count or a token that does
    /// not start with an integer is `0`, i.e. nothing is generated. counts that
    /// are too large to be represented are still rejected.
    Lenient,
}

/// writes [`PROMPT`] on its own line
pub fn prompt(writer: &mut impl Write) -> Result<(), BitSeqError> {
    writeln!(writer, "{}", PROMPT)?;
    writer.flush()?;
    Ok(())
}

/// the longest prefix of `token` made of an optional sign and decimal digits,
/// empty if there are no digits
fn leading_integer(token: &str) -> &str {
    let sign = usize::from(token.starts_with('+') || token.starts_with('-'));
    let digits = token[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        ""
    } else {
        &token[..sign + digits]
    }
}

/// parses a single token into a bit count
pub fn parse_bit_count(token: &str, policy: Policy) -> Result<usize, BitSeqError> {
    let token = token.trim();
    let integer = match policy {
        Policy::Strict => token,
        Policy::Lenient => leading_integer(token),
    };

    match integer.parse::<usize>() {
        Ok(n) => {
            if integer.len() < token.len() {
                warn!("ignoring {:?} after the bit count", &token[integer.len()..]);
            }
            Ok(n)
        }
        Err(e) if policy == Policy::Lenient && *e.kind() != IntErrorKind::PosOverflow => {
            warn!("could not read a bit count from {:?}, generating no bits", token);
            Ok(0)
        }
        Err(_) => Err(BitSeqError::InvalidBitCount(token.to_string())),
    }
}

/// reads the first whitespace-delimited token of `reader` and parses it as a
/// bit count
///
/// leading blank lines are skipped. the rest of the input is left untouched.
pub fn read_bit_count(reader: &mut impl BufRead, policy: Policy) -> Result<usize, BitSeqError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            debug!("reached end of input without a bit count");
            return parse_bit_count("", policy);
        }
        if let Some(token) = line.split_whitespace().next() {
            debug!("read bit count token {:?}", token);
            return parse_bit_count(token, policy);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{parse_bit_count, prompt, read_bit_count, Policy, PROMPT};
    use crate::error::BitSeqError;

    fn read(input: &str, policy: Policy) -> Result<usize, BitSeqError> {
        read_bit_count(&mut Cursor::new(input.as_bytes()), policy)
    }

    #[test]
    fn valid() {
        for policy in [Policy::Strict, Policy::Lenient] {
            assert_eq!(read("5", policy).unwrap(), 5);
            assert_eq!(read("0\n", policy).unwrap(), 0);
            assert_eq!(read("  128  \n", policy).unwrap(), 128);
            assert_eq!(read("\n\n   \n42 13\n", policy).unwrap(), 42);
            assert_eq!(read("+7", policy).unwrap(), 7);
        }
    }

    fn invalid_template(input: &str) {
        match read(input, Policy::Strict) {
            Err(BitSeqError::InvalidBitCount(_)) => {}
            other => panic!("expected an invalid bit count, found {:?}\nTEST | input: {input:?}", other),
        }
    }

    #[test]
    fn strict() {
        invalid_template("");
        invalid_template("\n  \n");
        invalid_template("abc");
        invalid_template("12abc");
        invalid_template("-1");
        invalid_template("-340282366920938463463374607431768211456");
        invalid_template("3.5");
        invalid_template("99999999999999999999999999999999");
    }

    #[test]
    fn lenient() {
        assert_eq!(read("", Policy::Lenient).unwrap(), 0);
        assert_eq!(read("abc", Policy::Lenient).unwrap(), 0);
        assert_eq!(read("-1", Policy::Lenient).unwrap(), 0);
        assert_eq!(read("-340282366920938463463374607431768211456", Policy::Lenient).unwrap(), 0);
        assert_eq!(read("-5abc", Policy::Lenient).unwrap(), 0);
        assert_eq!(read("-", Policy::Lenient).unwrap(), 0);
        assert_eq!(read("+", Policy::Lenient).unwrap(), 0);

        assert!(matches!(
            read("99999999999999999999999999999999", Policy::Lenient),
            Err(BitSeqError::InvalidBitCount(_))
        ));
    }

    #[test]
    fn lenient_keeps_the_leading_integer() {
        assert_eq!(read("12abc", Policy::Lenient).unwrap(), 12);
        assert_eq!(read("3.5", Policy::Lenient).unwrap(), 3);
        assert_eq!(read("+8bits", Policy::Lenient).unwrap(), 8);
        assert_eq!(read("007x", Policy::Lenient).unwrap(), 7);
        assert!(matches!(
            read("99999999999999999999999999999999abc", Policy::Lenient),
            Err(BitSeqError::InvalidBitCount(_))
        ));
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_bit_count("xyz", Policy::Strict).unwrap_err();
        assert!(err.to_string().contains("\"xyz\""), "found: {err}");
    }

    #[test]
    fn prompt_is_a_single_line() {
        let mut out: Vec<u8> = vec![];
        prompt(&mut out).unwrap();
        assert_eq!(out, format!("{PROMPT}\n").into_bytes());
    }
}
