//! generate sequences of pseudo-random bits
use std::io::Write;

use tracing::debug;

use crate::{
    error::BitSeqError,
    source::{Bit, BitSource},
};

/// an ordered sequence of binary digits, stored as the text `'0'` and `'1'`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitSequence(String);

impl BitSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.bytes().map(|b| if b == b'1' { Bit::One } else { Bit::Zero })
    }

    pub fn count_ones(&self) -> usize {
        self.0.bytes().filter(|&b| b == b'1').count()
    }
}

impl std::str::FromStr for BitSequence {
    type Err = BitSeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = s
            .chars()
            .enumerate()
            .find(|(_, c)| Bit::from_char(*c).is_none());
        if let Some((index, found)) = invalid {
            return Err(BitSeqError::InvalidBit { index, found });
        }
        Ok(Self(s.to_string()))
    }
}

impl FromIterator<Bit> for BitSequence {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self(iter.into_iter().map(Bit::as_char).collect())
    }
}

impl std::fmt::Display for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// draws `n` bits from `source` and keeps them in memory
pub fn generate(n: usize, source: &mut impl BitSource) -> BitSequence {
    debug!("generating {} bits", n);
    (0..n).map(|_| source.next_bit()).collect()
}

/// draws `n` bits from `source` and writes them to `writer`, one write per bit
///
/// nothing separates the bits and no newline is written at the end. the writer
/// is flushed before returning the number of bits written.
pub fn write_bits(
    n: usize,
    source: &mut impl BitSource,
    writer: &mut impl Write,
) -> Result<usize, BitSeqError> {
    debug!("writing {} bits", n);
    for _ in 0..n {
        write!(writer, "{}", source.next_bit())?;
    }
    writer.flush()?;

    Ok(n)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{generate, write_bits, BitSequence};
    use crate::{
        error::BitSeqError,
        source::{Bit, FixedSource, Method},
    };

    fn write_template(n: usize, method: Method) {
        let test_case = format!("TEST | n: {}, method: {}", n, method);

        let mut source = method.with_rng(StdRng::seed_from_u64(n as u64));
        let mut out: Vec<u8> = vec![];
        let written = write_bits(n, &mut source, &mut out)
            .unwrap_or_else(|e| panic!("could not write bits: {e}\n{test_case}"));

        assert_eq!(written, n, "{test_case}");
        assert_eq!(out.len(), n, "output should be exactly {n} bytes\n{test_case}");
        assert!(
            out.iter().all(|&b| b == b'0' || b == b'1'),
            "output should only contain binary digits, found {:?}\n{test_case}",
            String::from_utf8_lossy(&out),
        );
    }

    #[test]
    fn write() {
        for method in [Method::Modulo, Method::Scaled] {
            for n in [0, 1, 5, 128, 1_000] {
                write_template(n, method);
            }
        }
    }

    #[test]
    fn zero_bits_is_empty() {
        let mut out: Vec<u8> = vec![];
        write_bits(0, &mut FixedSource::constant(Bit::One), &mut out).unwrap();
        assert!(out.is_empty());

        assert!(generate(0, &mut FixedSource::constant(Bit::One)).is_empty());
    }

    #[test]
    fn deterministic_source() {
        let mut source = FixedSource::new(vec![Bit::One, Bit::Zero]);
        let mut out: Vec<u8> = vec![];
        write_bits(5, &mut source, &mut out).unwrap();
        assert_eq!(out, b"10101");
    }

    #[test]
    fn generate_matches_write() {
        let mut a = Method::Modulo.with_rng(StdRng::seed_from_u64(99));
        let mut b = Method::Modulo.with_rng(StdRng::seed_from_u64(99));

        let sequence = generate(256, &mut a);
        let mut out: Vec<u8> = vec![];
        write_bits(256, &mut b, &mut out).unwrap();

        assert_eq!(sequence.as_str().as_bytes(), &out[..]);
        assert_eq!(sequence.len(), 256);
    }

    #[test]
    fn parse() {
        let sequence: BitSequence = "0110".parse().unwrap();
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.count_ones(), 2);
        assert_eq!(
            sequence.bits().collect::<Vec<_>>(),
            vec![Bit::Zero, Bit::One, Bit::One, Bit::Zero]
        );
        assert_eq!(sequence.to_string(), "0110");

        assert!("".parse::<BitSequence>().unwrap().is_empty());

        match "01a1".parse::<BitSequence>() {
            Err(BitSeqError::InvalidBit { index, found }) => {
                assert_eq!(index, 2);
                assert_eq!(found, 'a');
            }
            other => panic!("expected an invalid bit, found {:?}", other),
        }
    }
}
