//! a few tests of the NIST SP 800-22 statistical test suite
//!
//! each test returns a _p-value_: the probability that a perfect random
//! generator would have produced a sequence less random than the one tested.
//! a p-value below `0.01` is usually taken as a sign of non-randomness.
use tracing::{debug, info};

use crate::{
    error::BitSeqError,
    generate::BitSequence,
    source::Bit,
    special::{erfc, igamc},
};

/// size of the blocks in [`Nist::longest_sequence_in_block_test`]
pub const MAX_LENGTH_BLOCK: usize = 8;

/// theoretical probabilities of the longest run of ones in a block of
/// [`MAX_LENGTH_BLOCK`] bits being `<= 1`, `2`, `3` and `>= 4`
pub const PI: [f64; 4] = [0.2148, 0.3672, 0.2305, 0.1875];

/// the smallest sequence [`Nist::longest_sequence_in_block_test`] accepts
pub const MIN_LENGTH_LONGEST_RUN: usize = 128;

/// runs the tests on a borrowed sequence of bits
#[derive(Debug, Clone, Copy)]
pub struct Nist<'a> {
    sequence: &'a BitSequence,
}

impl<'a> Nist<'a> {
    pub fn new(sequence: &'a BitSequence) -> Self {
        Self { sequence }
    }

    fn check_length(&self, test: &'static str, expected: usize) -> Result<usize, BitSeqError> {
        let found = self.sequence.len();
        if found < expected {
            return Err(BitSeqError::SequenceTooShort {
                test,
                expected,
                found,
            });
        }
        Ok(found)
    }

    /// the frequency (monobit) test
    ///
    /// ones count as `+1` and zeros as `-1`, the normalized absolute sum is
    /// compared to a half-normal distribution.
    pub fn frequency_bitwise_test(&self) -> Result<f64, BitSeqError> {
        let n = self.check_length("frequency_bitwise_test", 1)?;

        let sum: i64 = self
            .sequence
            .bits()
            .map(|b| match b {
                Bit::One => 1,
                Bit::Zero => -1,
            })
            .sum();
        let s_obs = (sum.abs() as f64) / (n as f64).sqrt();
        debug!("frequency: sum = {}, s_obs = {}", sum, s_obs);

        Ok(erfc(s_obs / std::f64::consts::SQRT_2))
    }

    /// the runs test, on the number of uninterrupted runs of identical bits
    ///
    /// the p-value is `0` when the proportion of ones is too far from `1/2`
    /// for the test to be meaningful.
    pub fn consecutive_bits_test(&self) -> Result<f64, BitSeqError> {
        let n = self.check_length("consecutive_bits_test", 2)?;
        let n_f = n as f64;

        let pi = self.sequence.count_ones() as f64 / n_f;
        if (pi - 0.5).abs() >= 2.0 / n_f.sqrt() || pi == 0.0 || pi == 1.0 {
            debug!("runs: proportion of ones {} fails the frequency prerequisite", pi);
            return Ok(0.0);
        }

        let bytes = self.sequence.as_str().as_bytes();
        let v_obs = 1 + bytes.windows(2).filter(|w| w[0] != w[1]).count();
        debug!("runs: pi = {}, v_obs = {}", pi, v_obs);

        let expected = 2.0 * n_f * pi * (1.0 - pi);
        Ok(erfc(
            (v_obs as f64 - expected).abs() / (2.0 * (2.0 * n_f).sqrt() * pi * (1.0 - pi)),
        ))
    }

    /// the longest run of ones in a block test
    ///
    /// only full blocks of [`MAX_LENGTH_BLOCK`] bits are considered, the tail
    /// of the sequence is ignored.
    pub fn longest_sequence_in_block_test(&self) -> Result<f64, BitSeqError> {
        let n = self.check_length("longest_sequence_in_block_test", MIN_LENGTH_LONGEST_RUN)?;
        let nb_blocks = n / MAX_LENGTH_BLOCK;

        let mut v = [0usize; 4];
        for block in self.sequence.as_str().as_bytes().chunks_exact(MAX_LENGTH_BLOCK) {
            let (mut longest, mut current) = (0usize, 0usize);
            for &bit in block {
                current = if bit == b'1' { current + 1 } else { 0 };
                longest = longest.max(current);
            }
            v[longest.clamp(1, 4) - 1] += 1;
        }
        debug!("longest run: v = {:?} over {} blocks", v, nb_blocks);

        let nb_blocks = nb_blocks as f64;
        let chi_square: f64 = v
            .iter()
            .zip(PI.iter())
            .map(|(&v_i, &pi_i)| (v_i as f64 - nb_blocks * pi_i).powi(2) / (nb_blocks * pi_i))
            .sum();

        Ok(igamc(3.0 / 2.0, chi_square / 2.0))
    }

    /// runs all the tests
    ///
    /// a test that cannot run on this sequence does not prevent the others
    /// from running, its error is kept in the [`Report`].
    pub fn report(&self) -> Report {
        info!("running tests on {} bits", self.sequence.len());
        Report {
            frequency_bitwise: self.frequency_bitwise_test(),
            consecutive_bits: self.consecutive_bits_test(),
            longest_sequence_in_block: self.longest_sequence_in_block_test(),
        }
    }
}

/// the outcome of all the tests for a single sequence
#[derive(Debug)]
pub struct Report {
    pub frequency_bitwise: Result<f64, BitSeqError>,
    pub consecutive_bits: Result<f64, BitSeqError>,
    pub longest_sequence_in_block: Result<f64, BitSeqError>,
}

impl Report {
    fn outcomes(&self) -> [(&'static str, &Result<f64, BitSeqError>); 3] {
        [
            ("frequency_bitwise_test", &self.frequency_bitwise),
            ("consecutive_bits_test", &self.consecutive_bits),
            ("longest_sequence_in_block_test", &self.longest_sequence_in_block),
        ]
    }

    /// `true` if every test ran and no p-value is below `alpha`
    pub fn passes(&self, alpha: f64) -> bool {
        self.outcomes()
            .iter()
            .all(|(_, outcome)| matches!(outcome, Ok(p) if *p >= alpha))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, (name, outcome)) in self.outcomes().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match outcome {
                Ok(p) => write!(f, "{}: {}", name, p)?,
                Err(e) => write!(f, "{}: error: {}", name, e)?,
            }
        }

        Ok(())
    }
}
