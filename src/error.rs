//! bitseq-specific errors
//!
//! There is one input error, one error for malformed sequences and one for the
//! statistical tests in [crate::nist].
use thiserror::Error;

/// An error that bitseq could end up producing.
///
/// There are a few families of errors in bitseq:
/// - related to _reading the bit count_ from the user
/// - related to _parsing a sequence_ of bits from text
/// - related to running the statistical tests
#[derive(Debug, Error)]
pub enum BitSeqError {
    /// `{0}` is the offending input, as given by the user.
    #[error("invalid bit count: expected a non-negative integer, found {0:?}")]
    InvalidBitCount(String),
    #[error("expected a binary digit at index {index}, found {found:?}")]
    InvalidBit { index: usize, found: char },
    #[error("{test} needs at least {expected} bits, found {found}")]
    SequenceTooShort {
        test: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
