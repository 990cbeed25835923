use std::io;
use thiserror::Error;

/// Why a dotted field sequence is not an address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 4 octets, found {0}")]
    FieldCount(usize),

    #[error("octet {0:?} is not a decimal number")]
    NotANumber(String),

    #[error("octet {0:?} is greater than 255")]
    OutOfRange(String),
}

/// A failed run. The message already carries the cause, so `Display`
/// is the whole single-line diagnostic.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Read(io::Error),

    #[error("failed to write output: {0}")]
    Write(io::Error),

    #[error("line {line}: {cause}")]
    Line { line: usize, cause: ParseError },
}
