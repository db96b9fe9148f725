use std::fmt;
use std::io;

/// Everything that can go wrong downstream of raw word generation, which
/// itself never fails.
#[derive(Debug)]
pub enum TwisterError {
    /// Batch output was asked for a precision other than 'd', 'f' or 'i'.
    InvalidPrecision(char),
    /// The acceptance window rejected every word the generator offered.
    RangeUnsatisfiable { lower: u64, upper: u64, rejected: usize },
    /// Opening or appending to the output file failed.
    Io(io::Error),
}

impl fmt::Display for TwisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrecision(selector) => write!(
                f,
                "precision must be 'd' (double), 'f' (float) or 'i' (integer), got {selector:?}"
            ),
            Self::RangeUnsatisfiable { lower, upper, rejected } => write!(
                f,
                "no word landed inside [{lower}, {upper}] after {rejected} draws"
            ),
            Self::Io(err) => write!(f, "batch output failed: {err}"),
        }
    }
}

impl std::error::Error for TwisterError {}

impl From<io::Error> for TwisterError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, TwisterError>;
