/// Errors raised while building or reading a [`NumberedLines`](crate::NumberedLines).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index and lines must have the same length (lines: {lines}, index: {index})")]
    LengthMismatch { lines: usize, index: usize },
    #[error("lines must be a string or a sequence of strings")]
    NotText,
    #[error("line position {position} out of range for {len} lines")]
    OutOfRange { position: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
