//! Errors that abort an encoding run.

use std::io;
use std::path::PathBuf;

use crate::escape::DecodeError;

/// Every failure is fatal; the variant names what was being done when it happened.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open input file '{}': {source}", path.display())]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("cannot determine size of input file '{}': {source}", path.display())]
    InputStat { path: PathBuf, source: io::Error },

    #[error("cannot create output file '{}': {source}", path.display())]
    OutputCreate { path: PathBuf, source: io::Error },

    #[error("failed writing output: {0}")]
    OutputWrite(#[from] io::Error),

    #[error("cannot open prefix file '{}': {source}", path.display())]
    PrefixFileOpen { path: PathBuf, source: io::Error },

    /// Reading the prefix file or writing the prefix to the output failed.
    #[error("failed copying prefix: {0}")]
    PrefixCopy(#[source] io::Error),

    #[error("error reading input: {0}")]
    StreamRead(#[source] io::Error),

    /// The input yielded a different number of bytes than its size promised.
    #[error("input size changed while reading: expected {declared} bytes, got {actual}")]
    LengthMismatch { declared: u64, actual: u64 },

    #[error("failed to unescape prefix text: {0}")]
    Unescape(#[from] DecodeError),

    #[error("unsupported dialect '{0}'")]
    UnsupportedDialect(String),
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, Error>;
