//! Error types for k-mer statistics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// `k` is outside `1..=len` for a sequence of length `len`.
    #[error("invalid argument: k = {k} must satisfy 1 <= k <= {len} (sequence length)")]
    InvalidArgument { k: usize, len: usize },

    /// Linguistic complexity was requested for a sequence without symbols.
    #[error("linguistic complexity is undefined for an empty sequence")]
    EmptySequence,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed FASTA/FASTQ input.
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
