use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by the sorting routines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("memory allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("unsupported byte {byte:#04x} at position {position} of word {index}")]
    Format {
        index: usize,
        position: usize,
        byte: u8,
    },

    #[error("line {line}, column {column}: unsupported byte {byte:#04x}; expected one alphanumeric word per line")]
    Parse { line: usize, column: usize, byte: u8 },

    #[error("word {index} has width {found}, but {expected} was expected; normalize the words first")]
    Unnormalized {
        index: usize,
        expected: usize,
        found: usize,
    },
}
