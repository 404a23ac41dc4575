use std::path::PathBuf;

use thiserror::Error;

/// Why a day could not produce an answer from the text it was given
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle input is empty")]
    Empty,

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("missing {0}")]
    Missing(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("no solution: {0}")]
    NoSolution(String),
}

impl PuzzleError {
    /// `index` is the zero-based line index; messages show it one-based
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        PuzzleError::Malformed {
            line: index + 1,
            reason: reason.into(),
        }
    }
}

/// Failure to turn a form submission into puzzle text
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no puzzle input: paste some text or pick a sample file")]
    NoneGiven,

    #[error("invalid sample file name: {0:?}")]
    InvalidName(String),

    #[error("sample file not found: {0}")]
    NotFound(String),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
