//! Error types for ngshared-netlist.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What made a netlist line unacceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxIssue {
    /// The line starts with a character that is not a component letter.
    UnknownComponent(char),
    /// The dot-command is not one the engine recognizes.
    UnknownCommand(String),
}

impl fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxIssue::UnknownComponent(c) => write!(f, "unknown component '{}'", c),
            SyntaxIssue::UnknownCommand(cmd) => write!(f, "unknown command '{}'", cmd),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A line failed validation. `line` is 1-based and counts the title.
    #[error("unable to parse line {line}, {issue}: {text}")]
    Syntax {
        line: usize,
        text: String,
        issue: SyntaxIssue,
    },

    /// The input is not line-oriented text.
    #[error("unsupported netlist format: {0}")]
    UnsupportedFormat(String),

    /// A string that is neither an existing file nor a multi-line netlist.
    #[error("invalid netlist file or string: {0}")]
    InvalidSource(String),

    /// The netlist has no non-blank line, not even a title.
    #[error("netlist is empty")]
    Empty,

    #[error("failed to read netlist {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
