//! Error types for ngshared-core.

use thiserror::Error;

use crate::sweep::SweepError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// One or more required analysis fields were left empty.
    #[error("arguments missing: {}", .fields.join(" "))]
    MissingArguments { fields: Vec<&'static str> },

    /// A named argument does not belong to the analysis schema.
    #[error("unknown field '{field}' for {analysis} analysis")]
    UnknownField {
        analysis: &'static str,
        field: String,
    },

    /// Second DC sweep values were given without a second source.
    #[error("second source not specified")]
    SecondSource,

    #[error("invalid ngspice number: {0}")]
    InvalidNumber(String),

    #[error("wrong sweep values: {0}")]
    SweepDirection(#[from] SweepError),

    #[error("unknown AC variation '{0}', expected dec, oct or lin")]
    UnknownVariation(String),

    #[error("unknown analysis: {0}")]
    UnknownAnalysis(String),
}

pub type Result<T> = std::result::Result<T, Error>;
