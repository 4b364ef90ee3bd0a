//! Error taxonomy for the statement pipeline. Every failure is fatal to the
//! run; callers add the file path via anyhow context at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatementError {
    /// The file could not be parsed as the expected tabular shape.
    #[error("unreadable file {path}: {reason}")]
    UnreadableFile { path: String, reason: String },

    /// An expected column is absent after cleaning — the export layout changed.
    #[error("missing column '{column}' ({format} layout)")]
    MissingColumn { column: String, format: String },

    /// A date cell did not match the format's date pattern.
    #[error("cannot parse date '{value}' in column '{column}' (expected {pattern})")]
    DateParse {
        column: String,
        value: String,
        pattern: String,
    },

    /// An amount cell still holds non-numeric residue after cleaning.
    #[error("cannot coerce '{value}' in column '{column}' to a number")]
    TypeCoercion { column: String, value: String },

    /// The output workbook could not be written.
    #[error("cannot write workbook {path}: {reason}")]
    Write { path: String, reason: String },
}

pub type StatementResult<T> = Result<T, StatementError>;
