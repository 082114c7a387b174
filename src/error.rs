//! Error types for BR Code generation.

use thiserror::Error;

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, BrCodeError>;

/// Errors that can occur while building or sealing a BR Code.
#[derive(Error, Debug)]
pub enum BrCodeError {
    /// Field id is not exactly two ASCII digits
    #[error("Invalid field id {0:?}: expected two ASCII digits")]
    InvalidFieldId(String),

    /// Field value cannot be represented with a two-digit length prefix
    #[error("Field {id} value is {len} characters long, maximum is 99")]
    FieldTooLong { id: String, len: usize },

    /// Required payment request field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Payload reached the checksum stage with a non-ASCII character
    #[error("Non-ASCII character {ch:?} at position {position} in payload")]
    NonAsciiPayload { position: usize, ch: char },

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid payment request record
    #[error("Invalid payment request at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: pix-brcode <requests.csv>")]
    MissingArgument,
}
