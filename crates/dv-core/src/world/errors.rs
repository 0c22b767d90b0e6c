//! Errors of the ambient (non-spell) operations

use thiserror::Error;

/// Options parsing error
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("could not read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },

    #[error("missing value for option '{0}'")]
    MissingValue(String),
}
