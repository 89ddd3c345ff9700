//! Conversion error types.

use crate::link::ParseError;
use thiserror::Error;

/// Errors that can occur while converting a link.
///
/// Every variant is an expected outcome of user input and carries a message
/// suitable for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input was empty after trimming.
    #[error("Please enter a GitHub link")]
    EmptyInput,

    /// The input matched neither link shape.
    #[error("Invalid GitHub link format. Expected a repository file link or a GitHub Pages link.")]
    UnrecognizedFormat,

    /// Classification and parsing disagreed about the input.
    #[error("Internal error: {0}")]
    InternalParseMismatch(#[from] ParseError),
}
