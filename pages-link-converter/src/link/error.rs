//! Link parsing error types.

use super::LinkKind;
use thiserror::Error;

/// Errors that can occur while extracting fields from a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not have the shape of the requested kind.
    #[error("'{input}' is not a {} link", .kind.label())]
    PatternMismatch { kind: LinkKind, input: String },
}
