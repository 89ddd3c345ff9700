//! Successful conversion results.

use crate::link::LinkKind;
use serde::Serialize;

/// The result of converting one link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The trimmed input link.
    pub input: String,

    /// The rewritten link.
    pub output: String,

    /// Shape of the input link.
    pub source: LinkKind,

    /// Shape of the output link.
    pub target: LinkKind,

    /// Status message describing the conversion.
    pub message: String,

    /// Branch that had to be assumed because the input did not encode one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assumed_branch: Option<String>,
}
