//! Conversion entry point used by front ends.

mod error;
mod outcome;

pub use error::ConversionError;
pub use outcome::Conversion;

use crate::link::{classify, parse, LinkKind};
use crate::render::{render, DEFAULT_BRANCH};
use tracing::debug;

/// Converts a repository file link into a Pages link, or the other way round.
///
/// Surrounding whitespace is ignored. The direction is picked from the shape
/// of the input. A Pages link is converted using the `main` branch, see
/// [`DEFAULT_BRANCH`].
///
/// # Errors
///
/// Returns [`ConversionError::EmptyInput`] for blank input and
/// [`ConversionError::UnrecognizedFormat`] if the input is not a supported link.
pub fn convert(raw_input: &str) -> Result<Conversion, ConversionError> {
    let input = raw_input.trim();
    if input.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let source = classify(input).ok_or(ConversionError::UnrecognizedFormat)?;
    let link = parse(input, source)?;
    let target = source.opposite();
    let output = render(&link, target);

    let assumed_branch = match (target, &link.branch) {
        (LinkKind::Repository, None) => Some(DEFAULT_BRANCH.to_string()),
        _ => None,
    };

    debug!(input, output = %output, source = %source, target = %target, "Converted link");

    Ok(Conversion {
        input: input.to_string(),
        output,
        source,
        target,
        message: success_message(target),
        assumed_branch,
    })
}

/// Returns the status message shown after converting into `target`.
fn success_message(target: LinkKind) -> String {
    format!("Converted to {} link", target.label())
}
