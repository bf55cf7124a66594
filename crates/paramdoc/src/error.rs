//! Errors returned by the annotation parser.

use thiserror::Error;

/// Failure to parse a parameter sample annotation.
///
/// Parsing is all-or-nothing: the caller receives either a complete
/// descriptor or this error, and owns any user-facing reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The annotation does not conform to the parameter sample grammar, so no
    /// field name could be extracted.
    #[error("annotation does not conform to the parameter sample grammar: {annotation:?}")]
    GrammarMismatch {
        /// The annotation text as supplied by the caller.
        annotation: String,
    },
}

/// A sample variant name that is neither `param`/`parameter` nor `header`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sample variant '{0}', expected one of: param, parameter, header")]
pub struct UnknownVariant(pub String);

impl ParseError {
    pub(crate) fn mismatch(annotation: &str) -> Self {
        Self::GrammarMismatch {
            annotation: annotation.to_string(),
        }
    }
}
