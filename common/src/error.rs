use thiserror::Error;

/// The field definition source could not be read as XML.
///
/// No partial catalog exists when this is returned; the caller keeps whatever
/// catalog it had before.
#[derive(Debug, Error)]
#[error("field source is not well-formed XML: {0}")]
pub struct ParseError(#[from] roxmltree::Error);

/// Errors reading a field-code package back out of markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("markup is not well-formed: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("markup has no complete field code (begin, separate, end)")]
    IncompleteFieldCode,
}

/// A textual value did not name any variant of an enum.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{found}' (expected {expected})")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub expected: &'static str,
    pub found: String,
}
