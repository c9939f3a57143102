use thiserror::Error;

/// Reasons a feature stays inert. None of these reach the user; the
/// front-end logs them and carries on with the rest of initialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("missing anchor: {0}")]
    MissingAnchor(&'static str),
    #[error("collaborator unavailable: {0}")]
    CollaboratorUnavailable(&'static str),
}

pub type FxResult<T> = Result<T, FxError>;

/// Turns an optional anchor lookup into a `MissingAnchor` error.
#[inline]
pub fn require<T>(node: Option<T>, what: &'static str) -> FxResult<T> {
    node.ok_or(FxError::MissingAnchor(what))
}
