//! Error-related types.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// A validation error.
///
/// This error is returned when a candidate is not a syntactically valid address.
#[derive(Clone, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
pub struct ValidationError {
    kind: ValidationErrorKind,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Validation failed: {}", self.kind)
    }
}

/// The reason why a candidate was rejected.
///
/// Offsets are byte offsets into the candidate.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    #[error("Must not be empty")]
    Empty,
    #[error("Invalid syntax at index {at}")]
    Invalid { at: usize },
    #[error("Unexpected trailing data at index {at}")]
    TrailingData { at: usize },
    #[error("Comments nested too deeply")]
    RecursionLimitExceeded,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}
