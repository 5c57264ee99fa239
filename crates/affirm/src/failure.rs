//! Failure values produced by the checkers.
//!
//! There are two tiers:
//!
//! - [`AssertionFailure`]: the subject under test is wrong. Recorded through a
//!   [`Reporter`](crate::Reporter) and halts only the current test.
//! - [`UsageError`]: the test itself is malformed. Never recorded as an
//!   assertion failure; the check aborts with [`USAGE_ERROR_PREFIX`].

use std::fmt;

use thiserror::Error;

use crate::CallSite;

/// Prefix of every panic message raised for a [`UsageError`].
pub const USAGE_ERROR_PREFIX: &str = "affirm usage error: ";

/// Which check rejected the values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Values compared unequal.
    NotEqual,
    /// Sequences of different length passed to a closeness check.
    LengthMismatch,
    /// Maximum deviation was larger than the tolerance.
    ToleranceExceeded,
    /// An error was present where success was asserted.
    UnexpectedError,
    /// No error was present where failure was asserted.
    MissingError,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::NotEqual => "not equal",
            FailureKind::LengthMismatch => "length mismatch",
            FailureKind::ToleranceExceeded => "tolerance exceeded",
            FailureKind::UnexpectedError => "unexpected error",
            FailureKind::MissingError => "missing error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed assertion: what went wrong and where it was asserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionFailure {
    kind: FailureKind,
    message: String,
    location: Option<CallSite>,
}

impl AssertionFailure {
    /// Create a failure without location context.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        AssertionFailure {
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Attach the call site of the failing assertion.
    #[must_use]
    pub fn at(mut self, location: CallSite) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn location(&self) -> Option<CallSite> {
        self.location
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(site) => write!(f, "{site}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for AssertionFailure {}

/// A check was called with arguments no test subject could satisfy.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UsageError {
    /// Tolerance was negative or NaN.
    #[error("tolerance must be a non-negative number, got {epsilon}")]
    InvalidTolerance { epsilon: f64 },
}

#[cfg(test)]
mod tests;
