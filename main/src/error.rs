//! The error returned by every failed check.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a check failed.
///
/// The two variants keep apart mistakes in *calling* a check from the checked value being
/// wrong. Both carry the full human readable message, which always names the label of the
/// checked value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The check was invoked incorrectly, or something structurally required was absent.
    ///
    /// Examples are an empty label, a `None` passed where a value is required, or a message
    /// template that does not fit its arguments.
    #[error("{0}")]
    Usage(String),

    /// The checked value did not have the asserted property.
    #[error("{0}")]
    Violation(String),
}

impl Error {
    /// Creates a usage error and reports it.
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        let error = Error::Usage(message.into());
        error.report();
        error
    }

    /// Creates a violation and reports it.
    pub(crate) fn violation(message: impl Into<String>) -> Self {
        let error = Error::Violation(message.into());
        error.report();
        error
    }

    /// The message describing the failure.
    pub fn message(&self) -> &str {
        match self {
            Error::Usage(message) | Error::Violation(message) => message,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, Error::Violation(_))
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    fn kind(&self) -> &'static str {
        match self {
            Error::Usage(_) => "usage",
            Error::Violation(_) => "violation",
        }
    }

    fn report(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "assertions", kind = self.kind(), "{}", self.message());
    }
}
