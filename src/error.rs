//! Error surface shared by every operation.

use std::fmt;

use reqwest::StatusCode;

/// Broad classification of a failed call.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Programmer misuse caught client-side: malformed panel address,
    /// caller parameters colliding with the reserved signing fields.
    Validation,
    /// The request never completed: DNS, connect, TLS or timeout failure.
    Transport,
    /// The panel answered with an HTTP status of 400 or above.
    Status,
    /// The response body did not parse into the operation's result shape.
    Decode,
}

impl Kind {
    const fn as_str(self) -> &'static str {
        match self {
            Kind::Validation => "validation",
            Kind::Transport => "transport",
            Kind::Status => "status",
            Kind::Decode => "decode",
        }
    }
}

/// Error type returned by all client operations.
///
/// Inspect [`Error::kind`] to branch on the failure class; the source chain
/// keeps the underlying transport or parser error when one exists.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Validation,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self {
            kind: Kind::Transport,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    pub(crate) fn status(status: StatusCode) -> Self {
        // `StatusCode` displays as "500 Internal Server Error".
        Self {
            kind: Kind::Status,
            message: status.to_string(),
            source: None,
        }
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self {
            kind: Kind::Decode,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// The failure class of this error.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}
