use thiserror::Error;

use crate::http_client::HttpError;

/// Why a metric path failed to reach a terminal value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// `depth` is the zero-based index of the segment that had no matching key.
    #[error("no key '{segment}' at segment {depth}")]
    MissingSegment { segment: String, depth: usize },
    #[error("path ends on an object")]
    EndedOnObject,
}

/// Errors produced while resolving a metric path.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("not found: {reason}")]
    NotFound { path: String, reason: NotFoundReason },
}

impl ResolveError {
    pub(crate) fn not_found(path: &str, reason: NotFoundReason) -> Self {
        Self::NotFound {
            path: path.to_owned(),
            reason,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Top-level error type for agent operations.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("unexpected status code: {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl AgentError {
    /// Status code reported by the agent, when a response was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } | Self::Http(HttpError::Body { status, .. }) => Some(*status),
            Self::Http(_) | Self::Resolve(_) => None,
        }
    }
}
