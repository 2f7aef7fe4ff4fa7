//! Error taxonomy for API collaborator operations.

use thiserror::Error;

/// Errors an [`super::ApiService`] operation can fail with.
///
/// No variant is fatal to a controller: every failure is converted into a
/// typed output value and state stays at the last-known-good snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure. Transient: the user may retry by
    /// re-invoking the same intent.
    #[error("network error: {reason}")]
    Network { reason: String },

    /// The server rejected the operation (e.g. a publish refused
    /// server-side). Terminal for the attempt; no retry is suggested.
    #[error("rejected by server: {message}")]
    DomainRejected { message: String },

    /// Malformed payload. Treated as a network error for UI purposes,
    /// logged for diagnostics.
    #[error("could not decode response: {reason}")]
    Decode { reason: String },
}

impl ApiError {
    /// Whether re-invoking the failed intent is a sensible user action.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network { .. } | ApiError::Decode { .. } => true,
            ApiError::DomainRejected { .. } => false,
        }
    }

    /// Short tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network",
            ApiError::DomainRejected { .. } => "domain_rejected",
            ApiError::Decode { .. } => "decode",
        }
    }
}
