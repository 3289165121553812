//! # Client Error Taxonomy
//!
//! Every public operation resolves to a result type or rejects with a
//! [`ClientError`] carrying a numeric status code and a message, regardless of
//! whether the failure was local (argument validation, signing) or remote
//! (a decoded transport status).

use crate::domain::status::StatusCode;
use thiserror::Error;

/// A failure while loading a key, signing a payload, or verifying a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The private key could not be parsed or is otherwise unusable.
    #[error("the key could not be loaded: {0}")]
    UnloadableKey(String),

    /// The signing primitive rejected the input.
    #[error("failed to sign the data: {0}")]
    Failed(String),

    /// The verification primitive rejected the input.
    #[error("failed to verify the signature: {0}")]
    Verification(String),
}

/// Error surfaced by every public SDK operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The caller supplied malformed or out-of-range parameters. Raised
    /// locally, before any transport call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Key loading or the signing primitive failed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// A remote operation was rejected with a server-declared status, or an
    /// integrity fault was detected locally.
    #[error("{message} (status code {code})")]
    Status { code: StatusCode, message: String },
}

impl ClientError {
    /// Shorthand for a status-coded error.
    pub fn status(code: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// The numeric status code carried by this error.
    pub fn code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::InvalidRequest,
            Self::Signing(SigningError::UnloadableKey(_)) => StatusCode::UnloadableKey,
            Self::Signing(_) => StatusCode::RuntimeError,
            Self::Status { code, .. } => *code,
        }
    }
}
