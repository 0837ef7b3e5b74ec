//! Unified error types for the snapshot publisher.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the snapshot publisher.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid process configuration. Fatal before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Upstream returned a non-2xx status.
    #[error("upstream returned {status} for {path}: {body}")]
    Http {
        status: u16,
        path: String,
        body: String,
    },

    /// Network-level failure (connect error, timeout, broken body).
    #[error("transport error for {path}: {message}")]
    Transport { path: String, message: String },

    /// Snapshot upsert to the document store failed.
    #[error("publish failed with {status}: {body}")]
    Publish { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn http(status: u16, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            path: path.into(),
            body: body.into(),
        }
    }

    pub fn transport(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn publish(status: u16, body: impl Into<String>) -> Self {
        Self::Publish {
            status,
            body: body.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
