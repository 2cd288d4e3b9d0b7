//! Error types for server configuration and URL derivation.

use thiserror::Error;

/// Errors produced while configuring a [`ThumborServer`] or deriving
/// secure URLs from it.
///
/// Configuration errors surface from [`ThumborServer::new`]; the only
/// per-call error is [`ProtocolMismatch`](ThumborError::ProtocolMismatch),
/// raised when a source image URL declares a protocol other than the one
/// the sanitizer expects.
///
/// [`ThumborServer`]: crate::ThumborServer
/// [`ThumborServer::new`]: crate::ThumborServer::new
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThumborError {
    /// The server URL passed at construction was empty.
    #[error("server URL may not be empty")]
    EmptyServerUrl,

    /// The secure key passed at construction was empty.
    #[error("secure key may not be empty")]
    EmptySecureKey,

    /// A URL declared a protocol other than the required one.
    #[error("invalid URL: uses protocol {found}, but {expected} required")]
    ProtocolMismatch {
        /// Protocol prefix found on the URL.
        found: String,
        /// Protocol the sanitizer required.
        expected: String,
    },
}
