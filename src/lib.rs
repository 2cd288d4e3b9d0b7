//! thumbor-url: client-side builder for secure Thumbor imaging-proxy URLs.
//!
//! A Thumbor proxy serves transformed images from URLs of the form
//! `http://proxy/<token>/<source>`, where the token is an encrypted,
//! URL-safe encoding of the requested transformation and a fingerprint of
//! the source image. This crate derives those tokens and URLs on the
//! client; it never contacts the proxy and performs no image processing.
//!
//! # Quick Start
//!
//! ```
//! use thumbor_url::{ThumborServer, TransformOptions};
//!
//! let server = ThumborServer::new("dbjorge.net", "my-security-key").unwrap();
//! let options = TransformOptions::new().resize(300, 200);
//!
//! let url = server
//!     .secure_url("my.server.com/some/path/to/image.jpg", &options)
//!     .unwrap();
//! assert_eq!(
//!     url,
//!     "http://dbjorge.net/l42l54VqaV_J-EcB5quNMP6CnsN9BX7htrh-QbPuDv0C7adUXX7LTo6DHm_woJtZ/my.server.com/some/path/to/image.jpg"
//! );
//! ```
//!
//! # Token scheme
//!
//! The token is derived in four steps, each byte-exact for compatibility
//! with the proxy's decryption:
//!
//! 1. [`TransformOptions::to_path`] renders the options as Thumbor's
//!    slash-delimited path grammar.
//! 2. The MD5 hex fingerprint of the protocol-stripped source URL is
//!    appended.
//! 3. The string is padded with `{` to a 16-byte boundary and encrypted
//!    with AES-128-ECB under a key derived from the shared secret.
//! 4. The ciphertext is encoded as URL-safe base64 with the `=` padding
//!    stripped.
//!
//! ECB mode and MD5 are fixed by the proxy's scheme; they are compatibility
//! requirements, not recommendations.
//!
//! # Concurrency
//!
//! [`ThumborServer`] is immutable after construction and creates cipher
//! state per call, so a single handle may be shared and used from any
//! number of threads without coordination.

pub mod crypto;
pub mod error;
pub mod options;
pub mod sanitize;
pub mod server;


pub use error::ThumborError;
pub use options::{HorizontalAlign, TransformOptions, VerticalAlign};
pub use sanitize::{sanitize_with_protocol, sanitize_without_protocol};
pub use server::ThumborServer;
