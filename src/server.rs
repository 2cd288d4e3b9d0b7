//! The server handle and token derivation pipeline.
//!
//! [`ThumborServer`] holds the proxy's base URL and the 16-byte key derived
//! from the shared secret, and derives the encrypted token and URL forms a
//! client embeds in image references. It never contacts the proxy.

use tracing::debug;

use crate::crypto::{aes128_ecb_encrypt, md5_hex, urlsafe_base64, BLOCK_SIZE};
use crate::error::ThumborError;
use crate::options::TransformOptions;
use crate::sanitize::{sanitize_with_protocol, sanitize_without_protocol};

/// Protocol assumed for the proxy and for source image URLs that do not
/// declare one.
const DEFAULT_PROTOCOL: &str = "http";

/// Character the token plaintext is padded with up to a block boundary.
/// Fixed by the proxy's decryption scheme.
const PAD_CHAR: char = '{';

/// Handle for a Thumbor imaging proxy sharing a secret key with us.
///
/// The handle is immutable after construction and every operation takes
/// `&self` with cipher state created per call, so it can be shared across
/// threads freely.
///
/// # Example
///
/// ```
/// use thumbor_url::{ThumborServer, TransformOptions};
///
/// let server = ThumborServer::new("dbjorge.net", "my-security-key").unwrap();
/// let options = TransformOptions::new().resize(300, 200);
///
/// let url = server
///     .secure_url("my.server.com/some/path/to/image.jpg", &options)
///     .unwrap();
/// assert!(url.starts_with("http://dbjorge.net/"));
/// ```
#[derive(Debug, Clone)]
pub struct ThumborServer {
    server_url: String,
    key: [u8; BLOCK_SIZE],
}

impl ThumborServer {
    /// Create a handle for the proxy at `server_url` using `secure_key`.
    ///
    /// The server URL gets an `http://` prefix if it does not already carry
    /// a protocol; an existing protocol is preserved unchanged. The key is
    /// derived from the secret by self-concatenating it to at least 16
    /// bytes and truncating to exactly 16.
    ///
    /// Fails with [`ThumborError::EmptyServerUrl`] or
    /// [`ThumborError::EmptySecureKey`] when either input is empty.
    pub fn new(server_url: &str, secure_key: &str) -> Result<Self, ThumborError> {
        if server_url.is_empty() {
            return Err(ThumborError::EmptyServerUrl);
        }
        if secure_key.is_empty() {
            return Err(ThumborError::EmptySecureKey);
        }

        Ok(Self {
            server_url: sanitize_with_protocol(server_url, DEFAULT_PROTOCOL),
            key: derive_key(secure_key),
        })
    }

    /// The protocol-qualified base URL of the proxy.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// The options path followed by the MD5 fingerprint of the sanitized
    /// image URL.
    ///
    /// This is the exact plaintext the proxy expects inside the token,
    /// before padding.
    pub fn options_url(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<String, ThumborError> {
        let sanitized = sanitize_without_protocol(image_url, DEFAULT_PROTOCOL)?;
        Ok(format!("{}{}", options.to_path(), md5_hex(sanitized)))
    }

    /// The encrypted, encoded token segment of a secure URL.
    ///
    /// The options-and-fingerprint string is padded with `{` to a 16-byte
    /// boundary, encrypted with AES-128-ECB under the derived key, and
    /// encoded as URL-safe base64 without padding. Identical inputs always
    /// produce an identical token.
    pub fn secure_token(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<String, ThumborError> {
        let mut plaintext = self.options_url(image_url, options)?;
        while plaintext.len() % BLOCK_SIZE != 0 {
            plaintext.push(PAD_CHAR);
        }

        let token = urlsafe_base64(&aes128_ecb_encrypt(&self.key, plaintext.as_bytes()));
        debug!(
            plaintext_len = plaintext.len(),
            token_len = token.len(),
            "derived secure token"
        );
        Ok(token)
    }

    /// The full secure path: `/` + token + `/` + sanitized image URL.
    pub fn secure_url_path(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<String, ThumborError> {
        let token = self.secure_token(image_url, options)?;
        let sanitized = sanitize_without_protocol(image_url, DEFAULT_PROTOCOL)?;
        Ok(format!("/{token}/{sanitized}"))
    }

    /// The complete secure URL: proxy base URL + secure path.
    pub fn secure_url(
        &self,
        image_url: &str,
        options: &TransformOptions,
    ) -> Result<String, ThumborError> {
        let path = self.secure_url_path(image_url, options)?;
        Ok(format!("{}{}", self.server_url, path))
    }
}

/// Derive the 16-byte AES key from the shared secret: self-concatenate
/// until at least 16 bytes, then truncate to the first 16.
fn derive_key(secret: &str) -> [u8; BLOCK_SIZE] {
    debug_assert!(!secret.is_empty(), "secret must be validated as non-empty");

    let mut bytes = secret.as_bytes().to_vec();
    while bytes.len() < BLOCK_SIZE {
        bytes.extend_from_within(..);
    }

    let mut key = [0u8; BLOCK_SIZE];
    key.copy_from_slice(&bytes[..BLOCK_SIZE]);
    key
}
