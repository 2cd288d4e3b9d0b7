//! URL protocol sanitization.
//!
//! Thumbor embeds the source image reference in its paths without a protocol
//! prefix, so the signer needs to strip or enforce one. Protocol detection is
//! deliberately narrow: a URL "has a protocol" only when its first `://`
//! starts exactly one character before the URL's first `/`, i.e. nothing but
//! the protocol name precedes `://`. This matches what the proxy itself
//! accepts and must not be widened into general URL-scheme parsing.

use crate::error::ThumborError;

/// Split `url` into protocol name and remainder under the narrow detection
/// rule, or `None` when no protocol-looking prefix is present.
fn split_protocol(url: &str) -> Option<(&str, &str)> {
    let marker = url.find("://")?;
    if url.find('/') != Some(marker + 1) {
        return None;
    }
    Some((&url[..marker], &url[marker + 3..]))
}

/// Strip the protocol prefix from `url`, requiring it to be `expected`.
///
/// A URL carrying a different protocol fails with
/// [`ThumborError::ProtocolMismatch`]. A URL with no protocol-looking prefix
/// is returned unchanged.
///
/// # Example
///
/// ```
/// use thumbor_url::sanitize_without_protocol;
///
/// assert_eq!(
///     sanitize_without_protocol("http://test.com", "http").unwrap(),
///     "test.com"
/// );
/// assert_eq!(
///     sanitize_without_protocol("test.com", "http").unwrap(),
///     "test.com"
/// );
/// assert!(sanitize_without_protocol("https://test.com", "http").is_err());
/// ```
pub fn sanitize_without_protocol<'a>(
    url: &'a str,
    expected: &str,
) -> Result<&'a str, ThumborError> {
    match split_protocol(url) {
        Some((protocol, rest)) => {
            if protocol != expected {
                return Err(ThumborError::ProtocolMismatch {
                    found: protocol.to_string(),
                    expected: expected.to_string(),
                });
            }
            Ok(rest)
        }
        None => Ok(url),
    }
}

/// Ensure `url` carries a protocol prefix, prepending `default_protocol` if
/// none is present.
///
/// Unlike [`sanitize_without_protocol`] this never fails: an existing
/// protocol is left untouched even when it differs from the default.
///
/// # Example
///
/// ```
/// use thumbor_url::sanitize_with_protocol;
///
/// assert_eq!(sanitize_with_protocol("test.com", "http"), "http://test.com");
/// assert_eq!(
///     sanitize_with_protocol("https://test.com", "http"),
///     "https://test.com"
/// );
/// ```
pub fn sanitize_with_protocol(url: &str, default_protocol: &str) -> String {
    if split_protocol(url).is_some() {
        url.to_string()
    } else {
        format!("{default_protocol}://{url}")
    }
}
