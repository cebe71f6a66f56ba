//! Target URL validation.
//!
//! URLs are stored exactly as submitted and later sent back verbatim in the
//! `Location` header, so anything `Url::parse` would silently repair
//! (surrounding or embedded whitespace, angle brackets) is rejected up front.

use url::Url;

/// Schemes a target URL may use.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains an illegal character: {0:?}")]
    IllegalCharacter(char),
}

/// Checks that `input` is an absolute URL with an explicit scheme and a host.
///
/// Accepted schemes are `http`, `https` and `ftp`. Inputs without a scheme
/// such as `example.com` fail to parse and are rejected, as are inputs
/// containing whitespace, `<` or `>` anywhere.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://a.com").is_ok());
/// assert!(validate_target_url("a.com").is_err());
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if let Some(c) = input
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '<' | '>'))
    {
        return Err(UrlValidationError::IllegalCharacter(c));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
