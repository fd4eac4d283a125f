//! URL Utility Functions
//!
//! Validation and reference resolution for URLs found in markup. Resolution
//! follows the URL Standard as implemented by the `url` crate, which agrees
//! with RFC 3986 merge rules: a base without a trailing slash loses its last
//! path segment, and a reference starting with `/` replaces the whole path.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a valid absolute HTTP(S) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Scheme comparison is case-insensitive
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// RFC 3986 unreserved and reserved punctuation, plus `%` for escapes.
const URI_PUNCTUATION: &[u8] = b"-._~%:/?#[]@!$&'()*+,;=";

/// Whether every character of `s` may appear literally in a URI.
fn is_uri_text(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric() || URI_PUNCTUATION.contains(&b))
}

/// Resolve a possibly relative reference into an absolute HTTP(S) URL.
///
/// An already absolute reference is returned unchanged (trimmed), whatever
/// the base, as long as it only holds characters a URI may carry literally.
/// Otherwise its serialized, percent-encoded form is returned. A relative
/// reference needs a base.
///
/// # Errors
/// * [`Error::MissingBaseUrl`] - relative reference and no base
/// * [`Error::InvalidBaseUrl`] - the base does not parse
/// * [`Error::UnresolvableUrl`] - the reference is empty or resolves to something
///   other than an absolute HTTP(S) URL
pub fn resolve_url(base: Option<&str>, reference: &str) -> Result<String> {
    let reference = reference.trim();

    if let (true, Some(url)) = is_absolute_url(reference) {
        if is_uri_text(reference) {
            return Ok(reference.to_string());
        }
        return Ok(url.to_string());
    }

    let Some(base) = base else {
        return Err(Error::MissingBaseUrl(reference.to_string()));
    };

    let unresolvable = || Error::UnresolvableUrl {
        base: base.to_string(),
        reference: reference.to_string(),
    };

    if reference.is_empty() {
        return Err(unresolvable());
    }

    let base_url = Url::parse(base.trim()).map_err(|e| Error::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    let resolved = base_url.join(reference).map_err(|_| unresolvable())?;
    let resolved = resolved.to_string();

    match is_absolute_url(&resolved) {
        (true, _) => Ok(resolved),
        (false, _) => Err(unresolvable()),
    }
}

/// Absorbing form of [`resolve_url`]: any failure becomes `None`.
#[must_use]
pub fn absolutize(reference: &str, base: Option<&str>) -> Option<String> {
    match resolve_url(base, reference) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!(%err, "discarding unresolvable URL");
            None
        }
    }
}
