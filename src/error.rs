//! Error types for rs-htmlnav.
//!
//! The public extraction functions never return these: every failure
//! degrades to an absent URL or best-effort text. They surface through the
//! lower-level `url_utils::resolve_url` and `RefreshDirective` parsing.

/// Error type for URL resolution and refresh-directive parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A relative reference was found but no base URL was supplied.
    #[error("no base URL to resolve relative reference {0:?}")]
    MissingBaseUrl(String),

    /// The supplied base URL could not be parsed.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// Base URL as given by the caller.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Resolution produced an empty, malformed or non-HTTP URL.
    #[error("cannot resolve {reference:?} against {base:?}")]
    UnresolvableUrl {
        /// Base URL used for resolution.
        base: String,
        /// Reference that failed to resolve.
        reference: String,
    },

    /// A refresh `content` attribute has no `url=` token.
    #[error("no url= token in refresh content {0:?}")]
    UnparsableRefreshContent(String),
}

/// Result type alias for resolution and parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
