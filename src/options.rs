//! Configuration options for text stripping.
//!
//! The `StripOptions` struct controls what the stripper keeps. URL
//! extraction takes no options beyond the optional base URL.

/// Configuration options for HTML to text stripping.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_htmlnav::StripOptions;
///
/// // Use defaults
/// let options = StripOptions::default();
/// assert!(!options.include_title);
///
/// // Customize specific fields
/// let options = StripOptions {
///     include_title: true,
///     ..StripOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripOptions {
    /// Keep the text of `<title>` and emit it as the first sentence.
    ///
    /// When disabled, `<title>` subtrees are removed together with
    /// `<script>` and `<style>`.
    ///
    /// Default: `false`
    pub include_title: bool,
}

impl StripOptions {
    /// Options that keep the document title.
    #[must_use]
    pub const fn with_title() -> Self {
        Self { include_title: true }
    }
}
