//! Configuration for URI decomposition.

/// What to do with bytes left over after the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Trailing {
    /// Fail with [`ParseErrorKind::TrailingBytes`](crate::ParseErrorKind::TrailingBytes).
    #[default]
    Reject,
    /// Stop at the longest valid URI prefix and expose the rest through
    /// [`Uri::remainder`](crate::Uri::remainder).
    Accept,
}

/// Options for [`Uri::parse_with`](crate::Uri::parse_with).
///
/// # Examples
///
/// ```
/// use uri_abnf::{ParseOptions, Trailing, Uri};
///
/// let options = ParseOptions::new().with_trailing(Trailing::Accept);
/// let uri = Uri::parse_with(b"http://a/b c", &options).unwrap();
/// assert_eq!(uri.path(), b"/b");
/// assert_eq!(uri.remainder(), b" c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Handling of unconsumed bytes.
    ///
    /// Default: [`Trailing::Reject`]
    pub trailing: Trailing,

    /// Upper bound on the input length in bytes.
    ///
    /// Default: None (unbounded)
    pub max_length: Option<usize>,
}

impl ParseOptions {
    /// Creates options with strict defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets trailing-byte handling.
    #[must_use]
    pub const fn with_trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    /// Sets the maximum accepted input length.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Options that accept trailing bytes.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new().with_trailing(Trailing::Accept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let options = ParseOptions::default();
        assert_eq!(options.trailing, Trailing::Reject);
        assert_eq!(options.max_length, None);
    }

    #[test]
    fn builder_sets_fields() {
        let options = ParseOptions::new()
            .with_trailing(Trailing::Accept)
            .with_max_length(2048);
        assert_eq!(options.trailing, Trailing::Accept);
        assert_eq!(options.max_length, Some(2048));
        assert_eq!(ParseOptions::lenient().trailing, Trailing::Accept);
    }
}
