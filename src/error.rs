//! Error types for URI decomposition.

use std::fmt;

/// Errors that can occur when decomposing a URI.
///
/// No partial [`Uri`](crate::Uri) is ever produced alongside an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: Vec<u8>,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific decomposition failures.
///
/// Positions are byte offsets into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input exceeds the configured maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// No valid scheme at offset 0
    SchemeMissing,
    /// The scheme is not followed by ":"
    SchemeDelimiterMissing {
        /// Offset where ":" was expected
        position: usize,
    },
    /// None of the hier-part alternatives apply
    HierPartInvalid {
        /// Offset where hier-part starts
        position: usize,
    },
    /// Hier-part starts with "/" but is not a valid path-absolute
    PathAbsoluteInvalid {
        /// Offset where the path starts
        position: usize,
    },
    /// Hier-part starts with a segment byte but is not a valid path-rootless
    PathRootlessInvalid {
        /// Offset where the path starts
        position: usize,
    },
    /// Bytes remain after the fragment
    TrailingBytes {
        /// Offset of the first unconsumed byte
        position: usize,
    },
}

impl ParseErrorKind {
    /// Returns the byte offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::TooLong { .. } => None,
            Self::SchemeMissing => Some(0),
            Self::SchemeDelimiterMissing { position }
            | Self::HierPartInvalid { position }
            | Self::PathAbsoluteInvalid { position }
            | Self::PathRootlessInvalid { position }
            | Self::TrailingBytes { position } => Some(*position),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input.escape_ascii())?;
        match &self.kind {
            ParseErrorKind::TooLong { max, actual } => {
                write!(f, "URI length {actual} exceeds maximum {max}")
            }
            ParseErrorKind::SchemeMissing => {
                write!(f, "missing scheme; URI must start with a letter")
            }
            ParseErrorKind::SchemeDelimiterMissing { position } => {
                write!(f, "expected ':' after scheme at position {position}")
            }
            ParseErrorKind::HierPartInvalid { position } => {
                write!(f, "invalid hier-part at position {position}")
            }
            ParseErrorKind::PathAbsoluteInvalid { position } => {
                write!(f, "invalid absolute path at position {position}")
            }
            ParseErrorKind::PathRootlessInvalid { position } => {
                write!(f, "invalid rootless path at position {position}")
            }
            ParseErrorKind::TrailingBytes { position } => {
                write!(
                    f,
                    "unexpected byte at position {position}; nothing may follow the fragment"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A rule name that is not part of the RFC 3986 grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule {
    /// The name that was looked up
    pub name: String,
}

impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown RFC 3986 rule '{}'", self.name)
    }
}

impl std::error::Error for UnknownRule {}
