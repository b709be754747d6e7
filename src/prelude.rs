//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_abnf::prelude::*;
//!
//! let uri = Uri::parse(b"urn:example:animal").unwrap();
//! assert!(is_match(Rule::PathRootless, uri.path()));
//! ```

pub use crate::{
    // Core types
    HostKind, Matches, Rule, Uri,
    // Rule matching
    find, is_match,
    // Options
    ParseOptions, Trailing,
    // Errors
    ParseError, ParseErrorKind, UnknownRule,
};
