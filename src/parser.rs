//! Structural decomposition of a URI.
//!
//! One left-to-right pass over the input. Each step evaluates a single
//! grammar rule at the current offset and keeps its longest match; no step
//! revisits an earlier field.

use tracing::{debug, trace};

use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::grammar;
use crate::host::HostKind;
use crate::options::{ParseOptions, Trailing};
use crate::rule::Rule;
use crate::uri::{Authority, Uri};

/// Decomposes `input` as an RFC 3986 `URI` with strict options.
///
/// # Errors
///
/// Returns `ParseError` if `input` is not a complete `URI`.
///
/// # Examples
///
/// ```
/// let uri = uri_abnf::parse(b"mailto:foo").unwrap();
/// assert_eq!(uri.scheme(), b"mailto");
/// assert_eq!(uri.path(), b"foo");
/// assert!(uri.host().is_none());
/// ```
pub fn parse(input: &[u8]) -> Result<Uri<'_>, ParseError> {
    parse_with(input, &ParseOptions::default())
}

/// Decomposes `input` as an RFC 3986 `URI`.
///
/// # Errors
///
/// Returns `ParseError` if `input` is longer than allowed, or if no
/// complete `URI` can be assembled from it. With [`Trailing::Accept`],
/// bytes after the longest valid prefix are not an error.
pub fn parse_with<'a>(input: &'a [u8], options: &ParseOptions) -> Result<Uri<'a>, ParseError> {
    decompose(input, options).map_err(|kind| {
        let err = ParseError {
            input: input.to_vec(),
            kind,
        };
        debug!(error = %err, "URI decomposition failed");
        err
    })
}

fn decompose<'a>(input: &'a [u8], options: &ParseOptions) -> Result<Uri<'a>, ParseErrorKind> {
    if let Some(max) = options.max_length {
        if input.len() > max {
            return Err(ParseErrorKind::TooLong {
                max,
                actual: input.len(),
            });
        }
    }

    let mut cursor = Cursor::new(input);

    let scheme_len = cursor
        .longest(Rule::Scheme)
        .ok_or(ParseErrorKind::SchemeMissing)?;
    let scheme = cursor.take(scheme_len);

    if cursor.eat(b":").is_none() {
        return Err(ParseErrorKind::SchemeDelimiterMissing {
            position: cursor.pos,
        });
    }

    let hier_start = cursor.pos;
    let (authority, path) = if cursor.rest().starts_with(b"//") {
        let authority = decompose_authority(&mut cursor)?;
        let path_len = cursor
            .longest(Rule::PathAbempty)
            .ok_or(ParseErrorKind::HierPartInvalid {
                position: hier_start,
            })?;
        (Some(authority), cursor.take(path_len))
    } else if cursor.rest().starts_with(b"/") {
        let path_len = cursor
            .longest(Rule::PathAbsolute)
            .ok_or(ParseErrorKind::PathAbsoluteInvalid {
                position: hier_start,
            })?;
        (None, cursor.take(path_len))
    } else if matches!(cursor.rest().first(), None | Some(b'?' | b'#')) {
        trace!(rule = %Rule::PathEmpty, start = hier_start, "empty hier-part");
        (None, cursor.take(0))
    } else {
        match cursor.longest(Rule::PathRootless) {
            Some(path_len) => (None, cursor.take(path_len)),
            // The longest valid prefix ends at the scheme delimiter.
            None if options.trailing == Trailing::Accept => (None, cursor.take(0)),
            None => {
                return Err(ParseErrorKind::PathRootlessInvalid {
                    position: hier_start,
                });
            }
        }
    };

    let (question, query) = cursor.delimited(b"?", Rule::Query);
    let (sharp, fragment) = cursor.delimited(b"#", Rule::Fragment);

    let remainder = cursor.rest();
    if !remainder.is_empty() && options.trailing == Trailing::Reject {
        return Err(ParseErrorKind::TrailingBytes {
            position: cursor.pos,
        });
    }

    Ok(Uri {
        scheme,
        authority,
        path,
        question,
        query,
        sharp,
        fragment,
        remainder,
    })
}

// authority = [ userinfo "@" ] host [ ":" port ]
fn decompose_authority<'a>(cursor: &mut Cursor<'a>) -> Result<Authority<'a>, ParseErrorKind> {
    let start = cursor.pos;
    let double_slash = cursor.take(2);
    let authority_start = cursor.pos;

    // Longest userinfo that is immediately followed by "@".
    let rest = cursor.rest();
    let user_info_len = cursor
        .find(Rule::UserInfo)
        .as_slice()
        .iter()
        .rev()
        .copied()
        .find(|&len| rest.get(len) == Some(&b'@'));
    let (user_info, at_sign) = match user_info_len {
        Some(len) => (Some(cursor.take(len)), Some(cursor.take(1))),
        None => (None, None),
    };

    let host_len = cursor
        .longest(Rule::Host)
        .ok_or(ParseErrorKind::HierPartInvalid { position: start })?;
    let host = cursor.take(host_len);
    let host_kind = HostKind::classify(host);
    trace!(kind = %host_kind, "host classified");

    let port = cursor.eat(b":").map(|_| {
        let len = cursor.longest(Rule::Port).unwrap_or(0);
        cursor.take(len)
    });

    Ok(Authority {
        double_slash,
        raw: &cursor.input[authority_start..cursor.pos],
        user_info,
        at_sign,
        host,
        host_kind,
        port,
    })
}

/// Read position over the input.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    fn take(&mut self, len: usize) -> &'a [u8] {
        let start = self.pos;
        self.pos += len;
        &self.input[start..self.pos]
    }

    fn eat(&mut self, literal: &[u8]) -> Option<&'a [u8]> {
        self.rest()
            .starts_with(literal)
            .then(|| self.take(literal.len()))
    }

    fn find(&self, rule: Rule) -> abnf_match::Matches {
        grammar().find(rule, self.rest())
    }

    fn longest(&self, rule: Rule) -> Option<usize> {
        let len = self.find(rule).longest();
        trace!(rule = %rule, start = self.pos, len = ?len, "longest match");
        len
    }

    /// `[ delimiter rule ]`, keeping the delimiter and value separately.
    fn delimited(&mut self, delimiter: &[u8], rule: Rule) -> (Option<&'a [u8]>, Option<&'a [u8]>) {
        match self.eat(delimiter) {
            Some(marker) => {
                let len = self.longest(rule).unwrap_or(0);
                (Some(marker), Some(self.take(len)))
            }
            None => (None, None),
        }
    }
}
