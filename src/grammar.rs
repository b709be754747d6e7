//! The RFC 3986 rule set.
//!
//! Each production is a pure combinator expression; see `grammar.abnf` at
//! the crate root for the source text. The table is built once, on first
//! use, and shared by every caller.
//!
//! ```abnf
//! IPv6address =                            6( h16 ":" ) ls32
//!             /                       "::" 5( h16 ":" ) ls32
//!             / [               h16 ] "::" 4( h16 ":" ) ls32
//!             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
//!             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
//!             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
//!             / [ *4( h16 ":" ) h16 ] "::"              ls32
//!             / [ *5( h16 ":" ) h16 ] "::"              h16
//!             / [ *6( h16 ":" ) h16 ] "::"
//! ```
//!
//! Because concatenation keeps every split, `"::"` after a run of
//! `h16 ":"` groups is always tried as the two-byte token as well as the
//! single trailing colon; `A:A::B` resolves through the first reading.

use abnf_match::{
    CharClass, Expr, Grammar, Matches, alt, at_most, between, byte, caseless, class, concat, empty,
    exactly, lit, many, many1, one_of, opt, range, rule,
};
use once_cell::sync::Lazy;

use crate::rule::Rule;

static GRAMMAR: Lazy<Grammar<Rule>> =
    Lazy::new(|| Grammar::build(Rule::ALL.iter().copied(), definition));

/// Returns the shared RFC 3986 grammar.
#[must_use]
pub fn grammar() -> &'static Grammar<Rule> {
    Lazy::force(&GRAMMAR)
}

/// Returns every valid match length of `rule` at the start of `input`.
///
/// # Examples
///
/// ```
/// use uri_abnf::{find, Rule};
///
/// // "256" is not an octet, but "2" and "25" are.
/// assert_eq!(find(Rule::DecOctet, b"256"), [1, 2]);
/// ```
#[must_use]
pub fn find(rule: Rule, input: &[u8]) -> Matches {
    GRAMMAR.find(rule, input)
}

/// Returns true if `rule` matches all of `input`.
///
/// # Examples
///
/// ```
/// use uri_abnf::{is_match, Rule};
///
/// assert!(is_match(Rule::UriReference, b"../a?b"));
/// assert!(!is_match(Rule::Uri, b"../a?b"));
/// ```
#[must_use]
pub fn is_match(rule: Rule, input: &[u8]) -> bool {
    GRAMMAR.is_match(rule, input)
}

/// `h16 ":"`
fn h16_colon() -> Expr<Rule> {
    concat([rule(Rule::H16), byte(b':')])
}

/// `[ *n( h16 ":" ) h16 ] "::"`
fn compressed_head(n: usize) -> Expr<Rule> {
    concat([
        opt(concat([at_most(n, h16_colon()), rule(Rule::H16)])),
        lit(b"::"),
    ])
}

/// `*( "/" segment )`
fn slash_segments() -> Expr<Rule> {
    many(concat([byte(b'/'), rule(Rule::Segment)]))
}

/// `[ "?" query ]`
fn opt_query() -> Expr<Rule> {
    opt(concat([byte(b'?'), rule(Rule::Query)]))
}

/// `[ "#" fragment ]`
fn opt_fragment() -> Expr<Rule> {
    opt(concat([byte(b'#'), rule(Rule::Fragment)]))
}

fn ipv6_address() -> Expr<Rule> {
    let ls32 = || rule(Rule::Ls32);
    alt([
        concat([exactly(6, h16_colon()), ls32()]),
        concat([lit(b"::"), exactly(5, h16_colon()), ls32()]),
        concat([opt(rule(Rule::H16)), lit(b"::"), exactly(4, h16_colon()), ls32()]),
        concat([compressed_head(1), exactly(3, h16_colon()), ls32()]),
        concat([compressed_head(2), exactly(2, h16_colon()), ls32()]),
        concat([compressed_head(3), h16_colon(), ls32()]),
        concat([compressed_head(4), ls32()]),
        concat([compressed_head(5), rule(Rule::H16)]),
        compressed_head(6),
    ])
}

fn dec_octet() -> Expr<Rule> {
    let digit = || class(CharClass::Digit);
    alt([
        digit(),
        concat([range(0x31, 0x39), digit()]),
        concat([byte(b'1'), exactly(2, digit())]),
        concat([byte(b'2'), range(0x30, 0x34), digit()]),
        concat([lit(b"25"), range(0x30, 0x35)]),
    ])
}

#[allow(clippy::too_many_lines)]
fn definition(id: Rule) -> Expr<Rule> {
    match id {
        Rule::Uri => concat([
            rule(Rule::Scheme),
            byte(b':'),
            rule(Rule::HierPart),
            opt_query(),
            opt_fragment(),
        ]),
        Rule::HierPart => alt([
            concat([lit(b"//"), rule(Rule::Authority), rule(Rule::PathAbempty)]),
            rule(Rule::PathAbsolute),
            rule(Rule::PathRootless),
            rule(Rule::PathEmpty),
        ]),
        Rule::UriReference => alt([rule(Rule::Uri), rule(Rule::RelativeRef)]),
        Rule::AbsoluteUri => concat([
            rule(Rule::Scheme),
            byte(b':'),
            rule(Rule::HierPart),
            opt_query(),
        ]),
        Rule::RelativeRef => concat([rule(Rule::RelativePart), opt_query(), opt_fragment()]),
        Rule::RelativePart => alt([
            concat([lit(b"//"), rule(Rule::Authority), rule(Rule::PathAbempty)]),
            rule(Rule::PathAbsolute),
            rule(Rule::PathNoScheme),
            rule(Rule::PathEmpty),
        ]),
        Rule::Scheme => concat([
            class(CharClass::Alpha),
            many(alt([
                class(CharClass::Alpha),
                class(CharClass::Digit),
                one_of(b"+-."),
            ])),
        ]),
        Rule::Authority => concat([
            opt(concat([rule(Rule::UserInfo), byte(b'@')])),
            rule(Rule::Host),
            opt(concat([byte(b':'), rule(Rule::Port)])),
        ]),
        Rule::UserInfo => many(alt([
            rule(Rule::Unreserved),
            rule(Rule::PctEncoded),
            rule(Rule::SubDelims),
            byte(b':'),
        ])),
        Rule::Host => alt([
            rule(Rule::IpLiteral),
            rule(Rule::Ipv4Address),
            rule(Rule::RegName),
        ]),
        Rule::Port => many(class(CharClass::Digit)),
        Rule::IpLiteral => concat([
            byte(b'['),
            alt([rule(Rule::Ipv6Address), rule(Rule::IpvFuture)]),
            byte(b']'),
        ]),
        Rule::IpvFuture => concat([
            caseless(b"v"),
            many1(class(CharClass::HexDig)),
            byte(b'.'),
            many1(alt([
                rule(Rule::Unreserved),
                rule(Rule::SubDelims),
                byte(b':'),
            ])),
        ]),
        Rule::Ipv6Address => ipv6_address(),
        Rule::H16 => between(1, 4, class(CharClass::HexDig)),
        Rule::Ls32 => alt([
            concat([rule(Rule::H16), byte(b':'), rule(Rule::H16)]),
            rule(Rule::Ipv4Address),
        ]),
        Rule::Ipv4Address => concat([
            rule(Rule::DecOctet),
            byte(b'.'),
            rule(Rule::DecOctet),
            byte(b'.'),
            rule(Rule::DecOctet),
            byte(b'.'),
            rule(Rule::DecOctet),
        ]),
        Rule::DecOctet => dec_octet(),
        Rule::RegName => many(alt([
            rule(Rule::Unreserved),
            rule(Rule::PctEncoded),
            rule(Rule::SubDelims),
        ])),
        Rule::Path => alt([
            rule(Rule::PathAbempty),
            rule(Rule::PathAbsolute),
            rule(Rule::PathNoScheme),
            rule(Rule::PathRootless),
            rule(Rule::PathEmpty),
        ]),
        Rule::PathAbempty => slash_segments(),
        Rule::PathAbsolute => concat([
            byte(b'/'),
            opt(concat([rule(Rule::SegmentNz), slash_segments()])),
        ]),
        Rule::PathNoScheme => concat([rule(Rule::SegmentNzNc), slash_segments()]),
        Rule::PathRootless => concat([rule(Rule::SegmentNz), slash_segments()]),
        Rule::PathEmpty => empty(),
        Rule::Segment => many(rule(Rule::Pchar)),
        Rule::SegmentNz => many1(rule(Rule::Pchar)),
        Rule::SegmentNzNc => many1(alt([
            rule(Rule::Unreserved),
            rule(Rule::PctEncoded),
            rule(Rule::SubDelims),
            byte(b'@'),
        ])),
        Rule::Pchar => alt([
            rule(Rule::Unreserved),
            rule(Rule::PctEncoded),
            rule(Rule::SubDelims),
            byte(b':'),
            byte(b'@'),
        ]),
        Rule::Query | Rule::Fragment => many(alt([rule(Rule::Pchar), one_of(b"/?")])),
        Rule::PctEncoded => concat([
            byte(b'%'),
            class(CharClass::HexDig),
            class(CharClass::HexDig),
        ]),
        Rule::Unreserved => alt([
            class(CharClass::Alpha),
            class(CharClass::Digit),
            one_of(b"-._~"),
        ]),
        Rule::Reserved => alt([rule(Rule::GenDelims), rule(Rule::SubDelims)]),
        Rule::GenDelims => one_of(b":/?#[]@"),
        Rule::SubDelims => one_of(b"!$&'()*+,;="),
    }
}
