//! ABNF matching primitives and combinators.
//!
//! Every matcher in this crate answers the question "at which offsets can
//! this rule end?" rather than "does it match?". Grammars written in ABNF
//! (RFC 5234) are declarative and frequently ambiguous, so a matcher
//! returns the complete [`Matches`] set and leaves disambiguation to the
//! caller.
//!
//! # Building blocks
//!
//! | ABNF            | Constructor                   |
//! |-----------------|-------------------------------|
//! | `%x2F.2F`       | [`lit`]                       |
//! | `"v"`           | [`caseless`]                  |
//! | `%x30-35`       | [`range`]                     |
//! | `DIGIT`         | [`class`] with [`CharClass`]  |
//! | `a b`           | [`concat`]                    |
//! | `a / b`         | [`alt`]                       |
//! | `[ a ]`         | [`opt`]                       |
//! | `m*n a`         | [`repeat`], [`between`]       |
//! | `*a`, `1*a`     | [`many`], [`many1`]           |
//! | `n a`, `*n a`   | [`exactly`], [`at_most`]      |
//! | `rulename`      | [`rule`]                      |
//!
//! Named rules live in a [`Grammar`] arena and are referenced by id, so
//! mutually recursive productions need no self-referential structures.
//!
//! # Example
//!
//! ```
//! use abnf_match::{alt, class, concat, lit, range, CharClass, Expr, NoRule};
//!
//! // dec-octet restricted to the 250-255 and single digit forms
//! let octet: Expr<NoRule> = alt([
//!     concat([lit(b"25"), range(0x30, 0x35)]),
//!     class(CharClass::Digit),
//! ]);
//!
//! assert_eq!(octet.find(b"253"), [1, 3]);
//! assert_eq!(octet.find(b"256"), [1]);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod class;
mod expr;
mod grammar;
mod matches;

pub use class::CharClass;
pub use expr::{
    Expr, alt, at_most, between, byte, caseless, class, concat, empty, exactly, lit, many, many1,
    one_of, opt, range, repeat, rule,
};
pub use grammar::{Grammar, NoRule, RuleId};
pub use matches::Matches;
