//! Matcher expressions: primitives and combinators.
//!
//! An [`Expr`] is the data form of a matcher. Evaluating it against a byte
//! slice yields the full [`Matches`] set. Rule references are stored as ids
//! and resolved through a [`Grammar`](crate::Grammar) at match time, so
//! mutually referencing productions never form object cycles.

use std::borrow::Cow;
use std::fmt;

use crate::class::CharClass;
use crate::grammar::{Evaluator, RuleId};
use crate::matches::Matches;

/// A matcher expression over bytes.
///
/// `R` is the rule id type used for [`Expr::Rule`] references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr<R> {
    /// Matches the empty string only.
    Empty,
    /// Exact byte sequence (`%x` notation).
    Literal(Cow<'static, [u8]>),
    /// Quoted ABNF string, compared ASCII case-insensitively.
    Caseless(Cow<'static, [u8]>),
    /// One byte from a core character class.
    Class(CharClass),
    /// One byte in the inclusive range `lo..=hi`.
    Range(u8, u8),
    /// Every element in sequence.
    Concat(Vec<Expr<R>>),
    /// Any element; all alternatives are explored and merged.
    Alt(Vec<Expr<R>>),
    /// Zero or one occurrence.
    Optional(Box<Expr<R>>),
    /// Between `min` and `max` occurrences; `None` is unbounded.
    Repeat {
        /// The repeated expression.
        inner: Box<Expr<R>>,
        /// Minimum number of occurrences.
        min: usize,
        /// Maximum number of occurrences.
        max: Option<usize>,
    },
    /// Reference to a named rule in a grammar.
    Rule(R),
}

impl<R: RuleId> Expr<R> {
    /// Evaluates a rule-free expression against `input`.
    ///
    /// Any [`Expr::Rule`] reference inside the expression matches nothing
    /// because there is no grammar to resolve it against; use
    /// [`Grammar::find_expr`](crate::Grammar::find_expr) for those.
    ///
    /// # Examples
    ///
    /// ```
    /// use abnf_match::{class, concat, lit, CharClass, Expr, NoRule};
    ///
    /// let pct: Expr<NoRule> = concat([lit(b"%"), class(CharClass::HexDig), class(CharClass::HexDig)]);
    /// assert_eq!(pct.find(b"%2Fx"), [3]);
    /// assert!(pct.find(b"%zz").is_empty());
    /// ```
    #[must_use]
    pub fn find(&self, input: &[u8]) -> Matches {
        Evaluator::detached(input).eval(self, 0)
    }
}

/// Exact byte sequence.
#[must_use]
pub const fn lit<R>(bytes: &'static [u8]) -> Expr<R> {
    Expr::Literal(Cow::Borrowed(bytes))
}

/// A single exact byte.
#[must_use]
pub const fn byte<R>(b: u8) -> Expr<R> {
    Expr::Range(b, b)
}

/// Case-insensitive ABNF string.
#[must_use]
pub const fn caseless<R>(bytes: &'static [u8]) -> Expr<R> {
    Expr::Caseless(Cow::Borrowed(bytes))
}

/// One byte from a core class.
#[must_use]
pub const fn class<R>(class: CharClass) -> Expr<R> {
    Expr::Class(class)
}

/// One byte in `lo..=hi` (`%xLO-HI`).
#[must_use]
pub const fn range<R>(lo: u8, hi: u8) -> Expr<R> {
    Expr::Range(lo, hi)
}

/// The empty match.
#[must_use]
pub const fn empty<R>() -> Expr<R> {
    Expr::Empty
}

/// Reference to a named rule.
#[must_use]
pub const fn rule<R>(id: R) -> Expr<R> {
    Expr::Rule(id)
}

/// Concatenation.
pub fn concat<R>(parts: impl IntoIterator<Item = Expr<R>>) -> Expr<R> {
    Expr::Concat(parts.into_iter().collect())
}

/// Unordered alternation.
pub fn alt<R>(choices: impl IntoIterator<Item = Expr<R>>) -> Expr<R> {
    Expr::Alt(choices.into_iter().collect())
}

/// `[ inner ]`
pub fn opt<R>(inner: Expr<R>) -> Expr<R> {
    Expr::Optional(Box::new(inner))
}

/// `min*max inner`, with `max = None` for no upper bound.
pub fn repeat<R>(inner: Expr<R>, min: usize, max: Option<usize>) -> Expr<R> {
    Expr::Repeat {
        inner: Box::new(inner),
        min,
        max,
    }
}

/// `*inner`
pub fn many<R>(inner: Expr<R>) -> Expr<R> {
    repeat(inner, 0, None)
}

/// `1*inner`
pub fn many1<R>(inner: Expr<R>) -> Expr<R> {
    repeat(inner, 1, None)
}

/// `n inner`
pub fn exactly<R>(n: usize, inner: Expr<R>) -> Expr<R> {
    repeat(inner, n, Some(n))
}

/// `*n inner`
pub fn at_most<R>(n: usize, inner: Expr<R>) -> Expr<R> {
    repeat(inner, 0, Some(n))
}

/// `min*max inner`
pub fn between<R>(min: usize, max: usize, inner: Expr<R>) -> Expr<R> {
    repeat(inner, min, Some(max))
}

/// Alternation of single bytes, e.g. `"!" / "$" / "&"`.
pub fn one_of<R>(bytes: &'static [u8]) -> Expr<R> {
    alt(bytes.iter().map(|&b| byte(b)))
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8], quote_prefix: &str) -> fmt::Result {
    if !bytes.is_empty() && bytes.iter().all(|b| b.is_ascii_graphic() && *b != b'"') {
        write!(f, "{quote_prefix}\"{}\"", bytes.escape_ascii())
    } else {
        f.write_str("%x")?;
        for (i, b) in bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

fn write_joined<R: RuleId>(
    f: &mut fmt::Formatter<'_>,
    parts: &[Expr<R>],
    sep: &str,
) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        match part {
            Expr::Concat(_) | Expr::Alt(_) => write!(f, "( {part} )")?,
            _ => write!(f, "{part}")?,
        }
    }
    Ok(())
}

/// Renders the expression in ABNF notation.
impl<R: RuleId> fmt::Display for Expr<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("\"\""),
            Self::Literal(bytes) => write_bytes(f, bytes, "%s"),
            Self::Caseless(bytes) => write_bytes(f, bytes, ""),
            Self::Class(class) => f.write_str(class.name()),
            Self::Range(lo, hi) if lo == hi => write!(f, "%x{lo:02X}"),
            Self::Range(lo, hi) => write!(f, "%x{lo:02X}-{hi:02X}"),
            Self::Concat(parts) => write_joined(f, parts, " "),
            Self::Alt(choices) => write_joined(f, choices, " / "),
            Self::Optional(inner) => write!(f, "[ {inner} ]"),
            Self::Repeat { inner, min, max } => {
                match (*min, *max) {
                    (0, None) => f.write_str("*")?,
                    (min, Some(max)) if min == max => write!(f, "{min}")?,
                    (0, Some(max)) => write!(f, "*{max}")?,
                    (min, None) => write!(f, "{min}*")?,
                    (min, Some(max)) => write!(f, "{min}*{max}")?,
                }
                write!(f, "( {inner} )")
            }
            Self::Rule(id) => f.write_str(id.name()),
        }
    }
}
