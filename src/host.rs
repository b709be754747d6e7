//! Host classification.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host = IP-literal / IPv4address / reg-name
//! ```
//!
//! A dotted-numeric host such as `192.0.2.1` is valid as both
//! `IPv4address` and `reg-name`. The grammar keeps that ambiguity; it is
//! resolved here, after the host span has been chosen.

use std::fmt;

use crate::grammar::grammar;
use crate::rule::Rule;

/// Which `host` alternative a decomposed host belongs to.
///
/// Preference when several apply: `IpLiteral`, then `Ipv4`, then `RegName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Bracketed IPv6 address or IPvFuture, e.g. `[::1]`
    IpLiteral,
    /// Dotted-decimal IPv4 address matching the whole host, e.g. `192.0.2.1`
    Ipv4,
    /// Registered name, possibly empty, e.g. `example.com`
    RegName,
}

impl HostKind {
    /// Classifies `host`, or returns `None` when the whole of it is not a
    /// `host` match.
    ///
    /// The span is `Ipv4` only when `IPv4address` matches it exactly; a
    /// span such as `1.2.3.456` is a reg-name even though `IPv4address`
    /// matches its prefix `1.2.3.45`.
    #[must_use]
    pub fn of(host: &[u8]) -> Option<Self> {
        grammar()
            .is_match(Rule::Host, host)
            .then(|| Self::classify(host))
    }

    /// Classifies a span already known to be a complete `host` match.
    /// Anything else falls through to `RegName`.
    pub(crate) fn classify(host: &[u8]) -> Self {
        if host.first() == Some(&b'[') && grammar().is_match(Rule::IpLiteral, host) {
            Self::IpLiteral
        } else if grammar().is_match(Rule::Ipv4Address, host) {
            Self::Ipv4
        } else {
            Self::RegName
        }
    }

    /// The RFC 3986 rule for this kind.
    #[must_use]
    pub const fn rule(self) -> Rule {
        match self {
            Self::IpLiteral => Rule::IpLiteral,
            Self::Ipv4 => Rule::Ipv4Address,
            Self::RegName => Rule::RegName,
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule().name())
    }
}
