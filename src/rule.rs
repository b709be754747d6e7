//! Names of the RFC 3986 productions.

use std::fmt;
use std::str::FromStr;

use abnf_match::RuleId;

use crate::error::UnknownRule;

macro_rules! rules {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// One production of the RFC 3986 grammar (Appendix A).
        ///
        /// Every rule can be evaluated on its own with [`find`](crate::find),
        /// which returns the full set of match lengths.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Rule {
            $($(#[$doc])* $variant,)+
        }

        impl Rule {
            /// Every rule, in declaration order.
            pub const ALL: &'static [Rule] = &[$(Rule::$variant,)+];

            /// The production name as written in RFC 3986.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Rule::$variant => $name,)+
                }
            }
        }
    };
}

rules! {
    /// `URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
    Uri => "URI",
    /// `hier-part = "//" authority path-abempty / path-absolute / path-rootless / path-empty`
    HierPart => "hier-part",
    /// `URI-reference = URI / relative-ref`
    UriReference => "URI-reference",
    /// `absolute-URI = scheme ":" hier-part [ "?" query ]`
    AbsoluteUri => "absolute-URI",
    /// `relative-ref = relative-part [ "?" query ] [ "#" fragment ]`
    RelativeRef => "relative-ref",
    /// `relative-part = "//" authority path-abempty / path-absolute / path-noscheme / path-empty`
    RelativePart => "relative-part",
    /// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    Scheme => "scheme",
    /// `authority = [ userinfo "@" ] host [ ":" port ]`
    Authority => "authority",
    /// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
    UserInfo => "userinfo",
    /// `host = IP-literal / IPv4address / reg-name`
    Host => "host",
    /// `port = *DIGIT`
    Port => "port",
    /// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
    IpLiteral => "IP-literal",
    /// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
    IpvFuture => "IPvFuture",
    /// The nine zero-compression forms of an IPv6 address.
    Ipv6Address => "IPv6address",
    /// `h16 = 1*4HEXDIG`
    H16 => "h16",
    /// `ls32 = ( h16 ":" h16 ) / IPv4address`
    Ls32 => "ls32",
    /// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
    Ipv4Address => "IPv4address",
    /// A decimal octet, `0` through `255`.
    DecOctet => "dec-octet",
    /// `reg-name = *( unreserved / pct-encoded / sub-delims )`
    RegName => "reg-name",
    /// `path = path-abempty / path-absolute / path-noscheme / path-rootless / path-empty`
    Path => "path",
    /// `path-abempty = *( "/" segment )`
    PathAbempty => "path-abempty",
    /// `path-absolute = "/" [ segment-nz *( "/" segment ) ]`
    PathAbsolute => "path-absolute",
    /// `path-noscheme = segment-nz-nc *( "/" segment )`
    PathNoScheme => "path-noscheme",
    /// `path-rootless = segment-nz *( "/" segment )`
    PathRootless => "path-rootless",
    /// `path-empty = 0<pchar>`
    PathEmpty => "path-empty",
    /// `segment = *pchar`
    Segment => "segment",
    /// `segment-nz = 1*pchar`
    SegmentNz => "segment-nz",
    /// `segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )`
    SegmentNzNc => "segment-nz-nc",
    /// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
    Pchar => "pchar",
    /// `query = *( pchar / "/" / "?" )`
    Query => "query",
    /// `fragment = *( pchar / "/" / "?" )`
    Fragment => "fragment",
    /// `pct-encoded = "%" HEXDIG HEXDIG`
    PctEncoded => "pct-encoded",
    /// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
    Unreserved => "unreserved",
    /// `reserved = gen-delims / sub-delims`
    Reserved => "reserved",
    /// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
    GenDelims => "gen-delims",
    /// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
    SubDelims => "sub-delims",
}

impl RuleId for Rule {
    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        Self::name(self)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks a rule up by its RFC 3986 name. ABNF rule names are
/// case-insensitive, so `"ipv6ADDRESS"` resolves too.
impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRule {
                name: s.to_string(),
            })
    }
}
