//! Core character classes from RFC 5234, Appendix B.1.

/// A single-octet core rule from RFC 5234.
///
/// Multi-octet core rules (`CRLF`, `LWSP`) are compositions and are built
/// with the combinators instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `ALPHA = %x41-5A / %x61-7A`
    Alpha,
    /// `BIT = "0" / "1"`
    Bit,
    /// `CHAR = %x01-7F`
    Char,
    /// `CR = %x0D`
    Cr,
    /// `CTL = %x00-1F / %x7F`
    Ctl,
    /// `DIGIT = %x30-39`
    Digit,
    /// `DQUOTE = %x22`
    Dquote,
    /// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
    ///
    /// ABNF strings are case-insensitive, so lowercase `a`-`f` match too.
    HexDig,
    /// `HTAB = %x09`
    Htab,
    /// `LF = %x0A`
    Lf,
    /// `OCTET = %x00-FF`
    Octet,
    /// `SP = %x20`
    Sp,
    /// `VCHAR = %x21-7E`
    Vchar,
    /// `WSP = SP / HTAB`
    Wsp,
}

impl CharClass {
    /// Returns true if `byte` belongs to the class.
    #[must_use]
    pub const fn contains(self, byte: u8) -> bool {
        match self {
            Self::Alpha => byte.is_ascii_alphabetic(),
            Self::Bit => matches!(byte, b'0' | b'1'),
            Self::Char => matches!(byte, 0x01..=0x7F),
            Self::Cr => byte == b'\r',
            Self::Ctl => matches!(byte, 0x00..=0x1F | 0x7F),
            Self::Digit => byte.is_ascii_digit(),
            Self::Dquote => byte == b'"',
            Self::HexDig => byte.is_ascii_hexdigit(),
            Self::Htab => byte == b'\t',
            Self::Lf => byte == b'\n',
            Self::Octet => true,
            Self::Sp => byte == b' ',
            Self::Vchar => matches!(byte, 0x21..=0x7E),
            Self::Wsp => matches!(byte, b' ' | b'\t'),
        }
    }

    /// The core rule name as written in ABNF.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alpha => "ALPHA",
            Self::Bit => "BIT",
            Self::Char => "CHAR",
            Self::Cr => "CR",
            Self::Ctl => "CTL",
            Self::Digit => "DIGIT",
            Self::Dquote => "DQUOTE",
            Self::HexDig => "HEXDIG",
            Self::Htab => "HTAB",
            Self::Lf => "LF",
            Self::Octet => "OCTET",
            Self::Sp => "SP",
            Self::Vchar => "VCHAR",
            Self::Wsp => "WSP",
        }
    }
}
