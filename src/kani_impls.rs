//! Kani proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{HostKind, Rule, Uri, find, is_match};

/// Bytes that exercise every branch of the URI grammar
const URI_BYTES: &[u8] = b"a1+:/?#[]@%.:";

fn arbitrary_uri_byte() -> u8 {
    let idx: usize = kani::any();
    URI_BYTES[idx % URI_BYTES.len()]
}

fn arbitrary_input<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    for b in &mut bytes {
        *b = arbitrary_uri_byte();
    }
    bytes
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: every dec-octet match is a decimal number no greater than 255
#[kani::proof]
#[kani::unwind(5)]
fn proof_dec_octet_in_range() {
    let bytes: [u8; 3] = kani::any();
    for &len in find(Rule::DecOctet, &bytes).as_slice() {
        let digits = &bytes[..len];
        assert!(digits.iter().all(u8::is_ascii_digit));
        let value = digits
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
        assert!(value <= 255);
        assert!(len == 1 || digits[0] != b'0');
    }
}

/// Proof: match lengths never exceed the input
#[kani::proof]
#[kani::unwind(6)]
fn proof_matches_within_input() {
    let bytes: [u8; 4] = arbitrary_input();
    let matches = find(Rule::Segment, &bytes);
    assert!(matches.as_slice().iter().all(|&len| len <= bytes.len()));
    assert!(matches.contains(0));
}

/// Proof: a parsed URI serializes back to its input
#[kani::proof]
#[kani::unwind(6)]
fn proof_parse_roundtrip() {
    let bytes: [u8; 4] = arbitrary_input();
    if let Ok(uri) = Uri::parse(&bytes) {
        assert_eq!(uri.to_bytes(), bytes);
        assert!(is_match(Rule::Uri, &bytes));
    }
}

/// Proof: a strictly parsed URI never keeps a remainder
#[kani::proof]
#[kani::unwind(6)]
fn proof_strict_parse_has_no_remainder() {
    let bytes: [u8; 4] = arbitrary_input();
    if let Ok(uri) = Uri::parse(&bytes) {
        assert!(uri.remainder().is_empty());
        assert_eq!(uri.host().is_some(), uri.double_slash().is_some());
        assert_eq!(uri.user_info().is_some(), uri.at_sign().is_some());
    }
}

/// Proof: classification only reports IPv4 for exact matches
#[kani::proof]
#[kani::unwind(9)]
fn proof_ipv4_classification_is_exact() {
    let bytes: [u8; 7] = kani::any();
    if HostKind::classify(&bytes) == HostKind::Ipv4 {
        assert!(is_match(Rule::Ipv4Address, &bytes));
    }
}
