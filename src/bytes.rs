//! Byte-level scanning helpers for the annotation encodings
//!
//! Dependency encodings are anchored on the sequence `-<digits>[']*<term>`,
//! where `<term>` is `,` after the governor and `)` after the dependent.
//! Token text may contain hyphens, commas and parentheses; it never
//! produces that full sequence, so the scanners below look for it directly.

use memchr::{memchr, memchr_iter, memrchr_iter};
use std::ops::Range;

/// Copy-node marker appended to an index by graph collapsing
pub const COPY_MARK: u8 = b'\'';

/// Location of one `-<digits>[']*<term>` anchor inside a byte string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexAnchor {
    /// Offset of the hyphen; the token ends here
    pub hyphen: usize,
    /// The digit run
    pub digits: Range<usize>,
    /// Offset just past the terminator
    pub end: usize,
}

// Divide a bytestring into two at the first delim
#[inline]
pub fn bs_split_once(bytes: &[u8], delim: u8) -> Option<(&[u8], &[u8])> {
    let pos = memchr(delim, bytes)?;
    Some((&bytes[..pos], &bytes[pos + 1..]))
}

/// Try to read an anchor whose hyphen sits at `hyphen`
#[inline]
pub fn anchor_at(bytes: &[u8], hyphen: usize, term: u8) -> Option<IndexAnchor> {
    if bytes.get(hyphen) != Some(&b'-') {
        return None;
    }

    let digits_start = hyphen + 1;
    let mut pos = digits_start;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }
    let digits = digits_start..pos;

    while pos < bytes.len() && bytes[pos] == COPY_MARK {
        pos += 1;
    }

    if bytes.get(pos) != Some(&term) {
        return None;
    }

    Some(IndexAnchor {
        hyphen,
        digits,
        end: pos + 1,
    })
}

/// First anchor terminated by `term`, scanning left to right
pub fn find_first_anchor(bytes: &[u8], term: u8) -> Option<IndexAnchor> {
    memchr_iter(b'-', bytes).find_map(|hyphen| anchor_at(bytes, hyphen, term))
}

/// Last anchor terminated by `term`, scanning right to left
pub fn find_last_anchor(bytes: &[u8], term: u8) -> Option<IndexAnchor> {
    memrchr_iter(b'-', bytes).find_map(|hyphen| anchor_at(bytes, hyphen, term))
}

/// Parse a run of ASCII digits as a node index, rejecting overflow
#[inline]
pub fn parse_index(digits: &[u8]) -> Option<usize> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    atoi::atoi::<usize>(digits)
}
