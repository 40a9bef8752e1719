//! Token value types
//!
//! An [`EnumeratedToken`] is a word occurrence as numbered by the upstream
//! dependency parser; a [`TaggedToken`] is one entry of a vine's POS sequence.

use crate::bytes::bs_split_once;
use crate::error::DecodeError;
use std::fmt;

/// Position of a word in the parser's node enumeration
pub type Position = usize;

/// A token paired with its node position
///
/// The position disambiguates repeated words ("the" ... "the").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumeratedToken {
    pub token: String,
    pub position: Position,
}

impl EnumeratedToken {
    pub fn new(token: &str, position: Position) -> Self {
        Self {
            token: token.to_string(),
            position,
        }
    }
}

impl fmt::Display for EnumeratedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.token, self.position)
    }
}

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    pub tag: String,
    pub token: String,
}

impl TaggedToken {
    pub fn new(tag: &str, token: &str) -> Self {
        Self {
            tag: tag.to_string(),
            token: token.to_string(),
        }
    }

    /// Decode a `TAG-token` entry, splitting once on the first hyphen
    pub fn parse(entry: &str) -> Result<Self, DecodeError> {
        let (tag, token) = bs_split_once(entry.as_bytes(), b'-')
            .ok_or_else(|| DecodeError::MissingTagSeparator(entry.to_string()))?;

        // Both halves border an ASCII '-', so they are valid UTF-8
        let tag = &entry[..tag.len()];
        let token = &entry[entry.len() - token.len()..];

        Ok(Self::new(tag, token))
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tag, self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_token() {
        let t = TaggedToken::parse("NN-pepper").unwrap();
        assert_eq!(t.tag, "NN");
        assert_eq!(t.token, "pepper");
    }

    #[test]
    fn test_parse_tagged_token_keeps_hyphens_in_token() {
        let t = TaggedToken::parse("JJ-well-known").unwrap();
        assert_eq!(t, TaggedToken::new("JJ", "well-known"));

        // Punctuation token that is itself a hyphen
        let t = TaggedToken::parse(":--").unwrap();
        assert_eq!(t, TaggedToken::new(":", "-"));
    }

    #[test]
    fn test_parse_tagged_token_unicode() {
        let t = TaggedToken::parse("NN-café").unwrap();
        assert_eq!(t.token, "café");
    }

    #[test]
    fn test_parse_tagged_token_without_separator() {
        assert_eq!(
            TaggedToken::parse("NNpepper"),
            Err(DecodeError::MissingTagSeparator("NNpepper".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(EnumeratedToken::new("oil", 1).to_string(), "oil-1");
        assert_eq!(TaggedToken::new("NN", "oil").to_string(), "NN-oil");
    }
}
