//! Dependency edges and their textual encoding
//!
//! The upstream parser serializes each edge as
//!
//! ```text
//! relation(governor-index['...],dependent-index['...])
//! ```
//!
//! e.g. `nn(prices-0,oil-1)` or `conj_and(eat-2',drink-4'')`. Trailing
//! apostrophes mark copy nodes introduced by graph collapsing and carry no
//! position information.
//!
//! Decoding runs in three steps, each a separate function:
//! 1. [`split_relation`] cuts the relation label at the first `(`.
//! 2. [`decode_governor`] finds the first `-<digits>[']*,` anchor.
//! 3. [`decode_dependent`] finds the trailing `-<digits>[']*)` anchor.

use crate::bytes::{IndexAnchor, find_first_anchor, find_last_anchor, parse_index};
use crate::error::DecodeError;
use crate::token::EnumeratedToken;
use memchr::{memchr, memrchr};
use std::fmt;

/// Which endpoint of an edge to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Governor,
    Dependent,
}

/// One labeled, directed edge of a dependency graph
///
/// Edges carry no pointer to their vine; endpoints resolve to POS entries
/// through [`Vine::tagged_token`](crate::Vine::tagged_token) by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub relation: String,
    pub governor: EnumeratedToken,
    pub dependent: EnumeratedToken,
}

impl Dependency {
    pub fn new(relation: &str, governor: EnumeratedToken, dependent: EnumeratedToken) -> Self {
        Self {
            relation: relation.to_string(),
            governor,
            dependent,
        }
    }

    /// Decode one textual edge encoding
    pub fn parse(entry: &str) -> Result<Self, DecodeError> {
        let (relation, body) = split_relation(entry)?;
        let (governor, rest) = decode_governor(entry, body)?;
        let dependent = decode_dependent(entry, rest)?;

        Ok(Self::new(relation, governor, dependent))
    }

    #[inline]
    pub fn endpoint(&self, role: Role) -> &EnumeratedToken {
        match role {
            Role::Governor => &self.governor,
            Role::Dependent => &self.dependent,
        }
    }

    /// Token text on one side of the edge
    #[inline]
    pub fn token(&self, role: Role) -> &str {
        &self.endpoint(role).token
    }

    #[inline]
    pub fn has_token(&self, token: &str, role: Role) -> bool {
        self.token(role) == token
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.relation, self.governor, self.dependent)
    }
}

/// Step 1: `relation` is everything before the first `(`
pub fn split_relation(entry: &str) -> Result<(&str, &str), DecodeError> {
    let open = memchr(b'(', entry.as_bytes())
        .ok_or_else(|| DecodeError::MissingOpenParen(entry.to_string()))?;
    if open == 0 {
        return Err(DecodeError::MissingRelation(entry.to_string()));
    }

    Ok((&entry[..open], &entry[open + 1..]))
}

/// Step 2: governor token and index, plus the text after the separating comma
pub fn decode_governor<'a>(
    entry: &str,
    body: &'a str,
) -> Result<(EnumeratedToken, &'a str), DecodeError> {
    let anchor = find_first_anchor(body.as_bytes(), b',')
        .filter(|anchor| anchor.hyphen > 0)
        .ok_or_else(|| DecodeError::MissingGovernor(entry.to_string()))?;

    let position = index_of(entry, body, &anchor)?;
    let governor = EnumeratedToken::new(&body[..anchor.hyphen], position);
    Ok((governor, &body[anchor.end..]))
}

/// Step 3: dependent token and index; `rest` must end at the closing paren
///
/// The token is the last comma-delimited segment before the anchor.
pub fn decode_dependent(entry: &str, rest: &str) -> Result<EnumeratedToken, DecodeError> {
    if !rest.ends_with(')') {
        return Err(DecodeError::MissingCloseParen(entry.to_string()));
    }

    let anchor = find_last_anchor(rest.as_bytes(), b')')
        .filter(|anchor| anchor.end == rest.len() && anchor.hyphen > 0)
        .ok_or_else(|| DecodeError::MissingDependent(entry.to_string()))?;

    let span = &rest[..anchor.hyphen];
    let token = match memrchr(b',', span.as_bytes()) {
        Some(comma) => &span[comma + 1..],
        None => span,
    };

    let position = index_of(entry, rest, &anchor)?;
    Ok(EnumeratedToken::new(token, position))
}

fn index_of(entry: &str, text: &str, anchor: &IndexAnchor) -> Result<usize, DecodeError> {
    let digits = &text[anchor.digits.clone()];
    parse_index(digits.as_bytes()).ok_or_else(|| DecodeError::BadIndex {
        entry: entry.to_string(),
        index: digits.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let dep = Dependency::parse("nn(prices-0,oil-1)").unwrap();
        assert_eq!(dep.relation, "nn");
        assert_eq!(dep.governor, EnumeratedToken::new("prices", 0));
        assert_eq!(dep.dependent, EnumeratedToken::new("oil", 1));
    }

    #[test]
    fn test_parse_strips_copy_marks() {
        let dep = Dependency::parse("nn(prices-0',oil-1'')").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("prices", 0));
        assert_eq!(dep.dependent, EnumeratedToken::new("oil", 1));
    }

    #[test]
    fn test_parse_hyphenated_tokens() {
        let dep = Dependency::parse("amod(bell-pepper-2,green-1)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("bell-pepper", 2));
        assert_eq!(dep.dependent, EnumeratedToken::new("green", 1));

        let dep = Dependency::parse("dobj(re-elect-3,mayor-in-chief-12)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("re-elect", 3));
        assert_eq!(dep.dependent, EnumeratedToken::new("mayor-in-chief", 12));
    }

    #[test]
    fn test_parse_punctuation_tokens() {
        // A comma token has nothing after its last comma
        let dep = Dependency::parse("punct(said-3,,-4)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("said", 3));
        assert_eq!(dep.dependent, EnumeratedToken::new("", 4));

        let dep = Dependency::parse("punct(love-2,--5)").unwrap();
        assert_eq!(dep.dependent, EnumeratedToken::new("-", 5));

        let dep = Dependency::parse("dep(smile-4,:)-6)").unwrap();
        assert_eq!(dep.dependent, EnumeratedToken::new(":)", 6));
    }

    #[test]
    fn test_parse_tokens_with_commas() {
        // Dependent keeps only its last comma-delimited segment
        let dep = Dependency::parse("num(dollars-5,1,000-4)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("dollars", 5));
        assert_eq!(dep.dependent, EnumeratedToken::new("000", 4));

        let dep = Dependency::parse("nn(a-1,b-2,c-3)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("a", 1));
        assert_eq!(dep.dependent, EnumeratedToken::new("c", 3));

        // Governor is cut at the first anchor, so its commas survive
        let dep = Dependency::parse("prep(1,000-3,of-4)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("1,000", 3));
        assert_eq!(dep.dependent, EnumeratedToken::new("of", 4));
    }

    #[test]
    fn test_parse_empty_segments() {
        assert_eq!(
            Dependency::parse("(a-1,b-2)"),
            Err(DecodeError::MissingRelation("(a-1,b-2)".to_string()))
        );
        assert_eq!(
            Dependency::parse("nn(-1,b-2)"),
            Err(DecodeError::MissingGovernor("nn(-1,b-2)".to_string()))
        );
        assert_eq!(
            Dependency::parse("nn(a-1,-2)"),
            Err(DecodeError::MissingDependent("nn(a-1,-2)".to_string()))
        );
    }

    #[test]
    fn test_parse_relation_with_particle() {
        let dep = Dependency::parse("prep_of(cup-2,coffee-4)").unwrap();
        assert_eq!(dep.relation, "prep_of");
    }

    #[test]
    fn test_parse_root() {
        let dep = Dependency::parse("root(ROOT-0,love-2)").unwrap();
        assert_eq!(dep.governor, EnumeratedToken::new("ROOT", 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Dependency::parse("not-an-edge"),
            Err(DecodeError::MissingOpenParen("not-an-edge".to_string()))
        );
        assert_eq!(
            Dependency::parse("nn(prices-x,oil-1)"),
            Err(DecodeError::MissingGovernor("nn(prices-x,oil-1)".to_string()))
        );
        assert_eq!(
            Dependency::parse("nn(prices-0,oil-1"),
            Err(DecodeError::MissingCloseParen("nn(prices-0,oil-1".to_string()))
        );
        assert_eq!(
            Dependency::parse("nn(prices-0,oil-x)"),
            Err(DecodeError::MissingDependent("nn(prices-0,oil-x)".to_string()))
        );
        assert!(matches!(
            Dependency::parse("nn(prices-99999999999999999999,oil-1)"),
            Err(DecodeError::BadIndex { .. })
        ));
        assert!(Dependency::parse("").is_err());
        assert!(Dependency::parse("nn()").is_err());
    }

    #[test]
    fn test_steps_independently() {
        let (relation, body) = split_relation("amod(pepper-2,green-0)").unwrap();
        assert_eq!(relation, "amod");
        assert_eq!(body, "pepper-2,green-0)");

        let (governor, rest) = decode_governor("", body).unwrap();
        assert_eq!(governor, EnumeratedToken::new("pepper", 2));
        assert_eq!(rest, "green-0)");

        let dependent = decode_dependent("", rest).unwrap();
        assert_eq!(dependent, EnumeratedToken::new("green", 0));
    }

    #[test]
    fn test_endpoints() {
        let dep = Dependency::parse("amod(pepper-2,green-0)").unwrap();
        assert_eq!(dep.token(Role::Governor), "pepper");
        assert_eq!(dep.token(Role::Dependent), "green");
        assert!(dep.has_token("green", Role::Dependent));
        assert!(!dep.has_token("green", Role::Governor));
    }

    #[test]
    fn test_display_round_trip() {
        let dep = Dependency::parse("amod(bell-pepper-2,green-1)").unwrap();
        assert_eq!(dep.to_string(), "amod(bell-pepper-2,green-1)");
        assert_eq!(Dependency::parse(&dep.to_string()).unwrap(), dep);
    }
}
