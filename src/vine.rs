//! The vine record
//!
//! A [`Vine`] is one input document plus its decoded POS sequence and
//! dependency edges. Everything decoded is fixed at construction; the only
//! thing that changes afterwards is the append-only log of matched filters.

use crate::dependency::{Dependency, Role};
use crate::error::{DecodeError, VineError};
use crate::index::RelationIndex;
use crate::phrase::Phrase;
use crate::token::TaggedToken;
use serde_json::{Map, Value};
use std::sync::{Mutex, PoisonError};

pub const FIELD_ID: &str = "id";
pub const FIELD_URL: &str = "url";
pub const FIELD_TEXT: &str = "text";
pub const FIELD_SCRUBBED_TEXT: &str = "scrubbed_text";
pub const FIELD_POS_TAGS: &str = "pos_tags";
pub const FIELD_GRAMMAR_DEPENDENCIES: &str = "grammar_dependencies";

/// Key under which [`Vine::to_json`] writes the matched filter names
pub const FIELD_MATCHED_FILTERS: &str = "matched_filters";

/// Append-only list of filter names, safe to append from several threads
#[derive(Debug, Default)]
pub struct MatchLog(Mutex<Vec<String>>);

impl MatchLog {
    pub fn append(&self, name: &str) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_string());
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A social-media record with its NLP annotations
#[derive(Debug)]
pub struct Vine {
    source: Map<String, Value>,
    id: String,
    url: String,
    text: String,
    scrubbed_text: String,
    tagged_tokens: Vec<TaggedToken>,
    dependencies: Vec<Dependency>,
    index: RelationIndex,
    matches: MatchLog,
}

impl Vine {
    /// Build a vine from a JSON document
    ///
    /// Fields are checked in a fixed order and the first missing,
    /// mistyped or undecodable one aborts construction.
    pub fn from_json(document: &Value) -> Result<Self, VineError> {
        let object = document.as_object().ok_or(VineError::NotAnObject)?;

        let id = string_field(object, FIELD_ID)?;
        let url = string_field(object, FIELD_URL)?;
        let text = string_field(object, FIELD_TEXT)?;
        let scrubbed_text = string_field(object, FIELD_SCRUBBED_TEXT)?;
        let tagged_tokens = decode_array(object, FIELD_POS_TAGS, TaggedToken::parse)?;
        let dependencies = decode_array(object, FIELD_GRAMMAR_DEPENDENCIES, Dependency::parse)?;
        let index = RelationIndex::build(&dependencies);

        Ok(Self {
            source: object.clone(),
            id,
            url,
            text,
            scrubbed_text,
            tagged_tokens,
            dependencies,
            index,
            matches: MatchLog::default(),
        })
    }

    /// Build a vine, logging and discarding any construction error
    pub fn new_instance(document: &Value) -> Option<Self> {
        match Self::from_json(document) {
            Ok(vine) => Some(vine),
            Err(e) => {
                let id = document.get(FIELD_ID).and_then(Value::as_str).unwrap_or("?");
                log::warn!("Skipping vine {}: {}", id, e);
                None
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scrubbed_text(&self) -> &str {
        &self.scrubbed_text
    }

    pub fn tagged_tokens(&self) -> &[TaggedToken] {
        &self.tagged_tokens
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// The document the vine was built from
    pub fn source(&self) -> &Map<String, Value> {
        &self.source
    }

    pub fn contains_relation(&self, relation: &str) -> bool {
        self.index.contains(relation)
    }

    /// Edges labeled `relation`, in document order
    pub fn dependencies_by_relation(&self, relation: &str) -> impl Iterator<Item = &Dependency> {
        self.index
            .get(relation)
            .iter()
            .map(|&id| &self.dependencies[id])
    }

    pub fn contains_tagged_token(&self, tagged: &TaggedToken) -> bool {
        self.tagged_tokens.contains(tagged)
    }

    /// Whole-word, case-insensitive search of the raw or scrubbed text
    ///
    /// `"dog"` does not match `"doghouse"`.
    pub fn contains_exact_word(&self, word: &str, scrubbed: bool) -> bool {
        let text = if scrubbed {
            &self.scrubbed_text
        } else {
            &self.text
        };
        let target = word.to_lowercase();

        text.split_whitespace().any(|w| w.to_lowercase() == target)
    }

    /// POS entry for one endpoint of an edge
    ///
    /// Resolved by position; `None` if the position is out of range or the
    /// entry there holds a different word.
    pub fn tagged_token(&self, dep: &Dependency, role: Role) -> Option<&TaggedToken> {
        let endpoint = dep.endpoint(role);
        // A misaligned entry is dropped here, never returned in its place
        self.tagged_tokens
            .get(endpoint.position)
            .filter(|tagged| tagged.token == endpoint.token)
    }

    /// Resolve one side of each edge to its POS entry, skipping unresolved ones
    pub fn tagged_tokens_for<'a>(
        &'a self,
        deps: impl IntoIterator<Item = &'a Dependency>,
        role: Role,
    ) -> Vec<&'a TaggedToken> {
        deps.into_iter()
            .filter_map(|dep| self.tagged_token(dep, role))
            .collect()
    }

    /// Does `phrase` occur with its root on the `role` side of an edge in
    /// the `relations` pool (empty pool: any relation), each modifier
    /// attached directly to the root?
    pub fn matches_phrase(&self, phrase: &str, relations: &[&str], role: Role) -> bool {
        Phrase::parse(phrase).is_some_and(|p| p.matches(self, relations, role))
    }

    /// Like [`Vine::matches_phrase`], with the root anchored in one edge
    pub fn matches_phrase_at(&self, phrase: &str, anchor: &Dependency, role: Role) -> bool {
        Phrase::parse(phrase).is_some_and(|p| p.matches_at(self, anchor, role))
    }

    /// Record that the filter `name` accepted this vine
    pub fn record_match(&self, name: &str) {
        self.matches.append(name);
    }

    pub fn matched_filters(&self) -> Vec<String> {
        self.matches.snapshot()
    }

    /// The source document with the matched filter names attached
    pub fn to_json(&self) -> Value {
        let mut object = self.source.clone();
        let filters = self
            .matches
            .snapshot()
            .into_iter()
            .map(Value::String)
            .collect();
        object.insert(FIELD_MATCHED_FILTERS.to_string(), Value::Array(filters));
        Value::Object(object)
    }
}

fn string_field(object: &Map<String, Value>, field: &'static str) -> Result<String, VineError> {
    let value = object.get(field).ok_or(VineError::MissingField(field))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or(VineError::TypeMismatch {
            field,
            expected: "a string",
        })
}

fn decode_array<T>(
    object: &Map<String, Value>,
    field: &'static str,
    decode: impl Fn(&str) -> Result<T, DecodeError>,
) -> Result<Vec<T>, VineError> {
    let entries = object
        .get(field)
        .ok_or(VineError::MissingField(field))?
        .as_array()
        .ok_or(VineError::TypeMismatch {
            field,
            expected: "an array",
        })?;

    entries
        .iter()
        .enumerate()
        .map(|(entry, value)| {
            let s = value.as_str().ok_or(VineError::TypeMismatch {
                field,
                expected: "an array of strings",
            })?;
            decode(s).map_err(|source| VineError::Decode {
                field,
                entry,
                source,
            })
        })
        .collect()
}
