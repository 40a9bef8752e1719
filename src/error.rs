//! Error types for decoding annotations and building vines

use std::path::PathBuf;
use thiserror::Error;

/// A single POS entry or dependency encoding could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("decode error: no '(' in dependency {0:?}")]
    MissingOpenParen(String),

    #[error("decode error: empty relation in dependency {0:?}")]
    MissingRelation(String),

    #[error("decode error: no closing ')' in dependency {0:?}")]
    MissingCloseParen(String),

    #[error("decode error: no governor token-index pair in dependency {0:?}")]
    MissingGovernor(String),

    #[error("decode error: no dependent token-index pair in dependency {0:?}")]
    MissingDependent(String),

    #[error("decode error: invalid index {index:?} in dependency {entry:?}")]
    BadIndex { entry: String, index: String },

    #[error("decode error: no '-' between tag and token in POS entry {0:?}")]
    MissingTagSeparator(String),
}

/// A document could not be turned into a [`Vine`](crate::Vine)
#[derive(Debug, Error)]
pub enum VineError {
    #[error("vine error: document is not a JSON object")]
    NotAnObject,

    #[error("vine error: missing field {0:?}")]
    MissingField(&'static str),

    #[error("vine error: field {field:?} is not {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("vine error: bad entry {entry} in field {field:?}: {source}")]
    Decode {
        field: &'static str,
        entry: usize,
        #[source]
        source: DecodeError,
    },
}

/// Reading a dataset of vines failed
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset error: failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset error: invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset error: invalid vine on line {line}: {source}")]
    Vine {
        line: usize,
        #[source]
        source: VineError,
    },

    #[error("dataset error: {0}")]
    Glob(#[from] glob::PatternError),
}
