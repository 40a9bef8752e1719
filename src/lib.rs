//! Vinefilter: POS and dependency-grammar filters for short social-media records
//!
//! Each record ("vine") arrives with annotations from an external parser:
//! `TAG-token` POS entries and dependency edges encoded as
//! `relation(governor-i,dependent-j)`. This crate decodes those encodings and
//! answers structural questions about them, most notably whether a
//! multi-word phrase occurs as a head word with its modifiers attached.

pub mod bytes; // Anchor scanning for the edge encoding
pub mod dataset; // JSON Lines input
pub mod dependency; // Dependency edges and their decoder
pub mod error;
pub mod index; // Relation label -> edge ids
pub mod phrase; // Phrase matching over modifier edges
pub mod token; // Enumerated and tagged tokens
pub mod vine; // The record type

// Python bindings
#[cfg(feature = "pyo3")]
pub mod python;

// Re-exports for convenience
pub use dataset::{Dataset, VineReader};
pub use dependency::{Dependency, Role};
pub use error::{DatasetError, DecodeError, VineError};
pub use phrase::{MODIFIER_RELATIONS, Phrase};
pub use token::{EnumeratedToken, TaggedToken};
pub use vine::Vine;
