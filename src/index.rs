//! Inverted index from relation label to edges
//!
//! Built once when a vine is constructed, so relation lookups made by the
//! phrase matcher and by filters don't rescan the whole edge list.

use crate::dependency::Dependency;
use rustc_hash::FxHashMap;

/// Index of an edge in its vine's dependency list
pub type EdgeId = usize;

/// Edge ids grouped by relation label, in edge order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationIndex {
    by_relation: FxHashMap<String, Vec<EdgeId>>,
}

impl RelationIndex {
    /// Build an index over a vine's edges
    pub fn build(dependencies: &[Dependency]) -> Self {
        let mut index = Self::default();
        for (id, dep) in dependencies.iter().enumerate() {
            index
                .by_relation
                .entry(dep.relation.clone())
                .or_default()
                .push(id);
        }
        index
    }

    /// Edge ids labeled `relation`; empty if there are none
    pub fn get(&self, relation: &str) -> &[EdgeId] {
        self.by_relation
            .get(relation)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, relation: &str) -> bool {
        self.by_relation.contains_key(relation)
    }
}
