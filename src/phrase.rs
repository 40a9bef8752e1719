//! Multi-word phrase matching over a vine's dependency graph
//!
//! A phrase such as "green bell pepper" is read as a flat star: the last
//! word is the root, and every earlier word must modify the root through
//! a direct `amod` or `nn` edge. Modifiers of modifiers are not followed.
//!
//! Matching runs in two stages:
//! 1. The root must sit on the requested side of an anchoring edge. If it
//!    doesn't, matching stops there.
//! 2. Each modifier word is checked against the modifier edges whose
//!    governor is the root.

use crate::dependency::{Dependency, Role};
use crate::vine::Vine;

/// Relations that attach a modifier word directly to its head noun
pub const MODIFIER_RELATIONS: [&str; 2] = ["amod", "nn"];

/// A whitespace-delimited n-gram split into modifiers and a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase<'a> {
    words: Vec<&'a str>,
}

impl<'a> Phrase<'a> {
    /// Split a phrase into words; `None` if it has no words at all
    pub fn parse(text: &'a str) -> Option<Self> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// The head word (the last one)
    pub fn root(&self) -> &'a str {
        self.words[self.words.len() - 1]
    }

    /// Candidate modifiers, left to right
    pub fn modifiers(&self) -> &[&'a str] {
        &self.words[..self.words.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is the root on the `role` side of an edge whose relation is in
    /// `relations`? An empty pool accepts every relation.
    pub fn root_anchored(&self, vine: &Vine, relations: &[&str], role: Role) -> bool {
        let root = self.root();
        if relations.is_empty() {
            vine.dependencies().iter().any(|dep| dep.has_token(root, role))
        } else {
            relations.iter().any(|relation| {
                vine.dependencies_by_relation(relation)
                    .any(|dep| dep.has_token(root, role))
            })
        }
    }

    /// Per-word satisfaction, root slot last
    ///
    /// A modifier slot is true when some edge labeled with one of
    /// `modifier_relations` has the modifier as dependent and the root as
    /// governor.
    pub fn satisfaction(
        &self,
        vine: &Vine,
        root_anchored: bool,
        modifier_relations: &[&str],
    ) -> Vec<bool> {
        let mut satisfied = vec![false; self.words.len()];
        let last = satisfied.len() - 1;
        satisfied[last] = root_anchored;

        if !root_anchored || self.words.len() == 1 {
            return satisfied;
        }

        let root = self.root();
        for relation in modifier_relations {
            for dep in vine.dependencies_by_relation(relation) {
                if !dep.has_token(root, Role::Governor) {
                    continue;
                }
                for (slot, word) in self.modifiers().iter().enumerate() {
                    if dep.has_token(word, Role::Dependent) {
                        satisfied[slot] = true;
                    }
                }
            }
        }

        satisfied
    }

    /// Match with the root anchored in a relation pool
    pub fn matches(&self, vine: &Vine, relations: &[&str], role: Role) -> bool {
        self.matches_with(vine, relations, role, &MODIFIER_RELATIONS)
    }

    /// Like [`Phrase::matches`], with a custom set of modifier relations
    pub fn matches_with(
        &self,
        vine: &Vine,
        relations: &[&str],
        role: Role,
        modifier_relations: &[&str],
    ) -> bool {
        if !self.root_anchored(vine, relations, role) {
            return false;
        }
        all_satisfied(&self.satisfaction(vine, true, modifier_relations))
    }

    /// Match with the root anchored in one given edge
    pub fn matches_at(&self, vine: &Vine, anchor: &Dependency, role: Role) -> bool {
        if !anchor.has_token(self.root(), role) {
            return false;
        }
        all_satisfied(&self.satisfaction(vine, true, &MODIFIER_RELATIONS))
    }
}

#[inline]
fn all_satisfied(satisfied: &[bool]) -> bool {
    satisfied.iter().all(|&s| s)
}
