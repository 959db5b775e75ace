//! Triple set - an ordered collection of triples
//!
//! The `TripleSet` type uses `Vec<Triple>` to preserve duplicates and source
//! order (bag semantics). Call `dedupe()` explicitly if you want set semantics.

use crate::Triple;
use std::collections::HashSet;

/// An ordered collection of triples
///
/// # Design Decisions
///
/// - **Vec storage**: extraction order is meaningful to downstream passes
///   (later `rdfs:domain` triples overwrite earlier ones), so it is kept.
/// - **Explicit deduplication**: `dedupe()` keeps the first occurrence and
///   does not reorder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripleSet {
    triples: Vec<Triple>,
}

impl TripleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` triples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triples: Vec::with_capacity(capacity),
        }
    }

    /// Append a triple
    pub fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Get all triples (consuming the set)
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Triples whose predicate equals `predicate` exactly
    pub fn with_predicate<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| t.predicate == predicate)
    }

    /// `@type` assertions, in order
    pub fn type_assertions(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter().filter(|t| t.is_type_assertion())
    }

    /// Unique subjects in first-seen order
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| t.subject.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Remove duplicate triples, keeping the first occurrence of each
    pub fn dedupe(&mut self) {
        let mut seen = HashSet::with_capacity(self.triples.len());
        self.triples.retain(|t| seen.insert(t.clone()));
    }
}

impl IntoIterator for TripleSet {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripleSet {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for TripleSet {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        TripleSet {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for TripleSet {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_set() -> TripleSet {
        let mut set = TripleSet::new();
        set.push(Triple::literal("ex:bob", "ex:name", "Bob", None, None));
        set.push(Triple::rdf_type("ex:bob", "ex:Person"));
        set.push(Triple::literal("ex:alice", "ex:name", "Alice", None, None));
        set.push(Triple::iri("ex:alice", "ex:knows", "ex:bob"));
        set
    }

    #[test]
    fn test_set_creation() {
        let set = TripleSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_filters() {
        let set = make_test_set();
        assert_eq!(set.with_predicate("ex:name").count(), 2);
        assert_eq!(set.type_assertions().count(), 1);
        assert_eq!(set.with_predicate("ex:missing").count(), 0);
    }

    #[test]
    fn test_subjects_first_seen_order() {
        let set = make_test_set();
        assert_eq!(set.subjects(), vec!["ex:bob", "ex:alice"]);
    }

    #[test]
    fn test_dedupe_keeps_first_and_order() {
        let mut set = make_test_set();
        set.push(Triple::rdf_type("ex:bob", "ex:Person"));
        set.push(Triple::literal("ex:bob", "ex:name", "Bob", None, None));
        assert_eq!(set.len(), 6);

        set.dedupe();
        assert_eq!(set, make_test_set());
    }

    #[test]
    fn test_dedupe_distinguishes_metadata() {
        let mut set = TripleSet::new();
        set.push(Triple::literal("ex:s", "ex:p", "1", None, None));
        set.push(Triple::literal("ex:s", "ex:p", "1", None, Some("xsd:integer".into())));
        set.dedupe();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut set: TripleSet = vec![Triple::iri("ex:s", "ex:p", "ex:o")]
            .into_iter()
            .collect();
        set.extend(vec![Triple::rdf_type("ex:s", "ex:C")]);
        assert_eq!(set.len(), 2);

        let predicates: Vec<_> = set.into_iter().map(|t| t.predicate).collect();
        assert_eq!(predicates, vec!["ex:p", "@type"]);
    }
}
