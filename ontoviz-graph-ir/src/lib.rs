//! Triple intermediate representation
//!
//! This crate provides the flat triple model produced from JSON-LD node
//! arrays and consumed by the schema builder.
//!
//! # Key Design Principles
//!
//! 1. **IRIs as written** - Subjects, predicates and IRI objects keep the
//!    spelling of the source document (full IRI or CURIE). No expansion.
//!
//! 2. **Lexical objects** - Every object is a string. Literal metadata
//!    (term kind, language, datatype) travels alongside it.
//!
//! 3. **Bag semantics by default** - `TripleSet` preserves duplicates and
//!    source order. Call `dedupe()` explicitly for set semantics.
//!
//! # Example
//!
//! ```
//! use ontoviz_graph_ir::{Triple, TripleSet, TermKind};
//!
//! let mut triples = TripleSet::new();
//! triples.push(Triple::literal("ex:Person1", "ex:name", "Alice", None, None));
//! triples.push(Triple::rdf_type("ex:Person1", "ex:Person"));
//!
//! assert_eq!(triples.len(), 2);
//! assert_eq!(triples.type_assertions().count(), 1);
//! ```

pub mod datatype;
mod graph;
mod triple;

pub use graph::TripleSet;
pub use triple::{TermKind, Triple, TripleError, TYPE_PREDICATE};
