//! JSON-LD node arrays for ontoviz
//!
//! This library provides:
//! - A typed node model ([`JsonLdNode`], [`NodeValue`]) built once from
//!   `serde_json::Value` input
//! - An id-indexed [`NodeGraph`]
//! - IRI helpers (local names, CURIE detection)
//! - Triple extraction into `ontoviz-graph-ir`
//! - Label resolution with fallback chains
//!
//! # Example
//!
//! ```
//! use ontoviz_json_ld::{extract_triples, LabelResolver, NodeGraph};
//! use serde_json::json;
//!
//! let graph = NodeGraph::from_json(&json!([
//!     {"@id": "ex:Person1", "@type": "ex:Person", "ex:name": "Alice"}
//! ])).unwrap();
//!
//! let triples = extract_triples(&graph);
//! assert_eq!(triples.len(), 2);
//!
//! let labels = LabelResolver::new(&graph);
//! assert_eq!(labels.preferred_label("ex:Person", Some("en")).unwrap(), "Person");
//! ```

pub mod adapter;
pub mod error;
pub mod graph;
pub mod iri;
pub mod label;
pub mod node;

pub use adapter::{extract_node_triples, extract_triples, extract_triples_from_json};
pub use error::{JsonLdError, Result};
pub use graph::NodeGraph;
pub use label::LabelResolver;
pub use node::{JsonLdNode, Literal, NodeValue, Primitive};
