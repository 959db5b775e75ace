//! Triple extraction from JSON-LD nodes
//!
//! Flattens each node into triples:
//!
//! - Reference values produce IRI triples
//! - `@value` objects produce literal triples carrying `@language`, and a
//!   datatype of `@type`, else `rdf:langString` when language-tagged
//! - Bare numbers and booleans produce literals with an inferred XSD
//!   datatype; bare strings are untyped
//! - Objects of any other shape produce an untyped literal of their JSON text
//! - Each `@type` entry produces one `@type` triple, after the predicate
//!   triples of the same node
//! - `null` values, alone or inside an array, produce nothing
//!
//! # Example
//!
//! ```
//! use ontoviz_json_ld::adapter::extract_triples_from_json;
//! use serde_json::json;
//!
//! let triples = extract_triples_from_json(&json!([
//!     {"@id": "ex:Person1", "@type": "ex:Person", "ex:name": "Alice"}
//! ])).unwrap();
//!
//! assert_eq!(triples.len(), 2);
//! ```

use crate::error::Result;
use crate::graph::NodeGraph;
use crate::node::{JsonLdNode, NodeValue};
use ontoviz_graph_ir::{Triple, TripleSet};
use serde_json::Value;

/// Extract triples for every node of the graph, in graph order
pub fn extract_triples(graph: &NodeGraph) -> TripleSet {
    let mut out = TripleSet::new();
    for node in graph {
        extract_node_triples(node, &mut out);
    }
    tracing::debug!(nodes = graph.len(), triples = out.len(), "extracted triples");
    out
}

/// Parse a JSON node array and extract its triples
///
/// Fails with `NotAnArray` (or another shape error) before any triple is
/// produced if the input is malformed.
pub fn extract_triples_from_json(value: &Value) -> Result<TripleSet> {
    let graph = NodeGraph::from_json(value)?;
    Ok(extract_triples(&graph))
}

/// Append the triples of a single node
pub fn extract_node_triples(node: &JsonLdNode, out: &mut TripleSet) {
    let subject = node.id.as_str();
    for (predicate, values) in &node.properties {
        for value in values {
            out.push(value_triple(subject, predicate, value));
        }
    }
    for ty in &node.types {
        out.push(Triple::rdf_type(subject, ty.as_str()));
    }
}

fn value_triple(subject: &str, predicate: &str, value: &NodeValue) -> Triple {
    match value {
        NodeValue::Reference(target) => Triple::iri(subject, predicate, target.id.as_str()),
        NodeValue::Literal(lit) => Triple::literal(
            subject,
            predicate,
            lit.value.lexical(),
            lit.language.clone(),
            lit.effective_datatype().map(str::to_string),
        ),
        NodeValue::Primitive(p) => Triple::literal(
            subject,
            predicate,
            p.lexical(),
            None,
            p.inferred_datatype().map(str::to_string),
        ),
        NodeValue::Opaque(json) => {
            Triple::literal(subject, predicate, json.to_string(), None, None)
        }
    }
}
