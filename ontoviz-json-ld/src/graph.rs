//! Node graph - the parsed input collection

use crate::error::{json_kind, JsonLdError, Result};
use crate::node::JsonLdNode;
use ontoviz_vocab::jsonld;
use rustc_hash::FxHashMap;
use serde_json::Value;

/// Ordered collection of JSON-LD nodes indexed by `@id`
///
/// Input order is preserved; every `@id` is unique.
#[derive(Clone, Debug, Default)]
pub struct NodeGraph {
    nodes: Vec<JsonLdNode>,
    index: FxHashMap<String, usize>,
}

impl NodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of node objects
    ///
    /// # Errors
    ///
    /// - `NotAnArray` if `value` is not an array
    /// - `NotAnObject` / `MissingId` / `InvalidId` for a malformed entry
    /// - `DuplicateId` if two entries share an `@id`
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or(JsonLdError::NotAnArray {
            found: json_kind(value),
        })?;

        let mut graph = Self {
            nodes: Vec::with_capacity(items.len()),
            index: FxHashMap::default(),
        };
        for (index, item) in items.iter().enumerate() {
            let map = item.as_object().ok_or(JsonLdError::NotAnObject {
                index,
                found: json_kind(item),
            })?;
            if !map.contains_key(jsonld::ID) {
                return Err(JsonLdError::MissingId { index });
            }
            graph.insert(JsonLdNode::from_map(map)?)?;
        }

        tracing::debug!(nodes = graph.len(), "parsed node graph");
        Ok(graph)
    }

    /// Build from already-parsed nodes
    pub fn from_nodes(nodes: impl IntoIterator<Item = JsonLdNode>) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert(node)?;
        }
        Ok(graph)
    }

    /// Append a node, rejecting duplicate ids
    pub fn insert(&mut self, node: JsonLdNode) -> Result<()> {
        if self.index.contains_key(&node.id) {
            return Err(JsonLdError::DuplicateId { id: node.id });
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Look up a node by id
    pub fn get(&self, id: &str) -> Option<&JsonLdNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in input order
    pub fn iter(&self) -> impl Iterator<Item = &JsonLdNode> {
        self.nodes.iter()
    }

    /// Ids in input order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn nodes(&self) -> &[JsonLdNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NodeGraph {
    type Item = &'a JsonLdNode;
    type IntoIter = std::slice::Iter<'a, JsonLdNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_order_and_indexes() {
        let graph = NodeGraph::from_json(&json!([
            {"@id": "ex:b"},
            {"@id": "ex:a", "ex:p": "x"}
        ]))
        .unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.ids().collect::<Vec<_>>(), vec!["ex:b", "ex:a"]);
        assert!(graph.get("ex:a").unwrap().has_properties());
        assert!(graph.get("ex:c").is_none());
    }

    #[test]
    fn test_shape_violations() {
        assert_eq!(
            NodeGraph::from_json(&json!({"@id": "ex:a"})).unwrap_err(),
            JsonLdError::NotAnArray { found: "object" }
        );
        assert_eq!(
            NodeGraph::from_json(&json!([{"@id": "ex:a"}, "ex:b"])).unwrap_err(),
            JsonLdError::NotAnObject {
                index: 1,
                found: "string"
            }
        );
        assert_eq!(
            NodeGraph::from_json(&json!([{"@id": "ex:a"}, {"ex:p": 1}])).unwrap_err(),
            JsonLdError::MissingId { index: 1 }
        );
        assert_eq!(
            NodeGraph::from_json(&json!([{"@id": "ex:a"}, {"@id": "ex:a"}])).unwrap_err(),
            JsonLdError::DuplicateId {
                id: "ex:a".to_string()
            }
        );
    }

    #[test]
    fn test_empty_array() {
        let graph = NodeGraph::from_json(&json!([])).unwrap();
        assert!(graph.is_empty());
    }
}
