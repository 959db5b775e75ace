//! Renderer-facing graph records

use serde::{Deserialize, Serialize};

/// One display attribute of a node
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeProperty {
    /// `"iri"`, `"type"`, or the label of the predicate
    pub property: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl NodeProperty {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Display name
    pub name: String,
    /// Local names of the node's types
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub properties: Vec<NodeProperty>,
}

/// Directed, labeled edge between two node ids
///
/// Two links are the same link when source, target and label all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub label: String,
}

impl GraphLink {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl EntityGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let graph = EntityGraph {
            nodes: vec![GraphNode {
                id: "ex:john".into(),
                name: "John".into(),
                types: vec!["Person".into()],
                properties: vec![
                    NodeProperty::new("iri", "ex:john"),
                    NodeProperty::new("name", "John").with_language(Some("en".into())),
                ],
            }],
            links: vec![GraphLink::new("ex:john", "ex:jane", "knows")],
        };

        assert_eq!(
            serde_json::to_value(&graph).unwrap(),
            json!({
                "nodes": [{
                    "id": "ex:john",
                    "name": "John",
                    "type": ["Person"],
                    "properties": [
                        {"property": "iri", "value": "ex:john"},
                        {"property": "name", "value": "John", "language": "en"}
                    ]
                }],
                "links": [{"source": "ex:john", "target": "ex:jane", "label": "knows"}]
            })
        );
    }
}
