//! Display records for single entities

use crate::error::{Result, TraceError};
use crate::model::{GraphNode, NodeProperty};
use crate::options::NodeNaming;
use ontoviz_json_ld::iri::local_name_or_iri;
use ontoviz_json_ld::{JsonLdNode, LabelResolver, NodeValue};

impl NodeNaming {
    /// Name for `id` under this strategy
    pub fn label(
        self,
        labels: &LabelResolver<'_>,
        id: &str,
        language: Option<&str>,
    ) -> ontoviz_json_ld::Result<String> {
        match self {
            NodeNaming::Preferred => labels.preferred_label(id, language),
            NodeNaming::TypePrefixed => labels.entity_label(id, language),
        }
    }
}

/// Attribute list of an entity
///
/// One `iri` entry, one `type` entry per type IRI as written, then one entry
/// per literal value keyed by the label of its predicate (the raw predicate
/// when no label can be derived).
pub fn derive_attributes(
    labels: &LabelResolver<'_>,
    id: &str,
    naming: NodeNaming,
    language: Option<&str>,
) -> Result<Vec<NodeProperty>> {
    let node = labels
        .graph()
        .get(id)
        .ok_or_else(|| TraceError::EntityNotFound { id: id.to_string() })?;

    let mut props = vec![NodeProperty::new("iri", &node.id)];
    props.extend(node.types.iter().map(|t| NodeProperty::new("type", t)));

    for (predicate, values) in &node.properties {
        let mut literals = values.iter().filter_map(NodeValue::as_literal).peekable();
        if literals.peek().is_none() {
            continue;
        }
        let label = naming
            .label(labels, predicate, language)
            .unwrap_or_else(|_| predicate.clone());
        for lit in literals {
            props.push(
                NodeProperty::new(label.as_str(), lit.value.lexical())
                    .with_language(lit.language.clone()),
            );
        }
    }
    Ok(props)
}

/// Renderer node for `node`; the name falls back to the raw id
pub fn graph_node(
    labels: &LabelResolver<'_>,
    node: &JsonLdNode,
    naming: NodeNaming,
    language: Option<&str>,
) -> Result<GraphNode> {
    let properties = derive_attributes(labels, &node.id, naming, language)?;
    let name = naming
        .label(labels, &node.id, language)
        .unwrap_or_else(|_| node.id.clone());
    let types = node
        .types
        .iter()
        .map(|t| local_name_or_iri(t).to_string())
        .collect();
    Ok(GraphNode {
        id: node.id.clone(),
        name,
        types,
        properties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontoviz_json_ld::NodeGraph;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn people() -> NodeGraph {
        NodeGraph::from_json(&json!([
            {
                "@id": "http://example.org/JohnDoe",
                "@type": ["http://example.org/Person", "http://www.w3.org/2002/07/owl#NamedIndividual"],
                "http://example.org/name": {"@value": "John Doe", "@language": "en"},
                "http://example.org/age": {"@value": 42},
                "http://example.org/knows": {"@id": "http://example.org/JaneSmith"}
            },
            {
                "@id": "http://example.org/name",
                "rdfs:label": {"@value": "Name", "@language": "en"}
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_derive_attributes() {
        let graph = people();
        let labels = LabelResolver::new(&graph);
        let props =
            derive_attributes(&labels, "http://example.org/JohnDoe", NodeNaming::Preferred, Some("en"))
                .unwrap();

        assert_eq!(
            props,
            vec![
                NodeProperty::new("iri", "http://example.org/JohnDoe"),
                NodeProperty::new("type", "http://example.org/Person"),
                NodeProperty::new("type", "http://www.w3.org/2002/07/owl#NamedIndividual"),
                NodeProperty::new("age", "42"),
                NodeProperty::new("Name", "John Doe").with_language(Some("en".into())),
            ]
        );
    }

    #[test]
    fn test_missing_entity() {
        let graph = people();
        let labels = LabelResolver::new(&graph);
        let err = derive_attributes(&labels, "ex:nobody", NodeNaming::Preferred, None).unwrap_err();
        assert!(matches!(err, TraceError::EntityNotFound { .. }));
    }

    #[test]
    fn test_graph_node_naming() {
        let graph = people();
        let labels = LabelResolver::new(&graph);
        let john = graph.get("http://example.org/JohnDoe").unwrap();

        let node = graph_node(&labels, john, NodeNaming::Preferred, Some("en")).unwrap();
        assert_eq!(node.name, "John Doe");
        assert_eq!(node.types, vec!["Person", "NamedIndividual"]);

        let unlabeled = NodeGraph::from_json(&json!([
            {"@id": "ex:JohnDoe", "@type": ["ex:Person", "owl:NamedIndividual"]}
        ]))
        .unwrap();
        let labels = LabelResolver::new(&unlabeled);
        let john = unlabeled.get("ex:JohnDoe").unwrap();
        assert_eq!(
            graph_node(&labels, john, NodeNaming::TypePrefixed, Some("en")).unwrap().name,
            "Person JohnD"
        );
        assert_eq!(
            graph_node(&labels, john, NodeNaming::Preferred, Some("en")).unwrap().name,
            "Person JohnD"
        );
    }
}
