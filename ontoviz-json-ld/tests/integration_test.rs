//! Integration tests over realistic node arrays

use ontoviz_graph_ir::{TermKind, Triple};
use ontoviz_json_ld::iri::local_names;
use ontoviz_json_ld::{extract_triples, JsonLdNode, LabelResolver, NodeGraph};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn graph(value: Value) -> NodeGraph {
    NodeGraph::from_json(&value).expect("valid node array")
}

// ============================================================================
// Triple extraction
// ============================================================================

#[test]
fn test_extract_triples_two_people() {
    let g = graph(json!([
        {
            "@id": "ex:Person1",
            "@type": ["ex:Person", "ex:Mammal"],
            "ex:name": "Alice",
            "ex:knows": [{"@id": "ex:Person2"}]
        },
        {
            "@id": "ex:Person2",
            "@type": "ex:Person",
            "ex:name": "Bob"
        }
    ]));

    let triples = extract_triples(&g).into_triples();
    assert_eq!(
        triples,
        vec![
            Triple::iri("ex:Person1", "ex:knows", "ex:Person2"),
            Triple::literal("ex:Person1", "ex:name", "Alice", None, None),
            Triple::rdf_type("ex:Person1", "ex:Person"),
            Triple::rdf_type("ex:Person1", "ex:Mammal"),
            Triple::literal("ex:Person2", "ex:name", "Bob", None, None),
            Triple::rdf_type("ex:Person2", "ex:Person"),
        ]
    );
}

#[test]
fn test_every_value_yields_one_triple_with_node_subject() {
    let g = graph(json!([
        {
            "@id": "http://example.org/a",
            "http://example.org/p": [1, 2.5, true, "x", {"@value": "y", "@language": "en"}],
            "http://example.org/q": {"@id": "http://example.org/b"}
        },
        {"@id": "http://example.org/b", "http://example.org/p": []}
    ]));

    let triples = extract_triples(&g);
    for node in g.iter() {
        for (predicate, values) in &node.properties {
            let count = triples
                .iter()
                .filter(|t| t.subject == node.id && &t.predicate == predicate)
                .count();
            assert_eq!(count, values.len(), "{} {}", node.id, predicate);
        }
    }
    assert_eq!(
        triples
            .iter()
            .filter(|t| t.object_term_type == TermKind::Iri)
            .count(),
        1
    );
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_formal_label_by_language() {
    let g = graph(json!([{
        "@id": "http://example.org/Person/123",
        "http://www.w3.org/2000/01/rdf-schema#label": [
            {"@value": "John Doe", "@language": "en"},
            {"@value": "Juan Pérez", "@language": "es"}
        ]
    }]));
    let labels = LabelResolver::new(&g);

    assert_eq!(
        labels.formal_label("http://example.org/Person/123", Some("en")),
        Some("John Doe".to_string())
    );
    assert_eq!(
        labels.formal_label("http://example.org/Person/123", Some("es")),
        Some("Juan Pérez".to_string())
    );
}

#[test]
fn test_literal_label_first_value() {
    let node = JsonLdNode::from_json(&json!({
        "@id": "ex:greeting",
        "http://example.org/property": [
            {"@value": "Hello, World!", "@language": "en"},
            {"@value": "Hola, Mundo!", "@language": "es"}
        ]
    }))
    .unwrap();

    assert_eq!(
        LabelResolver::literal_label(&node, None),
        Some("Hello, World!".to_string())
    );
    assert_eq!(
        LabelResolver::literal_label(&node, Some("es")),
        Some("Hola, Mundo!".to_string())
    );
}

#[test]
fn test_named_individual_label_from_type() {
    let g = graph(json!([
        {
            "@id": "http://example.org/Person/123",
            "@type": ["http://example.org/PersonType", "http://www.w3.org/2002/07/owl#NamedIndividual"]
        },
        {
            "@id": "http://example.org/PersonType",
            "http://www.w3.org/2000/01/rdf-schema#label": [{"@value": "Person", "@language": "en"}]
        }
    ]));
    let labels = LabelResolver::new(&g);

    assert_eq!(
        labels
            .named_individual_label("http://example.org/Person/123", Some("en"))
            .unwrap(),
        Some("Person 123".to_string())
    );
    assert_eq!(
        labels
            .preferred_label("http://example.org/Person/123", Some("en"))
            .unwrap(),
        "Person 123"
    );
}

#[test]
fn test_entity_label_prefers_requested_language() {
    let g = graph(json!([{
        "@id": "ex:Person",
        "http://www.w3.org/2000/01/rdf-schema#label": [
            {"@value": "Person", "@language": "en"},
            {"@value": "Persona", "@language": "es"}
        ]
    }]));
    let labels = LabelResolver::new(&g);

    assert_eq!(labels.entity_label("ex:Person", Some("es")).unwrap(), "Persona");
    assert_eq!(labels.entity_label("ex:Person", None).unwrap(), "Person");
}

#[test]
fn test_entity_label_for_individual_skips_marker_type() {
    let g = graph(json!([
        {
            "@id": "http://example.org/classes#Person",
            "rdfs:label": [{"@value": "Person", "@language": "en"}]
        },
        {
            "@id": "http://example.org/individuals#A123",
            "@type": ["http://example.org/classes#Person", "http://www.w3.org/2002/07/owl#NamedIndividual"]
        },
        {
            "@id": "http://www.w3.org/2002/07/owl#NamedIndividual",
            "rdfs:label": [{"@value": "NamedIndividual", "@language": "en"}]
        }
    ]));
    let labels = LabelResolver::new(&g);

    assert_eq!(
        labels
            .entity_label("http://example.org/individuals#A123", Some("en"))
            .unwrap(),
        "Person A123"
    );
}

#[test]
fn test_preferred_label_is_total_for_valid_ids() {
    let g = graph(json!([
        {"@id": "http://example.org/a", "@type": "http://www.w3.org/2002/07/owl#NamedIndividual"},
        {"@id": "ex:b", "ex:p": {"@value": ""}},
        {"@id": "urn:x:c"},
        {"@id": "d"}
    ]));
    let labels = LabelResolver::new(&g);

    for id in g.ids() {
        let label = labels.preferred_label(id, Some("en")).unwrap();
        assert!(!label.is_empty(), "empty label for {}", id);
    }
}

#[test]
fn test_local_names_batch() {
    assert_eq!(
        local_names([
            "http://example.org/Person",
            "http://example.org#Thing",
            "ex:Agent"
        ])
        .unwrap(),
        vec!["Person", "Thing", "Agent"]
    );
}
