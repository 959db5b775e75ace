//! Ontology schema inference for JSON-LD node arrays
//!
//! The pipeline runs in five passes over one [`NodeGraph`]:
//!
//! 1. Triple extraction (`ontoviz-json-ld`)
//! 2. [`build_class_map`]: declared classes and subclass links
//! 3. [`build_property_map`]: declared properties with domain and range
//! 4. [`infer_from_individuals`]: class properties implied by named individuals
//! 5. [`merge_into_classes`]: one flat list of schema nodes
//!
//! followed by label attachment.
//!
//! # Example
//!
//! ```
//! use ontoviz_schema::{infer_schema_from_json, SchemaOptions};
//! use serde_json::json;
//!
//! let schema = infer_schema_from_json(
//!     &json!([
//!         {"@id": "ex:Dog", "@type": "http://www.w3.org/2002/07/owl#Class"},
//!         {"@id": "ex:rex", "@type": ["ex:Dog", "owl:NamedIndividual"], "ex:name": "Rex"}
//!     ]),
//!     &SchemaOptions::default().with_labels(false),
//! )
//! .unwrap();
//!
//! assert_eq!(schema[0]["@id"], "ex:Dog");
//! assert_eq!(schema[0]["ex:name"]["@id"], "Rex");
//! ```

mod arena;
pub mod class_map;
pub mod error;
pub mod inference;
pub mod merge;
pub mod options;
pub mod property_map;
pub mod value;

pub use arena::Arena;
pub use class_map::{build_class_map, ClassDefinition, ClassMap};
pub use error::{Result, SchemaError};
pub use inference::{infer_from_individuals, InferredPropertyMap, InferredValue};
pub use merge::{merge_into_classes, SchemaArena};
pub use options::SchemaOptions;
pub use property_map::{build_property_map, PropertyDefinition, PropertyMap};
pub use value::{schema_to_json, PropValue, SchemaNode, SchemaValue};

use ontoviz_json_ld::{extract_triples, LabelResolver, Literal, NodeGraph, Primitive};
use ontoviz_vocab::compact;
use serde_json::Value;
use tracing::{debug, debug_span, warn};

/// Infer the schema of `graph`
pub fn infer_schema(graph: &NodeGraph, options: &SchemaOptions) -> Result<Vec<SchemaNode>> {
    options
        .validate()
        .map_err(|message| SchemaError::InvalidOptions { message })?;

    let span = debug_span!("infer_schema", nodes = graph.len());
    let _guard = span.enter();

    let triples = extract_triples(graph);
    let classes = build_class_map(&triples).map_err(|e| e.in_stage("class map"))?;
    let properties = build_property_map(&triples).map_err(|e| e.in_stage("property map"))?;
    let inferred = infer_from_individuals(graph, options);
    let mut schema = merge_into_classes(&classes, &properties, &inferred);

    if options.attach_labels {
        attach_labels(graph, &mut schema, options.language.as_deref());
    }

    debug!(
        triples = triples.len(),
        classes = classes.len(),
        properties = properties.len(),
        schema_nodes = schema.len(),
        "schema inferred"
    );
    Ok(schema)
}

/// Parse a JSON-LD node array, infer its schema and return it as JSON-LD
pub fn infer_schema_from_json(input: &Value, options: &SchemaOptions) -> Result<Value> {
    let graph = NodeGraph::from_json(input)?;
    let schema = infer_schema(&graph, options)?;
    Ok(schema_to_json(&schema))
}

fn attach_labels(graph: &NodeGraph, schema: &mut [SchemaNode], language: Option<&str>) {
    let labels = LabelResolver::new(graph);
    for node in schema.iter_mut() {
        match labels.preferred_label(&node.id, language) {
            Ok(label) => {
                let literal = Literal {
                    value: Primitive::String(label),
                    language: language.map(str::to_string),
                    datatype: None,
                };
                node.props.insert(
                    compact::RDFS_LABEL.to_string(),
                    PropValue::Many(vec![SchemaValue::Literal(literal)]),
                );
            }
            Err(e) => warn!(id = %node.id, error = %e, "no label for schema node"),
        }
    }
}
