//! Merge pass: classes, declared properties and inferred properties into one
//! flat list of schema nodes
//!
//! Every IRI a schema node points at (superclasses, domains, ranges, inferred
//! classes and individuals, nested entities) is materialized as a top-level
//! node, so the output never nests nodes inside nodes.

use crate::arena::Arena;
use crate::class_map::ClassMap;
use crate::inference::{InferredPropertyMap, InferredValue};
use crate::property_map::PropertyMap;
use crate::value::{PropValue, SchemaNode, SchemaValue};
use ontoviz_json_ld::{JsonLdNode, NodeValue, Primitive};
use ontoviz_vocab::{compact, owl};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Schema nodes by id, plus the `(node, key)` pairs filled by [`SchemaArena::merge`]
#[derive(Debug, Default)]
pub struct SchemaArena {
    nodes: Arena<SchemaNode>,
    merged: FxHashSet<(String, String)>,
}

#[derive(PartialEq, Eq, Hash)]
enum DedupKey {
    Id(String),
    Json(String),
}

impl SchemaArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node for `id`, created with type `kind` if absent
    pub fn ensure(&mut self, id: &str, kind: &str) -> &mut SchemaNode {
        self.nodes
            .ensure_with(id, || SchemaNode::new(id, vec![kind.to_string()]))
    }

    fn ensure_typed(&mut self, id: &str, types: &[String]) -> &mut SchemaNode {
        if types.is_empty() {
            return self.ensure(id, compact::OWL_NAMED_INDIVIDUAL);
        }
        self.nodes
            .ensure_with(id, || SchemaNode::new(id, types.to_vec()))
    }

    pub fn get(&self, id: &str) -> Option<&SchemaNode> {
        self.nodes.get(id)
    }

    /// Append `incoming` to the current value of `key` on node `id`
    ///
    /// The combined list keeps the first of any duplicates (references by id,
    /// everything else by JSON form) and collapses to a single value when only
    /// one remains. The node must already exist.
    pub fn merge(&mut self, id: &str, key: &str, incoming: Vec<SchemaValue>) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let mut combined = node.props.get(key).map(PropValue::values).unwrap_or_default();
        combined.extend(incoming);

        let mut seen = FxHashSet::default();
        combined.retain(|v| seen.insert(dedup_key(v)));

        node.props.insert(key.to_string(), PropValue::collapse(combined));
        self.merged.insert((id.to_string(), key.to_string()));
    }

    /// Materialize a nested entity as a top-level node and return a reference
    /// to it; the entity's own properties overwrite those on the node
    ///
    /// A property written as an array stays an array, whatever its length,
    /// and is left for [`dedupe_unmerged`](Self::dedupe_unmerged).
    fn flatten_entity(&mut self, entity: &JsonLdNode) -> SchemaValue {
        self.ensure_typed(&entity.id, &entity.types);
        for (key, values) in &entity.properties {
            let converted: Vec<SchemaValue> =
                values.iter().map(|v| self.flatten_node_value(v)).collect();
            let value = if entity.is_array_valued(key) {
                PropValue::Many(converted)
            } else if converted.is_empty() {
                PropValue::One(SchemaValue::Null)
            } else {
                PropValue::collapse(converted)
            };
            if let Some(node) = self.nodes.get_mut(&entity.id) {
                node.props.insert(key.clone(), value);
            }
        }
        SchemaValue::reference(&entity.id)
    }

    fn flatten_node_value(&mut self, value: &NodeValue) -> SchemaValue {
        match value {
            NodeValue::Reference(node) => self.flatten_entity(node),
            NodeValue::Literal(lit) => SchemaValue::Literal(lit.clone()),
            NodeValue::Primitive(p) => SchemaValue::Primitive(p.clone()),
            NodeValue::Opaque(v) => SchemaValue::Opaque(v.clone()),
        }
    }

    fn flatten_inferred(&mut self, value: &InferredValue) -> SchemaValue {
        match value {
            InferredValue::Datatype(id) => {
                self.ensure(id, owl::DATATYPE_PROPERTY);
                SchemaValue::reference(id)
            }
            InferredValue::Class(id) => {
                self.ensure(id, compact::OWL_CLASS);
                SchemaValue::reference(id)
            }
            InferredValue::Individual(id) => {
                self.ensure(id, owl::NAMED_INDIVIDUAL);
                SchemaValue::reference(id)
            }
            InferredValue::Entity(node) => self.flatten_entity(node),
            InferredValue::Literal(lit) => SchemaValue::Literal(lit.clone()),
            InferredValue::Primitive(p) => SchemaValue::Primitive(p.clone()),
            InferredValue::Opaque(v) => SchemaValue::Opaque(v.clone()),
        }
    }

    /// Deduplicate array-valued keys that [`merge`](Self::merge) never touched
    ///
    /// References and strings share one id space and come out as references;
    /// other primitives are compared by value; literals and opaque objects are
    /// left alone. Arrays are never collapsed here.
    fn dedupe_unmerged(&mut self) {
        let merged = &self.merged;
        for (id, node) in self.nodes.iter_mut() {
            for (key, value) in node.props.iter_mut() {
                let PropValue::Many(values) = value else {
                    continue;
                };
                if merged.contains(&(id.to_string(), key.clone())) {
                    continue;
                }
                let mut seen_ids: FxHashSet<String> = FxHashSet::default();
                let mut seen_scalars: Vec<SchemaValue> = Vec::new();
                let mut out = Vec::with_capacity(values.len());
                for v in values.drain(..) {
                    match v {
                        SchemaValue::Reference(ref_id)
                        | SchemaValue::Primitive(Primitive::String(ref_id)) => {
                            if seen_ids.insert(ref_id.clone()) {
                                out.push(SchemaValue::Reference(ref_id));
                            }
                        }
                        v @ (SchemaValue::Primitive(_) | SchemaValue::Null) => {
                            if !seen_scalars.contains(&v) {
                                seen_scalars.push(v.clone());
                                out.push(v);
                            }
                        }
                        other => out.push(other),
                    }
                }
                *values = out;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<SchemaNode> {
        self.nodes.into_values()
    }
}

fn dedup_key(value: &SchemaValue) -> DedupKey {
    match value {
        SchemaValue::Reference(id) => DedupKey::Id(id.clone()),
        other => DedupKey::Json(other.to_json().to_string()),
    }
}

/// Combine the three maps into top-level schema nodes, in first-seen order
pub fn merge_into_classes(
    classes: &ClassMap,
    properties: &PropertyMap,
    inferred: &InferredPropertyMap,
) -> Vec<SchemaNode> {
    let mut arena = SchemaArena::new();

    for (id, class) in classes.iter() {
        let node = arena.ensure(id, compact::OWL_CLASS);
        if let Some(parent) = &class.sub_class_of {
            node.props.insert(
                compact::RDFS_SUB_CLASS_OF.to_string(),
                PropValue::One(SchemaValue::reference(parent)),
            );
        }
    }

    for (id, prop) in properties.iter() {
        let Some(domain) = prop.domain.as_deref() else {
            continue;
        };
        arena.ensure(domain, compact::OWL_CLASS);
        let range = prop.range.as_deref().filter(|r| !r.is_empty());
        if let Some(range) = range {
            arena.ensure(range, compact::OWL_CLASS);
        }
        let value = match range {
            Some(range) => SchemaValue::reference(range),
            None => SchemaValue::Null,
        };
        if let Some(node) = arena.nodes.get_mut(domain) {
            node.props.insert(id.to_string(), PropValue::One(value));
        }
    }

    for (class, props) in inferred.iter() {
        arena.ensure(class, compact::OWL_CLASS);
        for (predicate, values) in props {
            let incoming: Vec<SchemaValue> =
                values.iter().map(|v| arena.flatten_inferred(v)).collect();
            arena.merge(class, predicate, incoming);
        }
    }

    arena.dedupe_unmerged();

    debug!(nodes = arena.len(), "merged schema");
    arena.into_nodes()
}
