//! Property inference from named individuals
//!
//! Individuals typed `owl:NamedIndividual` are evidence for the shape of
//! their classes: every predicate an individual carries becomes an inferred
//! property of each of its classes, with the value generalized to a
//! datatype, a class, or an individual. Class-level assertions on classes
//! that have instances are then copied onto those classes' inferred
//! properties.

use crate::arena::Arena;
use crate::options::SchemaOptions;
use ontoviz_graph_ir::datatype;
use ontoviz_json_ld::{JsonLdNode, Literal, NodeGraph, NodeValue, Primitive};
use ontoviz_vocab::{compact, jsonld, owl};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// One inferred value of a class property
#[derive(Clone, Debug, PartialEq)]
pub enum InferredValue {
    /// Values of this property have the given datatype
    Datatype(String),
    /// Values are individuals of the given class
    Class(String),
    /// Values include this individual, by id
    Individual(String),
    /// A referenced entity, kept whole so it can be flattened into the schema
    Entity(Box<JsonLdNode>),
    Literal(Literal),
    Primitive(Primitive),
    Opaque(Value),
}

impl InferredValue {
    /// Id of the node this value points at, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            InferredValue::Datatype(id)
            | InferredValue::Class(id)
            | InferredValue::Individual(id) => Some(id),
            InferredValue::Entity(node) => Some(&node.id),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            InferredValue::Datatype(dt) => id_object(dt, Some(owl::DATATYPE_PROPERTY)),
            InferredValue::Class(class) => id_object(class, None),
            InferredValue::Individual(id) => id_object(id, Some(owl::NAMED_INDIVIDUAL)),
            InferredValue::Entity(node) => node.to_json(),
            InferredValue::Literal(lit) => lit.to_json(),
            InferredValue::Primitive(p) => p.to_json(),
            InferredValue::Opaque(v) => v.clone(),
        }
    }
}

fn id_object(id: &str, ty: Option<&str>) -> Value {
    let mut map = Map::new();
    map.insert(jsonld::ID.to_string(), Value::String(id.to_string()));
    if let Some(ty) = ty {
        map.insert(jsonld::TYPE.to_string(), Value::String(ty.to_string()));
    }
    Value::Object(map)
}

/// Inferred properties of one class, by predicate
pub type InferredProperties = BTreeMap<String, Vec<InferredValue>>;

/// Inferred properties for every class with evidence, in discovery order
#[derive(Clone, Debug, Default)]
pub struct InferredPropertyMap {
    classes: Arena<InferredProperties>,
}

impl InferredPropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, class: &str) -> Option<&InferredProperties> {
        self.classes.get(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InferredProperties)> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Ensure a class entry exists, returning its predicate map
    pub fn ensure_class(&mut self, class: &str) -> &mut InferredProperties {
        self.classes.ensure_with(class, BTreeMap::new)
    }

    /// Add a value unless an equal one is already recorded
    pub fn insert(&mut self, class: &str, predicate: &str, value: InferredValue) {
        let values = self
            .ensure_class(class)
            .entry(predicate.to_string())
            .or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// `{class: {predicate: value | [values]}}`
    ///
    /// A predicate with exactly one value is written as that value; any other
    /// count, zero included, as an array.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for (class, props) in self.classes.iter() {
            let mut obj = Map::new();
            for (pred, values) in props {
                let value = match values.as_slice() {
                    [one] => one.to_json(),
                    many => Value::Array(many.iter().map(InferredValue::to_json).collect()),
                };
                obj.insert(pred.clone(), value);
            }
            out.insert(class.to_string(), Value::Object(obj));
        }
        Value::Object(out)
    }
}

/// Infer class properties from the named individuals in `graph`
pub fn infer_from_individuals(graph: &NodeGraph, options: &SchemaOptions) -> InferredPropertyMap {
    let mut individual_classes: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    let mut class_instances: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for node in graph.iter().filter(|n| n.is_named_individual()) {
        let classes: Vec<&str> = unique(node.class_types());
        for &class in &classes {
            let instances = class_instances.entry(class).or_default();
            if !instances.contains(&node.id.as_str()) {
                instances.push(&node.id);
            }
        }
        individual_classes.insert(&node.id, classes);
    }

    let mut inferred = InferredPropertyMap::new();
    let ctx = Inference {
        options,
        individual_classes: &individual_classes,
    };

    for node in graph.iter().filter(|n| n.is_named_individual()) {
        let classes = individual_classes
            .get(node.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        if classes.is_empty() {
            continue;
        }
        for (predicate, values) in &node.properties {
            let kept: Vec<&NodeValue> = values.iter().filter(|v| !is_empty_string(v)).collect();
            for &class in classes {
                let props = inferred.ensure_class(class);
                if kept.is_empty() {
                    continue;
                }
                props.entry(predicate.clone()).or_default();
                for value in &kept {
                    for resolved in ctx.resolve(predicate, value) {
                        inferred.insert(class, predicate, resolved);
                    }
                }
            }
        }
    }

    if options.propagate_class_assertions {
        propagate_class_assertions(graph, &class_instances, &mut inferred);
    }

    debug!(
        individuals = individual_classes.len(),
        classes = inferred.len(),
        "inferred properties from individuals"
    );
    inferred
}

struct Inference<'a> {
    options: &'a SchemaOptions,
    individual_classes: &'a FxHashMap<&'a str, Vec<&'a str>>,
}

impl Inference<'_> {
    /// Generalize one individual's predicate value
    fn resolve(&self, predicate: &str, value: &NodeValue) -> Vec<InferredValue> {
        if let Some(dt) = self.options.datatype_for(predicate) {
            return vec![InferredValue::Datatype(dt.to_string())];
        }

        match value {
            NodeValue::Literal(lit) => {
                if let Some(dt) = &lit.datatype {
                    return builtin_datatypes(predicate, std::slice::from_ref(dt));
                }
                if lit.language.is_some() {
                    return vec![InferredValue::Datatype(compact::RDF_LANG_STRING.to_string())];
                }
            }
            NodeValue::Reference(node) if !node.types.is_empty() => {
                return builtin_datatypes(predicate, &node.types);
            }
            _ => {}
        }

        let text = match value {
            NodeValue::Reference(node) => Some(node.id.as_str()),
            NodeValue::Literal(lit) => lit.value.as_str(),
            NodeValue::Primitive(p) => p.as_str(),
            NodeValue::Opaque(_) => None,
        };
        if let Some(text) = text {
            if text.is_empty() {
                return Vec::new();
            }
            return match self.individual_classes.get(text) {
                Some(classes) => classes
                    .iter()
                    .map(|c| InferredValue::Class(c.to_string()))
                    .collect(),
                None => vec![InferredValue::Individual(text.to_string())],
            };
        }

        match value {
            NodeValue::Literal(lit) => vec![InferredValue::Primitive(lit.value.clone())],
            NodeValue::Primitive(p) => vec![InferredValue::Primitive(p.clone())],
            NodeValue::Opaque(v) => vec![InferredValue::Opaque(v.clone())],
            NodeValue::Reference(_) => Vec::new(),
        }
    }
}

/// Datatype markers for the `xsd:`/`rdf:` entries of a value's `@type`
fn builtin_datatypes(predicate: &str, types: &[String]) -> Vec<InferredValue> {
    let mut out = Vec::new();
    for ty in types {
        let dt = datatype::compact(ty);
        if datatype::is_builtin(&dt) {
            out.push(InferredValue::Datatype(dt));
        } else {
            trace!(predicate, datatype = %dt, "skipping non-builtin datatype");
        }
    }
    out
}

fn is_empty_string(value: &NodeValue) -> bool {
    matches!(value, NodeValue::Primitive(Primitive::String(s)) if s.is_empty())
}

/// Copy predicates asserted on a class node onto that class's inferred
/// properties, once the class has instances
fn propagate_class_assertions(
    graph: &NodeGraph,
    class_instances: &FxHashMap<&str, Vec<&str>>,
    inferred: &mut InferredPropertyMap,
) {
    for node in graph.iter() {
        if node.is_named_individual() || !node.has_properties() {
            continue;
        }
        let has_instances = class_instances
            .get(node.id.as_str())
            .is_some_and(|instances| !instances.is_empty());
        if !has_instances {
            continue;
        }
        for (predicate, values) in &node.properties {
            inferred
                .ensure_class(&node.id)
                .entry(predicate.clone())
                .or_default();
            for value in values {
                for propagated in propagate(value, class_instances) {
                    inferred.insert(&node.id, predicate, propagated);
                }
            }
        }
        trace!(class = %node.id, "propagated class assertions");
    }
}

fn propagate(value: &NodeValue, class_instances: &FxHashMap<&str, Vec<&str>>) -> Vec<InferredValue> {
    match value {
        NodeValue::Primitive(Primitive::String(s)) if s.is_empty() => Vec::new(),
        NodeValue::Primitive(Primitive::String(s)) if class_instances.contains_key(s.as_str()) => {
            class_instances[s.as_str()]
                .iter()
                .map(|inst| InferredValue::Individual(inst.to_string()))
                .collect()
        }
        NodeValue::Reference(node) => vec![InferredValue::Entity(node.clone())],
        NodeValue::Literal(lit) => vec![InferredValue::Literal(lit.clone())],
        NodeValue::Primitive(p) => vec![InferredValue::Primitive(p.clone())],
        NodeValue::Opaque(v) => vec![InferredValue::Opaque(v.clone())],
    }
}

fn unique<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    items.filter(|item| seen.insert(*item)).collect()
}
