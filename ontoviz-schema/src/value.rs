//! Schema output nodes

use ontoviz_json_ld::{Literal, Primitive};
use ontoviz_vocab::jsonld;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single value on a schema node
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaValue {
    /// `{"@id": ...}`
    Reference(String),
    Literal(Literal),
    Primitive(Primitive),
    Opaque(Value),
    /// Explicit `null`, used for a declared property without a range
    Null,
}

impl SchemaValue {
    pub fn reference(id: impl Into<String>) -> Self {
        SchemaValue::Reference(id.into())
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            SchemaValue::Reference(id) => Some(id),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SchemaValue::Reference(id) => {
                let mut map = Map::new();
                map.insert(jsonld::ID.to_string(), Value::String(id.clone()));
                Value::Object(map)
            }
            SchemaValue::Literal(lit) => lit.to_json(),
            SchemaValue::Primitive(p) => p.to_json(),
            SchemaValue::Opaque(v) => v.clone(),
            SchemaValue::Null => Value::Null,
        }
    }
}

/// A property slot: one value written bare, or an array
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    One(SchemaValue),
    Many(Vec<SchemaValue>),
}

impl PropValue {
    /// One value when exactly one, otherwise an array (possibly empty)
    pub fn collapse(mut values: Vec<SchemaValue>) -> Self {
        if values.len() == 1 {
            if let Some(only) = values.pop() {
                return PropValue::One(only);
            }
        }
        PropValue::Many(values)
    }

    /// All values; `null` counts as no value
    pub fn values(&self) -> Vec<SchemaValue> {
        match self {
            PropValue::One(SchemaValue::Null) => Vec::new(),
            PropValue::One(v) => vec![v.clone()],
            PropValue::Many(vs) => vs.iter().filter(|v| **v != SchemaValue::Null).cloned().collect(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            PropValue::One(v) => v.to_json(),
            PropValue::Many(vs) => Value::Array(vs.iter().map(SchemaValue::to_json).collect()),
        }
    }
}

/// One top-level node of the inferred schema
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaNode {
    pub id: String,
    pub types: Vec<String>,
    pub props: BTreeMap<String, PropValue>,
}

impl SchemaNode {
    pub fn new(id: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            id: id.into(),
            types,
            props: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// `{"@id", "@type", ...props}`; a single type is written as a string
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(jsonld::ID.to_string(), Value::String(self.id.clone()));
        match self.types.as_slice() {
            [] => {}
            [one] => {
                map.insert(jsonld::TYPE.to_string(), Value::String(one.clone()));
            }
            many => {
                map.insert(
                    jsonld::TYPE.to_string(),
                    Value::Array(many.iter().cloned().map(Value::String).collect()),
                );
            }
        }
        for (key, value) in &self.props {
            map.insert(key.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// The schema as a JSON-LD node array
pub fn schema_to_json(nodes: &[SchemaNode]) -> Value {
    Value::Array(nodes.iter().map(SchemaNode::to_json).collect())
}
