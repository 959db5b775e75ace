//! JSON-LD node model
//!
//! Predicate values in a JSON-LD node array come in several shapes: bare
//! primitives, `{"@id": ...}` references (possibly carrying an embedded
//! entity), `{"@value": ...}` literals, and the occasional object that is
//! none of these. They are classified once, at ingestion, into [`NodeValue`]
//! so later stages match on a tagged union instead of probing keys.

use crate::error::{json_kind, JsonLdError, Result};
use ontoviz_graph_ir::datatype;
use ontoviz_vocab::{compact, is_named_individual, jsonld};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// A bare JSON scalar
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    String(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
}

impl Primitive {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Primitive::String(s.clone())),
            Value::Bool(b) => Some(Primitive::Boolean(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Primitive::Integer(i)),
                None => n.as_f64().map(Primitive::Decimal),
            },
            _ => None,
        }
    }

    /// Lexical form
    pub fn lexical(&self) -> String {
        match self {
            Primitive::String(s) => s.clone(),
            Primitive::Integer(i) => i.to_string(),
            Primitive::Decimal(d) => d.to_string(),
            Primitive::Boolean(b) => b.to_string(),
        }
    }

    /// Borrow the string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::String(s) => Some(s),
            _ => None,
        }
    }

    /// Datatype implied by the JSON type (strings are untyped)
    pub fn inferred_datatype(&self) -> Option<&'static str> {
        match self {
            Primitive::String(_) => None,
            Primitive::Integer(_) => Some(datatype::for_number(true)),
            Primitive::Decimal(_) => Some(datatype::for_number(false)),
            Primitive::Boolean(_) => Some(datatype::for_boolean()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Primitive::String(s) => Value::String(s.clone()),
            Primitive::Integer(i) => Value::from(*i),
            Primitive::Decimal(d) => Value::from(*d),
            Primitive::Boolean(b) => Value::Bool(*b),
        }
    }
}

/// A `{"@value", "@language"?, "@type"?}` value object
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub value: Primitive,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl Literal {
    /// Plain literal without language or datatype
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Primitive::String(value.into()),
            language: None,
            datatype: None,
        }
    }

    /// Language-tagged string literal
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: Primitive::String(value.into()),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// `@type` if present, else `rdf:langString` when language-tagged
    pub fn effective_datatype(&self) -> Option<&str> {
        match (&self.datatype, &self.language) {
            (Some(dt), _) => Some(dt.as_str()),
            (None, Some(_)) => Some(compact::RDF_LANG_STRING),
            (None, None) => None,
        }
    }

    /// Lexical form of `@value`, or `None` when it is empty
    ///
    /// Only non-empty values qualify as labels.
    pub fn label_text(&self) -> Option<String> {
        match &self.value {
            Primitive::String(s) if s.is_empty() => None,
            Primitive::Boolean(false) => None,
            Primitive::Integer(0) => None,
            other => Some(other.lexical()),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(jsonld::VALUE.to_string(), self.value.to_json());
        if let Some(lang) = &self.language {
            map.insert(jsonld::LANGUAGE.to_string(), Value::String(lang.clone()));
        }
        if let Some(dt) = &self.datatype {
            map.insert(jsonld::TYPE.to_string(), Value::String(dt.clone()));
        }
        Value::Object(map)
    }
}

/// A single predicate value
#[derive(Clone, Debug, PartialEq)]
pub enum NodeValue {
    /// `{"@id": ...}`; keeps any embedded types and properties
    Reference(Box<JsonLdNode>),
    /// `{"@value": ...}`
    Literal(Literal),
    /// Bare string, number or boolean
    Primitive(Primitive),
    /// An object that is neither a reference nor a value object
    Opaque(Value),
}

impl NodeValue {
    /// Reference to `id` with nothing embedded
    pub fn reference(id: impl Into<String>) -> Self {
        NodeValue::Reference(Box::new(JsonLdNode::new(id)))
    }

    /// Target id, if this is a reference
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            NodeValue::Reference(node) => Some(&node.id),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            NodeValue::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            NodeValue::Reference(node) => node.to_json(),
            NodeValue::Literal(lit) => lit.to_json(),
            NodeValue::Primitive(p) => p.to_json(),
            NodeValue::Opaque(v) => v.clone(),
        }
    }

    fn from_json(owner: &str, predicate: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Array(_) => Err(JsonLdError::invalid_value(
                owner,
                predicate,
                "nested arrays are not supported",
            )),
            Value::Object(map) if map.contains_key(jsonld::ID) => {
                let node = JsonLdNode::from_map(map)?;
                Ok(Some(NodeValue::Reference(Box::new(node))))
            }
            Value::Object(map) if map.contains_key(jsonld::VALUE) => {
                parse_literal(owner, predicate, map).map(|lit| Some(NodeValue::Literal(lit)))
            }
            Value::Object(_) => Ok(Some(NodeValue::Opaque(value.clone()))),
            scalar => Ok(Primitive::from_json(scalar).map(NodeValue::Primitive)),
        }
    }
}

fn parse_literal(owner: &str, predicate: &str, map: &Map<String, Value>) -> Result<Literal> {
    let raw = map.get(jsonld::VALUE).unwrap_or(&Value::Null);
    let value = Primitive::from_json(raw).ok_or_else(|| {
        JsonLdError::invalid_value(
            owner,
            predicate,
            format!("@value must be a scalar, found {}", json_kind(raw)),
        )
    })?;
    let language = optional_string(owner, predicate, map, jsonld::LANGUAGE)?;
    let datatype = optional_string(owner, predicate, map, jsonld::TYPE)?;
    Ok(Literal {
        value,
        language,
        datatype,
    })
}

fn optional_string(
    owner: &str,
    predicate: &str,
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(JsonLdError::invalid_value(
            owner,
            predicate,
            format!("{} must be a string, found {}", key, json_kind(other)),
        )),
    }
}

/// One JSON-LD node: an id, its types, and its predicate values
///
/// Properties are keyed by predicate in a `BTreeMap`; predicate order carries
/// no meaning, value order within a predicate is kept as written.
/// `array_valued` records the predicates whose value was written as a JSON
/// array, even when that array held a single value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonLdNode {
    pub id: String,
    pub types: Vec<String>,
    pub properties: BTreeMap<String, Vec<NodeValue>>,
    pub array_valued: BTreeSet<String>,
}

impl JsonLdNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Builder: add a type
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.types.push(ty.into());
        self
    }

    /// Builder: append a value to a predicate
    pub fn with_value(mut self, predicate: impl Into<String>, value: NodeValue) -> Self {
        self.properties.entry(predicate.into()).or_default().push(value);
        self
    }

    /// Parse a node object
    ///
    /// `@id` is required and must be a non-blank string. Keys starting with
    /// `@` other than `@id` and `@type` are ignored, and `null` values are
    /// dropped.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(JsonLdError::NotAnObject {
                index: 0,
                found: json_kind(other),
            }),
        }
    }

    pub(crate) fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let id = match map.get(jsonld::ID) {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::String(_)) => {
                return Err(JsonLdError::InvalidId {
                    message: "@id must not be blank".to_string(),
                })
            }
            Some(other) => {
                return Err(JsonLdError::InvalidId {
                    message: format!("@id must be a string, found {}", json_kind(other)),
                })
            }
            None => return Err(JsonLdError::MissingId { index: 0 }),
        };

        let types = match map.get(jsonld::TYPE) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter(|v| !v.is_null())
                .map(|v| match v {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(JsonLdError::invalid_value(
                        &id,
                        jsonld::TYPE,
                        format!("type entries must be strings, found {}", json_kind(other)),
                    )),
                })
                .collect::<Result<_>>()?,
            Some(other) => {
                return Err(JsonLdError::invalid_value(
                    &id,
                    jsonld::TYPE,
                    format!("expected string or array, found {}", json_kind(other)),
                ))
            }
        };

        let mut properties = BTreeMap::new();
        let mut array_valued = BTreeSet::new();
        for (key, raw) in map {
            if jsonld::is_keyword(key) {
                continue;
            }
            let items: &[Value] = match raw {
                Value::Array(items) => {
                    array_valued.insert(key.clone());
                    items
                }
                single => std::slice::from_ref(single),
            };
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                if let Some(v) = NodeValue::from_json(&id, key, item)? {
                    values.push(v);
                }
            }
            properties.insert(key.clone(), values);
        }

        Ok(Self {
            id,
            types,
            properties,
            array_valued,
        })
    }

    /// True if `predicate` was written as a JSON array
    pub fn is_array_valued(&self, predicate: &str) -> bool {
        self.array_valued.contains(predicate)
    }

    /// Values of one predicate (empty when absent)
    pub fn values(&self, predicate: &str) -> &[NodeValue] {
        self.properties
            .get(predicate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if the node is typed as a named individual
    pub fn is_named_individual(&self) -> bool {
        self.types.iter().any(|t| is_named_individual(t))
    }

    /// Types other than the named-individual marker
    pub fn class_types(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .map(String::as_str)
            .filter(|t| !is_named_individual(t))
    }

    /// Outbound references as `(predicate, target)`
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().flat_map(|(pred, values)| {
            values
                .iter()
                .filter_map(move |v| v.as_reference().map(|target| (pred.as_str(), target)))
        })
    }

    /// Literal values as `(predicate, literal)`
    pub fn literals(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.properties.iter().flat_map(|(pred, values)| {
            values
                .iter()
                .filter_map(move |v| v.as_literal().map(|lit| (pred.as_str(), lit)))
        })
    }

    /// True if the node carries any predicate
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Back to a JSON-LD node object
    ///
    /// Predicates written as arrays stay arrays; otherwise a single value is
    /// written unwrapped and a dropped `null` comes back as `null`.
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
        for (pred, values) in &self.properties {
            let value = match values.as_slice() {
                _ if self.is_array_valued(pred) => {
                    Value::Array(values.iter().map(NodeValue::to_json).collect())
                }
                [] => Value::Null,
                [one] => one.to_json(),
                many => Value::Array(many.iter().map(NodeValue::to_json).collect()),
            };
            map.insert(pred.clone(), value);
        }
        Value::Object(map)
    }
}
