//! Schema inference options

use ontoviz_vocab::cco;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for [`infer_schema`](crate::infer_schema)
///
/// Deserializable so hosts can keep them alongside their own configuration;
/// missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaOptions {
    /// Preferred label language; `None` disables language filtering
    pub language: Option<String>,
    /// Attach an `rdfs:label` to every schema node
    pub attach_labels: bool,
    /// Copy class-level predicate assertions onto the inferred properties
    /// of classes that have instances
    pub propagate_class_assertions: bool,
    /// Predicates whose values have a fixed datatype
    pub datatype_predicates: BTreeMap<String, String>,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            language: Some("en".to_string()),
            attach_labels: true,
            propagate_class_assertions: true,
            datatype_predicates: cco::VALUE_DATATYPES
                .iter()
                .map(|(p, dt)| (p.to_string(), dt.to_string()))
                .collect(),
        }
    }
}

impl SchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_string);
        self
    }

    pub fn with_labels(mut self, attach: bool) -> Self {
        self.attach_labels = attach;
        self
    }

    pub fn with_propagation(mut self, propagate: bool) -> Self {
        self.propagate_class_assertions = propagate;
        self
    }

    /// Add (or replace) a fixed-datatype predicate
    pub fn with_datatype_predicate(
        mut self,
        predicate: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        self.datatype_predicates
            .insert(predicate.into(), datatype.into());
        self
    }

    /// Datatype fixed for `predicate`, if any
    pub fn datatype_for(&self, predicate: &str) -> Option<&str> {
        self.datatype_predicates.get(predicate).map(String::as_str)
    }

    /// Validate the options before a run
    pub fn validate(&self) -> Result<(), String> {
        if let Some(lang) = &self.language {
            if lang.trim().is_empty() {
                return Err("language must not be blank (use none to disable filtering)".to_string());
            }
        }
        for (predicate, datatype) in &self.datatype_predicates {
            if predicate.is_empty() {
                return Err("datatype_predicates contains an empty predicate".to_string());
            }
            if datatype.is_empty() {
                return Err(format!("datatype for '{}' must not be empty", predicate));
            }
        }
        Ok(())
    }
}
