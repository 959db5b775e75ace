//! Label resolution
//!
//! Resolves a human-readable label for any identifier, falling back through
//! progressively weaker sources until the IRI's own local name.

use crate::error::{JsonLdError, Result};
use crate::graph::NodeGraph;
use crate::iri::{local_name, local_name_or_iri};
use crate::node::{JsonLdNode, NodeValue};
use ontoviz_vocab::LABEL_KEYS;
use rustc_hash::FxHashSet;

/// Type local names that never prefix an entity label
const UNINFORMATIVE_TYPES: [&str; 5] = [
    "Class",
    "ObjectProperty",
    "Restriction",
    "Unknown",
    "NamedIndividual",
];

/// Number of local-id characters appended to a type label
const SHORT_ID_LEN: usize = 5;

/// Label lookups over one [`NodeGraph`]
///
/// Language arguments that are `None` or blank disable language filtering.
#[derive(Clone, Copy, Debug)]
pub struct LabelResolver<'g> {
    graph: &'g NodeGraph,
}

impl<'g> LabelResolver<'g> {
    pub fn new(graph: &'g NodeGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g NodeGraph {
        self.graph
    }

    /// Label from `rdfs:label` (or its equivalent keys)
    ///
    /// Keys are searched in [`LABEL_KEYS`] order, first for a literal in
    /// `language`, then for any literal. Only `@value` objects with a
    /// non-empty value count.
    pub fn formal_label(&self, id: &str, language: Option<&str>) -> Option<String> {
        let node = self.graph.get(id)?;
        let language = normalize_language(language);
        if language.is_some() {
            if let Some(label) = first_label(node, &LABEL_KEYS, language) {
                return Some(label);
            }
        }
        first_label(node, &LABEL_KEYS, None)
    }

    /// First literal anywhere on the entity, same language rule as
    /// [`formal_label`](Self::formal_label)
    pub fn literal_label(node: &JsonLdNode, language: Option<&str>) -> Option<String> {
        let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
        let language = normalize_language(language);
        if language.is_some() {
            if let Some(label) = first_label(node, &keys, language) {
                return Some(label);
            }
        }
        first_label(node, &keys, None)
    }

    /// `"<TypeLabel> <first 5 chars of local id>"` for named individuals
    ///
    /// Uses the first type other than the named-individual marker. The type
    /// label is its formal label, else its local name. Returns `Ok(None)` when
    /// the entity is absent, not a named individual, or has no other type.
    pub fn named_individual_label(&self, id: &str, language: Option<&str>) -> Result<Option<String>> {
        let Some(node) = self.graph.get(id) else {
            return Ok(None);
        };
        if !node.is_named_individual() {
            return Ok(None);
        }
        let Some(class) = node.class_types().next() else {
            return Ok(None);
        };
        let type_label = match self.formal_label(class, language) {
            Some(label) => label,
            None => local_name(class)?.to_string(),
        };
        Ok(Some(format!("{} {}", type_label, short_id(id)?)))
    }

    /// Preferred label: formal label, then any literal, then the
    /// named-individual heuristic, then the local name
    ///
    /// # Errors
    ///
    /// `InvalidId` for a blank id; `NoLocalName` when every source is
    /// exhausted and the id has no local segment.
    pub fn preferred_label(&self, id: &str, language: Option<&str>) -> Result<String> {
        ensure_id(id)?;
        if let Some(label) = self.formal_label(id, language) {
            return Ok(label);
        }
        if let Some(node) = self.graph.get(id) {
            if let Some(label) = Self::literal_label(node, language) {
                return Ok(label);
            }
        }
        if let Some(label) = self.named_individual_label(id, language)? {
            return Ok(label);
        }
        local_name(id).map(str::to_string)
    }

    /// Type-prefixed label used for rendered entities
    ///
    /// A direct label wins (a `language` match, else the first label under
    /// each key). Otherwise the first type whose local name is informative
    /// yields `"<type label> <first 5 chars>"`, resolved recursively through
    /// that type. Falls back to the local name.
    pub fn entity_label(&self, id: &str, language: Option<&str>) -> Result<String> {
        ensure_id(id)?;
        let mut visiting = FxHashSet::default();
        self.entity_label_inner(id, normalize_language(language), &mut visiting)
    }

    fn entity_label_inner<'a>(
        &self,
        id: &'a str,
        language: Option<&str>,
        visiting: &mut FxHashSet<&'a str>,
    ) -> Result<String>
    where
        'g: 'a,
    {
        if let Some(node) = self.graph.get(id) {
            for key in LABEL_KEYS {
                let values = node.values(key);
                if values.is_empty() {
                    continue;
                }
                if let Some(lang) = language {
                    let hit = values
                        .iter()
                        .filter_map(NodeValue::as_literal)
                        .find(|lit| lit.language.as_deref() == Some(lang))
                        .and_then(|lit| lit.label_text());
                    if let Some(label) = hit {
                        return Ok(label);
                    }
                }
                if let Some(label) = values[0].as_literal().and_then(|lit| lit.label_text()) {
                    return Ok(label);
                }
            }

            if visiting.insert(id) {
                for ty in &node.types {
                    if UNINFORMATIVE_TYPES.contains(&local_name_or_iri(ty)) {
                        continue;
                    }
                    let type_label = self.entity_label_inner(ty, language, visiting)?;
                    return Ok(format!("{} {}", type_label, short_id(id)?));
                }
            }
        }
        local_name(id).map(str::to_string)
    }
}

fn normalize_language(language: Option<&str>) -> Option<&str> {
    language.filter(|l| !l.trim().is_empty())
}

fn ensure_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(JsonLdError::InvalidId {
            message: "id must be a non-empty string".to_string(),
        });
    }
    Ok(())
}

fn short_id(id: &str) -> Result<String> {
    Ok(local_name(id)?.chars().take(SHORT_ID_LEN).collect())
}

/// First labelled literal under `keys`, optionally restricted to `language`
fn first_label(node: &JsonLdNode, keys: &[&str], language: Option<&str>) -> Option<String> {
    keys.iter()
        .flat_map(|key| node.values(key))
        .filter_map(NodeValue::as_literal)
        .filter(|lit| language.map_or(true, |l| lit.language.as_deref() == Some(l)))
        .find_map(|lit| lit.label_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NI: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";

    fn graph(value: serde_json::Value) -> NodeGraph {
        NodeGraph::from_json(&value).unwrap()
    }

    #[test]
    fn test_formal_label_language_then_any() {
        let g = graph(json!([{
            "@id": "ex:Dog",
            "rdfs:label": [{"@value": "Hund", "@language": "de"}],
            "http://www.w3.org/2000/01/rdf-schema#label": [{"@value": "Dog", "@language": "en"}]
        }]));
        let r = LabelResolver::new(&g);

        assert_eq!(r.formal_label("ex:Dog", Some("en")).as_deref(), Some("Dog"));
        assert_eq!(r.formal_label("ex:Dog", Some("de")).as_deref(), Some("Hund"));
        // no French label: first label in key order
        assert_eq!(r.formal_label("ex:Dog", Some("fr")).as_deref(), Some("Dog"));
        assert_eq!(r.formal_label("ex:Dog", None).as_deref(), Some("Dog"));
        assert_eq!(r.formal_label("ex:Dog", Some("  ")).as_deref(), Some("Dog"));
        assert_eq!(r.formal_label("ex:Cat", None), None);
    }

    #[test]
    fn test_formal_label_ignores_bare_strings_and_empty_values() {
        let g = graph(json!([{
            "@id": "ex:A",
            "label": ["plain", {"@value": ""}, {"@value": "Real"}]
        }]));
        let r = LabelResolver::new(&g);
        assert_eq!(r.formal_label("ex:A", None).as_deref(), Some("Real"));
    }

    #[test]
    fn test_preferred_label_chain() {
        let g = graph(json!([
            {"@id": "ex:Person", "rdfs:label": {"@value": "Person", "@language": "en"}},
            {"@id": "ex:withLiteral", "ex:note": {"@value": "Some note", "@language": "en"}},
            {"@id": "http://example.org/ind/abcdefgh", "@type": [NI, "ex:Person"]},
            {"@id": "http://example.org/ind/xyz", "@type": [NI, "http://example.org/Robot"]},
            {"@id": "http://example.org/plain/Thing"}
        ]));
        let r = LabelResolver::new(&g);
        let en = Some("en");

        assert_eq!(r.preferred_label("ex:Person", en).unwrap(), "Person");
        assert_eq!(r.preferred_label("ex:withLiteral", en).unwrap(), "Some note");
        assert_eq!(
            r.preferred_label("http://example.org/ind/abcdefgh", en).unwrap(),
            "Person abcde"
        );
        assert_eq!(
            r.preferred_label("http://example.org/ind/xyz", en).unwrap(),
            "Robot xyz"
        );
        assert_eq!(
            r.preferred_label("http://example.org/plain/Thing", en).unwrap(),
            "Thing"
        );
        // not in the graph at all
        assert_eq!(r.preferred_label("ex:Missing", en).unwrap(), "Missing");
    }

    #[test]
    fn test_preferred_label_errors() {
        let g = graph(json!([]));
        let r = LabelResolver::new(&g);
        assert!(matches!(
            r.preferred_label("", None),
            Err(JsonLdError::InvalidId { .. })
        ));
        assert!(matches!(
            r.preferred_label("http://example.org/", None),
            Err(JsonLdError::NoLocalName { .. })
        ));
    }

    #[test]
    fn test_named_individual_label_requires_marker() {
        let g = graph(json!([
            {"@id": "ex:p1", "@type": "ex:Person"},
            {"@id": "ex:p2", "@type": NI}
        ]));
        let r = LabelResolver::new(&g);
        assert_eq!(r.named_individual_label("ex:p1", None).unwrap(), None);
        assert_eq!(r.named_individual_label("ex:p2", None).unwrap(), None);
        assert_eq!(r.named_individual_label("ex:nope", None).unwrap(), None);
    }

    #[test]
    fn test_entity_label_type_prefix() {
        let g = graph(json!([
            {"@id": "ex:Vehicle", "@type": "owl:Class",
             "rdfs:label": {"@value": "Vehicle", "@language": "en"}},
            {"@id": "ex:car123456", "@type": ["owl:NamedIndividual", "ex:Vehicle"]},
            {"@id": "ex:Labelled", "@type": "ex:Vehicle",
             "label": [{"@value": "Etikett", "@language": "de"}, {"@value": "Label", "@language": "en"}]}
        ]));
        let r = LabelResolver::new(&g);

        assert_eq!(r.entity_label("ex:car123456", Some("en")).unwrap(), "Vehicle car12");
        assert_eq!(r.entity_label("ex:Labelled", Some("en")).unwrap(), "Label");
        assert_eq!(r.entity_label("ex:Labelled", None).unwrap(), "Etikett");
        // owl:Class is skipped, so the class falls back to its own label
        assert_eq!(r.entity_label("ex:Vehicle", Some("en")).unwrap(), "Vehicle");
        assert_eq!(r.entity_label("ex:elsewhere", None).unwrap(), "elsewhere");
    }

    #[test]
    fn test_entity_label_type_cycle_terminates() {
        let g = graph(json!([
            {"@id": "ex:A", "@type": "ex:B"},
            {"@id": "ex:B", "@type": "ex:A"}
        ]));
        let r = LabelResolver::new(&g);
        assert_eq!(r.entity_label("ex:A", None).unwrap(), "A B A");
    }
}
