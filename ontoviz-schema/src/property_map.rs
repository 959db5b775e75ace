//! Property pass: declared object/datatype properties with domain and range

use crate::arena::Arena;
use crate::class_map::validate_triples;
use crate::error::Result;
use ontoviz_graph_ir::TripleSet;
use ontoviz_vocab::{is_owl_datatype_property, is_owl_object_property, is_rdfs_domain, is_rdfs_range};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub id: String,
    /// Declared property kinds, as written, without repeats
    pub types: Vec<String>,
    pub domain: Option<String>,
    pub range: Option<String>,
}

pub type PropertyMap = Arena<PropertyDefinition>;

/// Build the property map from triples
///
/// Subjects typed `owl:ObjectProperty` or `owl:DatatypeProperty` get an
/// entry; `rdfs:domain` / `rdfs:range` triples on those subjects fill in the
/// entry, later triples overwriting earlier ones.
pub fn build_property_map(triples: &TripleSet) -> Result<PropertyMap> {
    validate_triples(triples.triples())?;

    let mut properties = PropertyMap::new();
    for t in triples.type_assertions() {
        if !(is_owl_object_property(&t.object) || is_owl_datatype_property(&t.object)) {
            continue;
        }
        let entry = properties.ensure_with(&t.subject, || PropertyDefinition {
            id: t.subject.clone(),
            types: Vec::new(),
            domain: None,
            range: None,
        });
        if !entry.types.contains(&t.object) {
            entry.types.push(t.object.clone());
        }
    }

    for t in triples.iter() {
        let Some(entry) = properties.get_mut(&t.subject) else {
            continue;
        };
        if is_rdfs_domain(&t.predicate) {
            entry.domain = Some(t.object.clone());
        } else if is_rdfs_range(&t.predicate) {
            entry.range = Some(t.object.clone());
        }
    }

    tracing::debug!(properties = properties.len(), "built property map");
    Ok(properties)
}
