//! Class pass: explicit `owl:Class` declarations and `rdfs:subClassOf` links

use crate::arena::Arena;
use crate::error::{Result, SchemaError};
use ontoviz_graph_ir::{Triple, TripleSet};
use ontoviz_vocab::{is_owl_class, is_sub_class_of};

/// A class known to the schema
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDefinition {
    pub id: String,
    /// Direct superclass; the last `rdfs:subClassOf` triple wins
    pub sub_class_of: Option<String>,
}

impl ClassDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sub_class_of: None,
        }
    }
}

pub type ClassMap = Arena<ClassDefinition>;

/// Build the class map from triples
///
/// Every subject typed `owl:Class` gets an entry, in triple order. Then each
/// `rdfs:subClassOf` triple records the superclass on its subject (creating
/// the subject entry if needed) and ensures a placeholder for the superclass.
pub fn build_class_map(triples: &TripleSet) -> Result<ClassMap> {
    validate_triples(triples.triples())?;

    let mut classes = ClassMap::new();
    for t in triples.type_assertions() {
        if is_owl_class(&t.object) {
            classes.ensure_with(&t.subject, || ClassDefinition::new(&t.subject));
        }
    }

    for t in triples.iter().filter(|t| is_sub_class_of(&t.predicate)) {
        classes
            .ensure_with(&t.subject, || ClassDefinition::new(&t.subject))
            .sub_class_of = Some(t.object.clone());
        classes.ensure_with(&t.object, || ClassDefinition::new(&t.object));
    }

    tracing::debug!(classes = classes.len(), "built class map");
    Ok(classes)
}

/// Reject triples with an empty subject or predicate
pub(crate) fn validate_triples(triples: &[Triple]) -> Result<()> {
    for (index, t) in triples.iter().enumerate() {
        t.validate()
            .map_err(|source| SchemaError::InvalidTriple { index, source })?;
    }
    Ok(())
}
