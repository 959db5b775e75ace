//! Triple type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicate used for `@type` assertions
pub const TYPE_PREDICATE: &str = "@type";

/// Kind of a triple's object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermKind {
    /// Object is an entity identifier
    #[serde(rename = "IRI")]
    Iri,
    /// Object is a lexical value
    #[serde(rename = "literal")]
    Literal,
}

/// A (subject, predicate, object) assertion with literal metadata
///
/// `object` is always a string: the referenced id for `TermKind::Iri`, the
/// lexical form for `TermKind::Literal`. Language and datatype are only ever
/// set on literals.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub object_term_type: TermKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_datatype: Option<String>,
}

/// Structural problem with a triple
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TripleError {
    EmptySubject,
    EmptyPredicate,
}

impl fmt::Display for TripleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripleError::EmptySubject => write!(f, "subject must be a non-empty string"),
            TripleError::EmptyPredicate => write!(f, "predicate must be a non-empty string"),
        }
    }
}

impl std::error::Error for TripleError {}

impl Triple {
    /// Create a triple whose object is an entity reference
    pub fn iri(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            object_term_type: TermKind::Iri,
            object_language: None,
            object_datatype: None,
        }
    }

    /// Create a literal triple
    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        lexical: impl Into<String>,
        language: Option<String>,
        datatype: Option<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: lexical.into(),
            object_term_type: TermKind::Literal,
            object_language: language,
            object_datatype: datatype,
        }
    }

    /// Create an `@type` assertion
    pub fn rdf_type(subject: impl Into<String>, class: impl Into<String>) -> Self {
        Self::iri(subject, TYPE_PREDICATE, class)
    }

    /// Check if this is an `@type` assertion
    pub fn is_type_assertion(&self) -> bool {
        self.predicate == TYPE_PREDICATE
    }

    /// Check if the object is an entity reference
    pub fn is_iri(&self) -> bool {
        self.object_term_type == TermKind::Iri
    }

    /// Check if the object is a literal
    pub fn is_literal(&self) -> bool {
        self.object_term_type == TermKind::Literal
    }

    /// Reject triples that cannot name anything
    pub fn validate(&self) -> Result<(), TripleError> {
        if self.subject.is_empty() {
            return Err(TripleError::EmptySubject);
        }
        if self.predicate.is_empty() {
            return Err(TripleError::EmptyPredicate);
        }
        Ok(())
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object_term_type {
            TermKind::Iri => write!(f, "<{}> <{}> <{}>", self.subject, self.predicate, self.object),
            TermKind::Literal => {
                write!(f, "<{}> <{}> {:?}", self.subject, self.predicate, self.object)?;
                if let Some(lang) = &self.object_language {
                    write!(f, "@{}", lang)?;
                } else if let Some(dt) = &self.object_datatype {
                    write!(f, "^^{}", dt)?;
                }
                Ok(())
            }
        }
    }
}
