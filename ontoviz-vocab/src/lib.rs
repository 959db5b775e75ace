//! RDF Vocabulary Constants for ontoviz
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs,
//! compact (CURIE) forms, JSON-LD keywords and error type codes used by the
//! schema builder and the entity graph tracer.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `compact` - the `prefix:local` forms emitted in schema output
//! - `cco` - Common Core Ontologies value predicates
//! - `jsonld` - JSON-LD keywords
//! - `errors` - Error type compact IRIs
//!
//! Input documents mix full IRIs and compact forms freely, so the `is_*`
//! helpers at the bottom of this module accept either spelling.

pub mod errors;

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// owl:ObjectProperty IRI
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

    /// owl:DatatypeProperty IRI
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

    /// owl:NamedIndividual IRI
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
}

/// Compact (`prefix:local`) forms
///
/// Schema output uses these spellings for the terms it synthesizes itself
/// (`@type` of class nodes, `rdfs:subClassOf` keys, datatype markers).
pub mod compact {
    pub const OWL_CLASS: &str = "owl:Class";
    pub const OWL_OBJECT_PROPERTY: &str = "owl:ObjectProperty";
    pub const OWL_DATATYPE_PROPERTY: &str = "owl:DatatypeProperty";
    pub const OWL_NAMED_INDIVIDUAL: &str = "owl:NamedIndividual";
    pub const RDFS_SUB_CLASS_OF: &str = "rdfs:subClassOf";
    pub const RDFS_DOMAIN: &str = "rdfs:domain";
    pub const RDFS_RANGE: &str = "rdfs:range";
    pub const RDFS_LABEL: &str = "rdfs:label";
    pub const RDF_LANG_STRING: &str = "rdf:langString";
    pub const XSD_STRING: &str = "xsd:string";
    pub const XSD_INTEGER: &str = "xsd:integer";
    pub const XSD_DECIMAL: &str = "xsd:decimal";
    pub const XSD_BOOLEAN: &str = "xsd:boolean";
    pub const XSD_DATE: &str = "xsd:date";
    pub const XSD_DATE_TIME: &str = "xsd:dateTime";

    /// `xsd:` prefix
    pub const XSD_PREFIX: &str = "xsd:";

    /// `rdf:` prefix
    pub const RDF_PREFIX: &str = "rdf:";
}

/// Common Core Ontologies value predicates
///
/// Individuals in CCO-based data carry their literal payload on a small set
/// of `has_*_value` predicates whose datatype is fixed by convention.
pub mod cco {
    /// CCO namespace
    pub const NS: &str = "http://www.ontologyrepository.com/CommonCoreOntologies/";

    pub const HAS_TEXT_VALUE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/has_text_value";
    pub const HAS_INTEGER_VALUE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/has_integer_value";
    pub const HAS_DECIMAL_VALUE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/has_decimal_value";
    pub const HAS_DATE_VALUE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/has_date_value";
    pub const HAS_DATETIME_VALUE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/has_datetime_value";
    pub const HAS_BOOLEAN_VALUE: &str =
        "http://www.ontologyrepository.com/CommonCoreOntologies/has_boolean_value";

    /// Predicate to compact datatype, in declaration order
    pub const VALUE_DATATYPES: &[(&str, &str)] = &[
        (HAS_TEXT_VALUE, super::compact::RDF_LANG_STRING),
        (HAS_INTEGER_VALUE, super::compact::XSD_INTEGER),
        (HAS_DECIMAL_VALUE, super::compact::XSD_DECIMAL),
        (HAS_DATE_VALUE, super::compact::XSD_DATE),
        (HAS_DATETIME_VALUE, super::compact::XSD_DATE_TIME),
        (HAS_BOOLEAN_VALUE, super::compact::XSD_BOOLEAN),
    ];
}

/// JSON-LD keywords
pub mod jsonld {
    pub const ID: &str = "@id";
    pub const TYPE: &str = "@type";
    pub const VALUE: &str = "@value";
    pub const LANGUAGE: &str = "@language";

    /// Returns true for any `@`-prefixed key
    pub fn is_keyword(key: &str) -> bool {
        key.starts_with('@')
    }
}

/// Keys searched for a formal label, in priority order
pub const LABEL_KEYS: [&str; 3] = [rdfs::LABEL, compact::RDFS_LABEL, "label"];

/// Namespace to prefix mappings used when compacting datatype IRIs
///
/// Both `http` and `https` spellings of the W3C namespaces occur in the wild.
pub const DATATYPE_PREFIXES: &[(&str, &str)] = &[
    ("http://www.w3.org/2001/XMLSchema#", compact::XSD_PREFIX),
    ("https://www.w3.org/2001/XMLSchema#", compact::XSD_PREFIX),
    ("http://www.w3.org/1999/02/22-rdf-syntax-ns#", compact::RDF_PREFIX),
    ("https://www.w3.org/1999/02/22-rdf-syntax-ns#", compact::RDF_PREFIX),
];

/// Returns true if `iri` equals either the full or the compact spelling of a term
#[inline]
pub fn is_term(iri: &str, full: &str, compact: &str) -> bool {
    iri == full || iri == compact
}

/// owl:Class in either spelling
pub fn is_owl_class(iri: &str) -> bool {
    is_term(iri, owl::CLASS, compact::OWL_CLASS)
}

/// owl:ObjectProperty in either spelling
pub fn is_owl_object_property(iri: &str) -> bool {
    is_term(iri, owl::OBJECT_PROPERTY, compact::OWL_OBJECT_PROPERTY)
}

/// owl:DatatypeProperty in either spelling
pub fn is_owl_datatype_property(iri: &str) -> bool {
    is_term(iri, owl::DATATYPE_PROPERTY, compact::OWL_DATATYPE_PROPERTY)
}

/// owl:NamedIndividual in either spelling
pub fn is_named_individual(iri: &str) -> bool {
    is_term(iri, owl::NAMED_INDIVIDUAL, compact::OWL_NAMED_INDIVIDUAL)
}

/// rdfs:subClassOf in either spelling
pub fn is_sub_class_of(iri: &str) -> bool {
    is_term(iri, rdfs::SUB_CLASS_OF, compact::RDFS_SUB_CLASS_OF)
}

/// rdfs:domain in either spelling
pub fn is_rdfs_domain(iri: &str) -> bool {
    is_term(iri, rdfs::DOMAIN, compact::RDFS_DOMAIN)
}

/// rdfs:range in either spelling
pub fn is_rdfs_range(iri: &str) -> bool {
    is_term(iri, rdfs::RANGE, compact::RDFS_RANGE)
}
