//! Error type compact IRIs
//!
//! These compact IRI strings identify error types so hosts can report
//! failures in a uniform way. They follow the pattern: `err:category/ErrorName`
//!
//! # Example Usage
//!
//! ```json
//! {
//!   "error": "Expected a JSON array of node objects, found object",
//!   "@type": "err:input/NotAnArray"
//! }
//! ```

/// Error namespace prefix
pub const ERR_PREFIX: &str = "err:";

// =============================================================================
// Input Errors (input)
// =============================================================================

/// Top-level input is not an array
pub const NOT_AN_ARRAY: &str = "err:input/NotAnArray";

/// Array entry is not an object
pub const NOT_AN_OBJECT: &str = "err:input/NotAnObject";

/// Node lacks an `@id`
pub const MISSING_ID: &str = "err:input/MissingId";

/// `@id` present but not a usable string
pub const INVALID_ID: &str = "err:input/InvalidId";

/// Two nodes share an `@id`
pub const DUPLICATE_ID: &str = "err:input/DuplicateId";

/// Predicate value of an unsupported shape
pub const INVALID_VALUE: &str = "err:input/InvalidValue";

/// Triple with an empty subject or predicate
pub const INVALID_TRIPLE: &str = "err:input/InvalidTriple";

/// Options rejected by validation
pub const INVALID_OPTIONS: &str = "err:input/InvalidOptions";

// =============================================================================
// IRI Errors (iri)
// =============================================================================

/// No local segment could be extracted
pub const NO_LOCAL_NAME: &str = "err:iri/NoLocalName";

// =============================================================================
// Operation Errors (op)
// =============================================================================

/// A schema inference stage failed
pub const SCHEMA_STAGE: &str = "err:op/SchemaStage";

/// A traversal root failed
pub const TRAVERSAL: &str = "err:op/Traversal";

/// A start id that cannot seed a traversal
pub const INVALID_START: &str = "err:op/InvalidStart";

/// Entity not present in the graph
pub const ENTITY_NOT_FOUND: &str = "err:op/EntityNotFound";

/// Every error type this workspace reports
pub const ALL: &[&str] = &[
    NOT_AN_ARRAY,
    NOT_AN_OBJECT,
    MISSING_ID,
    INVALID_ID,
    DUPLICATE_ID,
    INVALID_VALUE,
    INVALID_TRIPLE,
    INVALID_OPTIONS,
    NO_LOCAL_NAME,
    SCHEMA_STAGE,
    TRAVERSAL,
    INVALID_START,
    ENTITY_NOT_FOUND,
];

/// Category segment of an error type, `input` for `err:input/NotAnArray`
pub fn category(error_type: &str) -> Option<&str> {
    let rest = error_type.strip_prefix(ERR_PREFIX)?;
    rest.split_once('/').map(|(category, _)| category)
}

/// True for errors caused by the shape of caller input rather than by an operation
pub fn is_input_error(error_type: &str) -> bool {
    category(error_type) == Some("input")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types_are_distinct_and_categorized() {
        let mut seen = std::collections::HashSet::new();
        for ty in ALL {
            assert!(seen.insert(*ty), "duplicate error type {ty}");
            assert!(category(ty).is_some(), "uncategorized error type {ty}");
        }
    }

    #[test]
    fn test_category() {
        assert_eq!(category(NOT_AN_ARRAY), Some("input"));
        assert_eq!(category(NO_LOCAL_NAME), Some("iri"));
        assert_eq!(category("err:"), None);
        assert_eq!(category("not:an/error"), None);
        assert!(is_input_error(DUPLICATE_ID));
        assert!(!is_input_error(TRAVERSAL));
    }
}
