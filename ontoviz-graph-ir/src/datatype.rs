//! Datatype helpers
//!
//! Datatypes in this IR are optional strings kept as written, except where a
//! caller asks for the compact `xsd:`/`rdf:` spelling.

use ontoviz_vocab::{compact, DATATYPE_PREFIXES};

/// Compact a datatype IRI into its `xsd:`/`rdf:` CURIE
///
/// Values already in `prefix:local` form are returned unchanged, as are
/// IRIs outside the XSD and RDF namespaces.
///
/// # Example
///
/// ```
/// use ontoviz_graph_ir::datatype::compact;
///
/// assert_eq!(compact("http://www.w3.org/2001/XMLSchema#integer"), "xsd:integer");
/// assert_eq!(compact("xsd:date"), "xsd:date");
/// assert_eq!(compact("http://example.org/dt"), "http://example.org/dt");
/// ```
pub fn compact(datatype: &str) -> String {
    if is_curie(datatype) {
        return datatype.to_string();
    }
    for (base, prefix) in DATATYPE_PREFIXES {
        if let Some(local) = datatype.strip_prefix(base) {
            return format!("{}{}", prefix, local);
        }
    }
    datatype.to_string()
}

/// True for datatypes in the `xsd:` or `rdf:` namespaces (compact spelling)
pub fn is_builtin(datatype: &str) -> bool {
    datatype.starts_with(compact::XSD_PREFIX) || datatype.starts_with(compact::RDF_PREFIX)
}

/// Datatype inferred for a bare JSON number
pub fn for_number(is_integer: bool) -> &'static str {
    if is_integer {
        compact::XSD_INTEGER
    } else {
        compact::XSD_DECIMAL
    }
}

/// Datatype inferred for a bare JSON boolean
pub fn for_boolean() -> &'static str {
    compact::XSD_BOOLEAN
}

/// `scheme:` followed by anything other than `//`
fn is_curie(s: &str) -> bool {
    let Some(colon) = s.find(':') else {
        return false;
    };
    let prefix = &s[..colon];
    let mut chars = prefix.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
        && !s[colon + 1..].starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_both_schemes() {
        assert_eq!(compact("http://www.w3.org/2001/XMLSchema#decimal"), "xsd:decimal");
        assert_eq!(compact("https://www.w3.org/2001/XMLSchema#boolean"), "xsd:boolean");
        assert_eq!(
            compact("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"),
            "rdf:langString"
        );
        assert_eq!(
            compact("https://www.w3.org/1999/02/22-rdf-syntax-ns#HTML"),
            "rdf:HTML"
        );
    }

    #[test]
    fn test_compact_leaves_curies_and_foreign_iris() {
        assert_eq!(compact("xsd:string"), "xsd:string");
        assert_eq!(compact("ex:myType"), "ex:myType");
        assert_eq!(compact("urn:x-type"), "urn:x-type");
        assert_eq!(compact("http://example.org/dt"), "http://example.org/dt");
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("xsd:integer"));
        assert!(is_builtin("rdf:langString"));
        assert!(!is_builtin("ex:thing"));
        assert!(!is_builtin("http://www.w3.org/2001/XMLSchema#integer"));
    }

    #[test]
    fn test_inferred_datatypes() {
        assert_eq!(for_number(true), "xsd:integer");
        assert_eq!(for_number(false), "xsd:decimal");
        assert_eq!(for_boolean(), "xsd:boolean");
    }
}
