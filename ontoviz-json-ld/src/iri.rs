use crate::error::{JsonLdError, Result};

/// Extract the local name of an IRI or CURIE.
///
/// - IRIs containing `/` or `#`: the segment after the last of them
/// - otherwise, CURIEs: the part after the last `:`, so `urn:isbn:123`
///   gives `123` rather than its second segment
/// - otherwise the whole string
///
/// # Errors
///
/// `NoLocalName` when the selected segment is empty
/// (`http://example.org/`, `ex:`, or a blank input).
///
/// # Example
///
/// ```
/// use ontoviz_json_ld::iri::local_name;
///
/// assert_eq!(local_name("http://example.org/Person/123").unwrap(), "123");
/// assert_eq!(local_name("http://example.org#Thing").unwrap(), "Thing");
/// assert_eq!(local_name("ex:Agent").unwrap(), "Agent");
/// ```
pub fn local_name(iri: &str) -> Result<&str> {
    let local = match iri.rfind(&['/', '#'][..]) {
        Some(pos) => &iri[pos + 1..],
        None => match iri.rfind(':') {
            Some(pos) => &iri[pos + 1..],
            None => iri,
        },
    };
    if local.trim().is_empty() {
        return Err(JsonLdError::NoLocalName {
            iri: iri.to_string(),
        });
    }
    Ok(local)
}

/// Batch form of [`local_name`]; fails on the first bad IRI
pub fn local_names<'a, I>(iris: I) -> Result<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    iris.into_iter().map(local_name).collect()
}

/// Local name, or the IRI itself when none can be extracted
pub fn local_name_or_iri(iri: &str) -> &str {
    local_name(iri).unwrap_or(iri)
}
