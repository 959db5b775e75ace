use ontoviz_vocab::errors;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonLdError {
    #[error("Expected a JSON array of node objects, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Node at index {index} is not an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Node at index {index} has no @id")]
    MissingId { index: usize },

    #[error("Invalid @id: {message}")]
    InvalidId { message: String },

    #[error("Duplicate @id: {id}")]
    DuplicateId { id: String },

    #[error("Invalid value for '{predicate}' on {id}: {message}")]
    InvalidValue {
        id: String,
        predicate: String,
        message: String,
    },

    #[error("Could not extract local name from IRI: '{iri}'")]
    NoLocalName { iri: String },
}

impl JsonLdError {
    /// Compact error type IRI for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            JsonLdError::NotAnArray { .. } => errors::NOT_AN_ARRAY,
            JsonLdError::NotAnObject { .. } => errors::NOT_AN_OBJECT,
            JsonLdError::MissingId { .. } => errors::MISSING_ID,
            JsonLdError::InvalidId { .. } => errors::INVALID_ID,
            JsonLdError::DuplicateId { .. } => errors::DUPLICATE_ID,
            JsonLdError::InvalidValue { .. } => errors::INVALID_VALUE,
            JsonLdError::NoLocalName { .. } => errors::NO_LOCAL_NAME,
        }
    }

    pub(crate) fn invalid_value(
        id: &str,
        predicate: &str,
        message: impl Into<String>,
    ) -> Self {
        JsonLdError::InvalidValue {
            id: id.to_string(),
            predicate: predicate.to_string(),
            message: message.into(),
        }
    }
}

/// Name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub type Result<T> = std::result::Result<T, JsonLdError>;
