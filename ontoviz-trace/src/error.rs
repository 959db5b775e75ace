use ontoviz_json_ld::JsonLdError;
use ontoviz_vocab::errors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error(transparent)]
    InvalidInput(#[from] JsonLdError),

    #[error("Invalid start id: {id:?}")]
    InvalidStartId { id: String },

    #[error("Invalid trace options: {message}")]
    InvalidOptions { message: String },

    #[error("Entity with IRI {id} not found in the graph")]
    EntityNotFound { id: String },

    #[error("Graph traversal failed from {root}: {source}")]
    Traversal {
        root: String,
        #[source]
        source: Box<TraceError>,
    },
}

impl TraceError {
    /// Compact error type IRI for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            TraceError::InvalidInput(e) => e.error_type(),
            TraceError::InvalidStartId { .. } => errors::INVALID_START,
            TraceError::InvalidOptions { .. } => errors::INVALID_OPTIONS,
            TraceError::EntityNotFound { .. } => errors::ENTITY_NOT_FOUND,
            TraceError::Traversal { .. } => errors::TRAVERSAL,
        }
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;
