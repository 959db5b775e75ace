use ontoviz_graph_ir::TripleError;
use ontoviz_json_ld::JsonLdError;
use ontoviz_vocab::errors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid triple at index {index}: {source}")]
    InvalidTriple {
        index: usize,
        #[source]
        source: TripleError,
    },

    #[error(transparent)]
    InvalidInput(#[from] JsonLdError),

    #[error("Invalid schema options: {message}")]
    InvalidOptions { message: String },

    #[error("Schema inference failed during {stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Wrap with the name of the pipeline stage that failed
    pub fn in_stage(self, stage: &'static str) -> Self {
        SchemaError::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Compact error type IRI for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            SchemaError::InvalidTriple { .. } => errors::INVALID_TRIPLE,
            SchemaError::InvalidInput(e) => e.error_type(),
            SchemaError::InvalidOptions { .. } => errors::INVALID_OPTIONS,
            SchemaError::Stage { .. } => errors::SCHEMA_STAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
