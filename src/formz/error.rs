use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormzError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FormzError>;
