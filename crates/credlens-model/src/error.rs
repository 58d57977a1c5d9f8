use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("record id must not be empty")]
    InvalidRecordId,
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
    #[error("unknown {kind} value: {value}")]
    UnknownStatus { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
