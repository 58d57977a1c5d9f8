#![deny(unsafe_code)]

use std::path::PathBuf;

use credlens_model::EntityKind;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("duplicate {entity} id: {id}")]
    DuplicateId { entity: EntityKind, id: String },

    #[error("no {entity} fixture (.json or .csv) under {dir}")]
    MissingCollection { entity: EntityKind, dir: PathBuf },
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
