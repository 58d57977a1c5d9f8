#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("no matcher registered for filter key '{key}'")]
    UnknownFilterKey { key: String },

    #[error("{entity} records cannot be sorted by '{field}'")]
    UnknownSortField { entity: String, field: String },

    #[error("invalid sort spec '{spec}': expected FIELD, FIELD:asc or FIELD:desc")]
    InvalidSortSpec { spec: String },

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("invalid tier scale: {message}")]
    InvalidTierScale { message: String },

    #[error("invalid filter argument '{arg}': expected KEY=VALUE")]
    InvalidFilterArg { arg: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;
