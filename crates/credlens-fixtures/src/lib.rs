#![deny(unsafe_code)]

pub mod context;
pub mod error;
pub mod loaders;

pub use crate::context::DataContext;
pub use crate::error::{FixtureError, Result};
pub use crate::loaders::{
    DATA_DIR_ENV_VAR, default_data_root, load_collection, load_csv, load_json, resolve_data_root,
};
