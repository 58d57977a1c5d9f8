//! Reading record collections from fixture files.
//!
//! Each entity lives in `<stem>.json` (an array of objects) or `<stem>.csv`
//! (a header row of field names). JSON wins when both exist.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use credlens_model::Record;

use crate::error::{FixtureError, Result};

pub const DATA_DIR_ENV_VAR: &str = "CREDLENS_DATA_DIR";

/// Fixture directory used when neither a flag nor the env var names one.
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

pub fn resolve_data_root(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => default_data_root(),
    }
}

/// Loads the collection for `T` from `dir`.
pub fn load_collection<T>(dir: &Path) -> Result<Vec<T>>
where
    T: Record + DeserializeOwned,
{
    let stem = T::KIND.file_stem();
    let json_path = dir.join(format!("{stem}.json"));
    let csv_path = dir.join(format!("{stem}.csv"));
    let records = if json_path.is_file() {
        if csv_path.is_file() {
            debug!(path = %csv_path.display(), "ignoring CSV fixture shadowed by JSON");
        }
        load_json(&json_path)?
    } else if csv_path.is_file() {
        load_csv(&csv_path)?
    } else {
        return Err(FixtureError::MissingCollection {
            entity: T::KIND,
            dir: dir.to_path_buf(),
        });
    };
    info!(
        entity = %T::KIND,
        dir = %dir.display(),
        records = records.len(),
        "loaded fixture collection"
    );
    Ok(records)
}

pub fn load_json<T>(path: &Path) -> Result<Vec<T>>
where
    T: Record + DeserializeOwned,
{
    let contents = fs::read_to_string(path).map_err(|source| FixtureError::io(path, source))?;
    let records: Vec<T> =
        serde_json::from_str(&contents).map_err(|source| FixtureError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    ensure_unique_ids(&records)?;
    debug!(path = %path.display(), records = records.len(), "parsed JSON fixture");
    Ok(records)
}

pub fn load_csv<T>(path: &Path) -> Result<Vec<T>>
where
    T: Record + DeserializeOwned,
{
    let csv_error = |error: csv::Error| FixtureError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<T>() {
        records.push(row.map_err(csv_error)?);
    }
    ensure_unique_ids(&records)?;
    debug!(path = %path.display(), records = records.len(), "parsed CSV fixture");
    Ok(records)
}

fn ensure_unique_ids<T: Record>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id().as_str()) {
            return Err(FixtureError::DuplicateId {
                entity: T::KIND,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}
