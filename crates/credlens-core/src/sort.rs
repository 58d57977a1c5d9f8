//! Explicit, opt-in ordering of a visible set.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use credlens_model::Record;

use crate::error::FilterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A sort key chosen by the user, e.g. `trust_score:desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Checks that `T` exposes the sort field.
    pub fn validate<T: Record>(&self) -> Result<(), FilterError> {
        if T::field_names().contains(&self.field.as_str()) {
            Ok(())
        } else {
            Err(FilterError::UnknownSortField {
                entity: T::KIND.to_string(),
                field: self.field.clone(),
            })
        }
    }
}

impl FromStr for SortSpec {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidSortSpec {
            spec: s.to_string(),
        };
        let (field, direction) = match s.trim().split_once(':') {
            Some((field, direction)) => {
                let direction = match direction.trim().to_ascii_lowercase().as_str() {
                    "asc" | "ascending" => SortDirection::Ascending,
                    "desc" | "descending" => SortDirection::Descending,
                    _ => return Err(invalid()),
                };
                (field.trim(), direction)
            }
            None => (s.trim(), SortDirection::Ascending),
        };
        if field.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}:asc", self.field),
            SortDirection::Descending => write!(f, "{}:desc", self.field),
        }
    }
}

/// Stable sort of `records` by `spec`; records missing the field go last.
pub fn sort_records<T: Record>(records: &mut [&T], spec: &SortSpec) {
    records.sort_by(|a, b| {
        match (a.field(&spec.field), b.field(&spec.field)) {
            (Some(left), Some(right)) => {
                let ordering = left.sort_cmp(&right);
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
