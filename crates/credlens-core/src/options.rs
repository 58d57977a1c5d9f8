//! View configuration collected from a presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::page::PageRequest;
use crate::sort::SortSpec;

/// Everything a user can set on one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Free-text search box contents.
    #[serde(default)]
    pub search: Option<String>,
    /// Select and tab values by filter key.
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default)]
    pub page: Option<PageRequest>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = Some(page);
        self
    }
}

/// Splits a `KEY=VALUE` argument.
pub fn parse_filter_arg(arg: &str) -> Result<(String, String), FilterError> {
    let invalid = || FilterError::InvalidFilterArg {
        arg: arg.to_string(),
    };
    let (key, value) = arg.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }
    Ok((key.to_string(), value.trim().to_string()))
}
