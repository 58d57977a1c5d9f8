//! Current search and select values for one view.

use std::collections::BTreeMap;

/// Reserved select value meaning "this filter is inactive".
pub const ALL_SENTINEL: &str = "all";

/// Key the standard matcher set uses for the free-text search box.
pub const SEARCH_KEY: &str = "search";

/// The value of a single filter control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// No constraint.
    #[default]
    Any,
    Value(String),
}

impl FilterValue {
    /// Interprets a select control value; the sentinel and blanks disable it.
    pub fn choice(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            FilterValue::Any
        } else {
            FilterValue::Value(trimmed.to_string())
        }
    }

    /// Interprets a free-text search box; only a blank box disables it.
    pub fn text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            FilterValue::Any
        } else {
            FilterValue::Value(raw.to_string())
        }
    }

    /// Interprets `raw` as the control bound to `key`: the search box for
    /// [`SEARCH_KEY`], a select for anything else.
    pub fn for_key(key: &str, raw: &str) -> Self {
        if key == SEARCH_KEY {
            FilterValue::text(raw)
        } else {
            FilterValue::choice(raw)
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FilterValue::Value(_))
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FilterValue::Any => None,
            FilterValue::Value(value) => Some(value),
        }
    }
}

/// Select semantics; use [`FilterValue::text`] for the search box.
impl From<&str> for FilterValue {
    fn from(raw: &str) -> Self {
        FilterValue::choice(raw)
    }
}

/// Mapping from filter key to the control's current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state with every key set to the sentinel.
    pub fn unconstrained<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: keys
                .into_iter()
                .map(|key| (key.into(), FilterValue::Any))
                .collect(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.values.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates the keys whose value constrains the result.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter_map(|(key, value)| value.as_value().map(|value| (key.as_str(), value)))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.values.values().all(|value| !value.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_case_insensitive() {
        assert_eq!(FilterValue::choice("All"), FilterValue::Any);
        assert_eq!(FilterValue::choice(" "), FilterValue::Any);
        assert_eq!(
            FilterValue::choice("pending"),
            FilterValue::Value("pending".to_string())
        );
    }

    #[test]
    fn search_text_may_equal_the_sentinel() {
        assert!(FilterValue::text("all").is_active());
        assert!(!FilterValue::text("   ").is_active());
        assert!(FilterValue::for_key(SEARCH_KEY, "all").is_active());
        assert!(!FilterValue::for_key("status", "all").is_active());
    }

    #[test]
    fn active_skips_sentinels() {
        let state = FilterState::unconstrained(["status", "role"]).with("role", "admin");
        let active: Vec<_> = state.active().collect();
        assert_eq!(active, vec![("role", "admin")]);
        assert!(!state.is_unconstrained());
    }
}
