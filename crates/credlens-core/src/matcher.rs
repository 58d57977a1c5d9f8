//! Per-key comparison functions supplied by the view.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use credlens_model::{FieldValue, Record};

use crate::state::{FilterValue, SEARCH_KEY};

type CustomFn<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;

/// How one filter key constrains a record.
pub enum Matcher<T> {
    /// Case-insensitive substring match against any of the fields.
    Contains { fields: Vec<String> },
    /// Exact equality against a single field.
    Equals { field: String },
    /// Caller-supplied predicate, only invoked for active values.
    Custom(CustomFn<T>),
}

impl<T> Matcher<T> {
    pub fn contains<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Matcher::Contains {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn equals(field: impl Into<String>) -> Self {
        Matcher::Equals {
            field: field.into(),
        }
    }

    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        Matcher::Custom(Arc::new(predicate))
    }
}

impl<T: Record> Matcher<T> {
    /// Decides whether `record` passes this matcher for `value`.
    pub fn evaluate(&self, record: &T, value: &FilterValue) -> bool {
        let Some(value) = value.as_value() else {
            return true;
        };
        match self {
            Matcher::Contains { fields } => {
                let needle = value.trim().to_lowercase();
                if needle.is_empty() {
                    return true;
                }
                fields.iter().any(|field| {
                    record
                        .field(field)
                        .is_some_and(|found| text_of(&found).to_lowercase().contains(&needle))
                })
            }
            Matcher::Equals { field } => record
                .field(field)
                .is_some_and(|found| text_of(&found) == value),
            Matcher::Custom(predicate) => predicate(record, value),
        }
    }
}

fn text_of(value: &FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => (*text).to_string(),
        other => other.display_string(),
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        match self {
            Matcher::Contains { fields } => Matcher::Contains {
                fields: fields.clone(),
            },
            Matcher::Equals { field } => Matcher::Equals {
                field: field.clone(),
            },
            Matcher::Custom(predicate) => Matcher::Custom(Arc::clone(predicate)),
        }
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Contains { fields } => {
                f.debug_struct("Contains").field("fields", fields).finish()
            }
            Matcher::Equals { field } => f.debug_struct("Equals").field("field", field).finish(),
            Matcher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Matchers keyed by filter key.
pub struct MatcherSet<T> {
    matchers: BTreeMap<String, Matcher<T>>,
}

impl<T> MatcherSet<T> {
    pub fn new() -> Self {
        Self {
            matchers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, matcher: Matcher<T>) -> Self {
        self.insert(key, matcher);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, matcher: Matcher<T>) {
        self.matchers.insert(key.into(), matcher);
    }

    pub fn get(&self, key: &str) -> Option<&Matcher<T>> {
        self.matchers.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.matchers.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl<T: Record> MatcherSet<T> {
    /// The controls every list view offers: a search box over the record's
    /// search fields plus one select per category field.
    pub fn standard() -> Self {
        let mut set = Self::new().with(
            SEARCH_KEY,
            Matcher::contains(T::search_fields().iter().copied()),
        );
        for field in T::category_fields() {
            set.insert(*field, Matcher::equals(*field));
        }
        set
    }
}

impl<T> Default for MatcherSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MatcherSet<T> {
    fn clone(&self) -> Self {
        Self {
            matchers: self.matchers.clone(),
        }
    }
}

impl<T> fmt::Debug for MatcherSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.matchers.iter()).finish()
    }
}
