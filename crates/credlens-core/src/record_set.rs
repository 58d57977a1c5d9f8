//! An observable, framework-agnostic list view.
//!
//! [`RecordSet`] owns the source records, the matchers and the current
//! filter state of one view. Every state change recomputes the visible set
//! and hands it to subscribers synchronously; nothing is cached between
//! changes.

use std::sync::Arc;

use tracing::debug;

use credlens_model::Record;

use crate::error::FilterError;
use crate::filter::filter_records;
use crate::matcher::MatcherSet;
use crate::options::ViewOptions;
use crate::sort::{SortSpec, sort_records};
use crate::state::{FilterState, FilterValue, SEARCH_KEY};

/// Handle returned by [`RecordSet::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&[&T])>;

pub struct RecordSet<T> {
    records: Arc<[T]>,
    matchers: MatcherSet<T>,
    defaults: FilterState,
    filters: FilterState,
    sort: Option<SortSpec>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
}

impl<T: Record> RecordSet<T> {
    /// Creates a view with the standard search box and category selects.
    pub fn new(records: impl Into<Arc<[T]>>) -> Self {
        Self::with_matchers(records, MatcherSet::standard())
    }

    pub fn with_matchers(records: impl Into<Arc<[T]>>, matchers: MatcherSet<T>) -> Self {
        let defaults = FilterState::unconstrained(matchers.keys());
        Self {
            records: records.into(),
            matchers,
            filters: defaults.clone(),
            defaults,
            sort: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the state `reset` returns to, and applies it.
    pub fn with_defaults(mut self, defaults: FilterState) -> Result<Self, FilterError> {
        for (key, _) in defaults.iter() {
            self.ensure_key(key)?;
        }
        let mut merged = FilterState::unconstrained(self.matchers.keys());
        for (key, value) in defaults.iter() {
            merged.set(key, value.clone());
        }
        self.filters = merged.clone();
        self.defaults = merged;
        Ok(self)
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn matchers(&self) -> &MatcherSet<T> {
        &self.matchers
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Recomputes the visible set from the current state.
    pub fn visible(&self) -> Vec<&T> {
        compute_visible(
            &self.records,
            &self.filters,
            &self.matchers,
            self.sort.as_ref(),
        )
    }

    /// Sets the control bound to `key`. The search key keeps a literal
    /// `"all"`; every other key treats it as the sentinel.
    pub fn set_filter(&mut self, key: &str, raw: &str) -> Result<(), FilterError> {
        self.ensure_key(key)?;
        self.filters.set(key, FilterValue::for_key(key, raw));
        self.notify();
        Ok(())
    }

    /// Sets the free-text search box.
    pub fn set_search(&mut self, text: &str) -> Result<(), FilterError> {
        self.set_filter(SEARCH_KEY, text)
    }

    /// Restores one key to its default value.
    pub fn clear_filter(&mut self, key: &str) -> Result<(), FilterError> {
        self.ensure_key(key)?;
        let value = self.defaults.get(key).cloned().unwrap_or_default();
        self.filters.set(key, value);
        self.notify();
        Ok(())
    }

    /// Restores every filter to its default and drops the sort key.
    pub fn reset(&mut self) {
        self.filters = self.defaults.clone();
        self.sort = None;
        self.notify();
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> Result<(), FilterError> {
        if let Some(spec) = &sort {
            spec.validate::<T>()?;
        }
        self.sort = sort;
        self.notify();
        Ok(())
    }

    /// Applies a whole view configuration, notifying subscribers once.
    ///
    /// Filters not named in `view` return to their defaults. Nothing changes
    /// if any part of `view` is rejected.
    pub fn apply(&mut self, view: &ViewOptions) -> Result<(), FilterError> {
        let mut filters = self.defaults.clone();
        if let Some(search) = &view.search {
            self.ensure_key(SEARCH_KEY)?;
            filters.set(SEARCH_KEY, FilterValue::text(search));
        }
        for (key, value) in &view.filters {
            self.ensure_key(key)?;
            filters.set(key.as_str(), FilterValue::for_key(key, value));
        }
        if let Some(spec) = &view.sort {
            spec.validate::<T>()?;
        }
        self.filters = filters;
        self.sort = view.sort.clone();
        self.notify();
        Ok(())
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&[&T]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn ensure_key(&self, key: &str) -> Result<(), FilterError> {
        if self.matchers.contains_key(key) {
            Ok(())
        } else {
            Err(FilterError::UnknownFilterKey {
                key: key.to_string(),
            })
        }
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let visible = compute_visible(
            &self.records,
            &self.filters,
            &self.matchers,
            self.sort.as_ref(),
        );
        debug!(
            entity = %T::KIND,
            subscribers = self.subscribers.len(),
            visible = visible.len(),
            "notifying subscribers"
        );
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&visible);
        }
    }
}

fn compute_visible<'a, T: Record>(
    records: &'a [T],
    filters: &FilterState,
    matchers: &MatcherSet<T>,
    sort: Option<&SortSpec>,
) -> Vec<&'a T> {
    let mut visible = filter_records(records, filters, matchers);
    if let Some(spec) = sort {
        sort_records(&mut visible, spec);
    }
    visible
}
