//! Filterable record sets and summary projections.
//!
//! The core of every dashboard list view: a fixed list of typed records, the
//! current filter state, and a visible subset recomputed from the two on
//! every change.
//!
//! ```
//! use credlens_core::{FilterState, FilterValue, MatcherSet, SEARCH_KEY, filter_records};
//! use credlens_model::Proposal;
//!
//! let proposals: Vec<Proposal> = Vec::new();
//! let filters = FilterState::new()
//!     .with(SEARCH_KEY, FilterValue::text("fee"))
//!     .with("status", "all");
//! let visible = filter_records(&proposals, &filters, &MatcherSet::standard());
//! assert!(visible.is_empty());
//! ```

pub mod error;
pub mod facet;
pub mod filter;
pub mod matcher;
pub mod options;
pub mod page;
pub mod projection;
pub mod record_set;
pub mod sort;
pub mod state;

pub use error::{FilterError, Result};
pub use facet::{FacetCount, facet_counts};
pub use filter::{filter_records, matches};
pub use matcher::{Matcher, MatcherSet};
pub use options::{ViewOptions, parse_filter_arg};
pub use page::{Page, PageRequest, paginate};
pub use projection::{
    Tier, TierScale, VoteTally, days_between, expiry_label, format_date, format_percentage,
    percentage, progress, truncate_middle,
};
pub use record_set::{RecordSet, SubscriptionId};
pub use sort::{SortDirection, SortSpec, sort_records};
pub use state::{ALL_SENTINEL, FilterState, FilterValue, SEARCH_KEY};
