//! Predicate evaluation and the visible set builder.

use tracing::{debug, warn};

use credlens_model::Record;

use crate::matcher::MatcherSet;
use crate::state::FilterState;

/// Returns true when `record` passes every active filter.
///
/// Keys without a registered matcher cannot constrain the result.
pub fn matches<T: Record>(record: &T, filters: &FilterState, matchers: &MatcherSet<T>) -> bool {
    filters.iter().all(|(key, value)| match matchers.get(key) {
        Some(matcher) => matcher.evaluate(record, value),
        None => true,
    })
}

/// Filters `records` in place order, returning references to the survivors.
///
/// The output is a subsequence of `records`; calling this twice with the
/// same inputs yields the same sequence.
pub fn filter_records<'a, T: Record>(
    records: &'a [T],
    filters: &FilterState,
    matchers: &MatcherSet<T>,
) -> Vec<&'a T> {
    for (key, value) in filters.active() {
        if !matchers.contains_key(key) {
            warn!(entity = %T::KIND, key, value, "ignoring filter without a matcher");
        }
    }
    let visible: Vec<&T> = records
        .iter()
        .filter(|record| matches(*record, filters, matchers))
        .collect();
    debug!(
        entity = %T::KIND,
        total = records.len(),
        visible = visible.len(),
        "recomputed visible set"
    );
    visible
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use credlens_model::{AccountStatus, RecordId, UserAccount, UserRole};

    use super::*;
    use crate::matcher::Matcher;
    use crate::state::{FilterValue, SEARCH_KEY};

    fn user(id: &str, name: &str, role: UserRole, status: AccountStatus) -> UserAccount {
        UserAccount {
            id: RecordId::new(id).unwrap(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            role,
            status,
            organization: None,
            joined: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_active: None,
        }
    }

    fn ids(records: &[&UserAccount]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let users = vec![user("1", "Sarah Connor", UserRole::User, AccountStatus::Active)];
        let matchers = MatcherSet::standard();
        let hit = FilterState::new().with(SEARCH_KEY, FilterValue::text("sarah"));
        let miss = FilterState::new().with(SEARCH_KEY, FilterValue::text("xyz"));
        assert_eq!(filter_records(&users, &hit, &matchers).len(), 1);
        assert!(filter_records(&users, &miss, &matchers).is_empty());
    }

    #[test]
    fn missing_optional_field_does_not_match_search() {
        let users = vec![user("1", "Kyle Reese", UserRole::User, AccountStatus::Active)];
        let matchers = MatcherSet::new().with(SEARCH_KEY, Matcher::contains(["organization"]));
        let filters = FilterState::new().with(SEARCH_KEY, FilterValue::text("tech"));
        assert!(filter_records(&users, &filters, &matchers).is_empty());
    }

    #[test]
    fn missing_optional_field_does_not_equal_anything() {
        let mut employed = user("1", "Miles Dyson", UserRole::User, AccountStatus::Active);
        employed.organization = Some("Cyberdyne".to_string());
        let users = vec![
            employed,
            user("2", "Kyle Reese", UserRole::User, AccountStatus::Active),
        ];
        let matchers = MatcherSet::new().with("organization", Matcher::equals("organization"));

        let filters = FilterState::new().with("organization", "Cyberdyne");
        assert_eq!(ids(&filter_records(&users, &filters, &matchers)), vec!["1"]);

        let blank = FilterState::new().with("organization", FilterValue::Value(String::new()));
        assert!(filter_records(&users, &blank, &matchers).is_empty());
    }

    #[test]
    fn predicates_are_anded() {
        let users = vec![
            user("1", "Ann", UserRole::Admin, AccountStatus::Active),
            user("2", "Bob", UserRole::Admin, AccountStatus::Suspended),
            user("3", "Cat", UserRole::Verifier, AccountStatus::Active),
        ];
        let filters = FilterState::new()
            .with("role", "admin")
            .with("status", "active");
        let visible = filter_records(&users, &filters, &MatcherSet::standard());
        assert_eq!(ids(&visible), vec!["1"]);
    }

    #[test]
    fn unregistered_key_is_ignored() {
        let users = vec![user("1", "Ann", UserRole::Admin, AccountStatus::Active)];
        let filters = FilterState::new().with("department", "finance");
        let visible = filter_records(&users, &filters, &MatcherSet::standard());
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn custom_matcher_sees_raw_value() {
        let users = vec![
            user("1", "Ann", UserRole::Admin, AccountStatus::Active),
            user("2", "Bob", UserRole::User, AccountStatus::Active),
        ];
        let matchers = MatcherSet::new().with(
            "initial",
            Matcher::custom(|user: &UserAccount, value: &str| user.name.starts_with(value)),
        );
        let filters = FilterState::new().with("initial", "B");
        assert_eq!(ids(&filter_records(&users, &filters, &matchers)), vec!["2"]);
    }

    #[test]
    fn empty_records_yield_empty_set() {
        let users: Vec<UserAccount> = Vec::new();
        let visible = filter_records(&users, &FilterState::new(), &MatcherSet::standard());
        assert!(visible.is_empty());
    }
}
