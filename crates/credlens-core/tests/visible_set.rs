//! Scenario tests for filtering, sorting and paging dashboard records.

use chrono::NaiveDate;

use credlens_core::{
    FilterState, FilterValue, Matcher, MatcherSet, PageRequest, RecordSet, SEARCH_KEY, SortSpec,
    ViewOptions, facet_counts, filter_records, paginate, percentage,
};
use credlens_model::{Credential, CredentialKind, CredentialStatus, RecordId};

fn credential(
    id: &str,
    title: &str,
    holder: &str,
    status: CredentialStatus,
    trust_score: u8,
) -> Credential {
    Credential {
        id: RecordId::new(id).unwrap(),
        title: title.to_string(),
        holder: holder.to_string(),
        issuer: "Stanford University".to_string(),
        kind: CredentialKind::Degree,
        status,
        issued: NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
        expires: None,
        trust_score,
    }
}

fn credentials() -> Vec<Credential> {
    vec![
        credential("1", "MSc Computer Science", "Sarah Connor", CredentialStatus::Verified, 92),
        credential("2", "BA History", "John Smith", CredentialStatus::Pending, 55),
        credential("3", "PhD Robotics", "Miles Dyson", CredentialStatus::Verified, 92),
    ]
}

fn ids(visible: &[&Credential]) -> Vec<String> {
    visible.iter().map(|c| c.id.to_string()).collect()
}

#[test]
fn search_finds_holder_regardless_of_case() {
    let records = credentials();
    let matchers = MatcherSet::standard();
    let hit = FilterState::new().with(SEARCH_KEY, FilterValue::text("sarah"));
    assert_eq!(ids(&filter_records(&records, &hit, &matchers)), vec!["1"]);
    let miss = FilterState::new().with(SEARCH_KEY, FilterValue::text("xyz"));
    assert!(filter_records(&records, &miss, &matchers).is_empty());
}

#[test]
fn filter_preserves_source_order() {
    let records = credentials();
    let matchers = MatcherSet::new().with(
        "pick",
        Matcher::custom(|record: &Credential, _: &str| record.id.as_str() != "2"),
    );
    let filters = FilterState::new().with("pick", "odd");
    assert_eq!(ids(&filter_records(&records, &filters, &matchers)), vec!["1", "3"]);
}

#[test]
fn numeric_fields_match_by_display_string() {
    let records = credentials();
    let matchers = MatcherSet::new().with("score", Matcher::equals("trust_score"));
    let filters = FilterState::new().with("score", "92");
    assert_eq!(ids(&filter_records(&records, &filters, &matchers)), vec!["1", "3"]);
}

#[test]
fn equal_sort_keys_keep_filtered_order() {
    let mut set = RecordSet::new(credentials());
    set.apply(&ViewOptions::new().with_sort(SortSpec::descending("trust_score")))
        .unwrap();
    assert_eq!(ids(&set.visible()), vec!["1", "3", "2"]);
}

#[test]
fn facets_count_visible_records() {
    let set = RecordSet::new(credentials());
    let visible = set.visible();
    let facets = facet_counts(visible.iter().copied(), "status");
    let share = percentage(facets[0].count as u64, visible.len() as u64);
    insta::assert_json_snapshot!(facets, @r#"
    [
      {
        "value": "verified",
        "count": 2
      },
      {
        "value": "pending",
        "count": 1
      }
    ]
    "#);
    assert!((share - 66.666).abs() < 0.01);
}

#[test]
fn paging_a_filtered_view() {
    let mut set = RecordSet::new(credentials());
    set.set_filter("status", "verified").unwrap();
    let visible = set.visible();
    let page = paginate(&visible, PageRequest::new(2, 1).unwrap());
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(page.items), vec!["3"]);
}
