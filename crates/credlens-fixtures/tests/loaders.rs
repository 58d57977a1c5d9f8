//! Integration tests for fixture loading.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use credlens_core::{RecordSet, facet_counts};
use credlens_fixtures::{DataContext, FixtureError, load_collection, load_csv};
use credlens_model::{Credential, Dispute, EntityKind, Proposal, UserAccount};

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn workspace_fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

#[test]
fn bundled_fixtures_load() {
    let context = DataContext::load(&workspace_fixtures()).unwrap();
    assert_eq!(context.count(EntityKind::Users), 8);
    assert_eq!(context.count(EntityKind::Credentials), 8);
    assert_eq!(context.count(EntityKind::Disputes), 5);
    assert_eq!(context.count(EntityKind::Proposals), 4);
    assert_eq!(context.count(EntityKind::AuditLog), 6);
    assert_eq!(context.disputes_for("cred-104").len(), 1);
}

#[test]
fn bundled_credentials_facets_snapshot() {
    let context = DataContext::load(&workspace_fixtures()).unwrap();
    let facets = facet_counts(context.credentials.iter(), "status");
    insta::assert_json_snapshot!(facets, @r#"
    [
      {
        "value": "verified",
        "count": 4
      },
      {
        "value": "pending",
        "count": 2
      },
      {
        "value": "revoked",
        "count": 1
      },
      {
        "value": "expired",
        "count": 1
      }
    ]
    "#);
}

#[test]
fn search_spans_email_and_organization() {
    let context = DataContext::load(&workspace_fixtures()).unwrap();
    let mut users = RecordSet::new(context.users.clone());
    users.set_search("CYBERDYNE").unwrap();
    let visible = users.visible();
    let ids: Vec<&str> = visible.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["usr-001", "usr-002"]);
}

#[test]
fn csv_collection_with_blank_optional_fields() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("credentials.csv"),
        "id,title,holder,issuer,kind,status,issued,expires,trust_score\n\
         c1,Nursing License,Ana Ruiz,State Board,license,verified,2022-01-01,2025-01-01,81\n\
         c2,BSc Biology,Li Wei,Leeds University,degree,pending,2020-07-01,,64\n",
    );
    let credentials: Vec<Credential> = load_collection(dir.path()).unwrap();
    assert_eq!(credentials.len(), 2);
    assert!(credentials[0].expires.is_some());
    assert_eq!(credentials[1].expires, None);
    assert_eq!(credentials[1].trust_score, 64);
}

#[test]
fn json_is_preferred_over_csv() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("proposals.json"), "[]");
    write(&dir.path().join("proposals.csv"), "not,a,valid\nproposal,file,at all\n");
    let proposals: Vec<Proposal> = load_collection(dir.path()).unwrap();
    assert!(proposals.is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("disputes.csv");
    write(
        &path,
        "id,credential_id,raised_by,reason,status,priority,opened\n\
         d1,c1,Ann,Bad seal,open,low,2024-01-01\n\
         d1,c2,Bob,Wrong name,open,high,2024-01-02\n",
    );
    let err = load_csv::<Dispute>(&path).unwrap_err();
    match err {
        FixtureError::DuplicateId { entity, id } => {
            assert_eq!(entity, EntityKind::Disputes);
            assert_eq!(id, "d1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_status_fails_to_load() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("users.json"),
        r#"[{"id":"u1","name":"Ann","email":"a@b.c","role":"owner","status":"active","joined":"2024-01-01"}]"#,
    );
    let err = load_collection::<UserAccount>(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::Json { .. }));
}

#[test]
fn missing_collection_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = DataContext::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        FixtureError::MissingCollection {
            entity: EntityKind::Users,
            ..
        }
    ));
}

#[test]
fn out_of_range_trust_score_fails_to_load() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("credentials.csv"),
        "id,title,holder,issuer,kind,status,issued,expires,trust_score\n\
         c1,Nursing License,Ana Ruiz,State Board,license,verified,2022-01-01,,140\n",
    );
    let err = load_collection::<Credential>(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::Csv { .. }), "{err}");
}

#[test]
fn context_can_be_assembled_from_collections() {
    let bundled = DataContext::load(&workspace_fixtures()).unwrap();
    let held: Vec<Credential> = bundled
        .credentials
        .iter()
        .filter(|credential| credential.holder == "Sarah Connor")
        .cloned()
        .collect();
    let context = DataContext::new()
        .with_users(bundled.users.to_vec())
        .with_credentials(held)
        .with_disputes(bundled.disputes.to_vec())
        .with_proposals(Vec::new())
        .with_audit_log(bundled.audit_log.to_vec());

    assert_eq!(context.root, None);
    assert_eq!(context.count(EntityKind::Users), 8);
    assert_eq!(context.count(EntityKind::Credentials), 2);
    assert_eq!(context.count(EntityKind::Proposals), 0);
    assert_eq!(context.count(EntityKind::AuditLog), 6);
    assert_eq!(context.disputes_for("cred-104").len(), 1);
    assert!(DataContext::default().credentials.is_empty());
}
