//! Tests for credlens-model types.

use chrono::NaiveDate;

use credlens_model::{
    AuditEntry, Credential, CredentialStatus, FieldValue, Proposal, Record, UserAccount,
};

#[test]
fn user_account_deserializes_with_optional_fields_missing() {
    let json = r#"{
        "id": "usr-001",
        "name": "Sarah Connor",
        "email": "sarah@cyberdyne.io",
        "role": "enterprise",
        "status": "active",
        "joined": "2023-04-11"
    }"#;
    let user: UserAccount = serde_json::from_str(json).unwrap();
    assert_eq!(user.organization, None);
    assert_eq!(user.field("organization"), None);
    assert_eq!(user.field("role"), Some(FieldValue::Text("enterprise")));
    assert_eq!(
        user.field("joined"),
        Some(FieldValue::Date(NaiveDate::from_ymd_opt(2023, 4, 11).unwrap()))
    );
}

#[test]
fn unknown_status_is_rejected() {
    let json = r#"{
        "id": "cred-9",
        "title": "BSc Physics",
        "holder": "Ada",
        "issuer": "MIT",
        "kind": "degree",
        "status": "archived",
        "issued": "2020-06-01",
        "trust_score": 80
    }"#;
    assert!(serde_json::from_str::<Credential>(json).is_err());
}

#[test]
fn trust_score_above_one_hundred_is_rejected() {
    let credential = |score: u32| {
        format!(
            r#"{{"id":"cred-9","title":"BSc Physics","holder":"Ada","issuer":"MIT",
                "kind":"degree","status":"verified","issued":"2020-06-01","trust_score":{score}}}"#
        )
    };
    let top = serde_json::from_str::<Credential>(&credential(100)).unwrap();
    assert_eq!(top.trust_score, 100);
    let err = serde_json::from_str::<Credential>(&credential(101)).unwrap_err();
    assert!(err.to_string().contains("trust_score 101 is above 100"), "{err}");
    assert!(serde_json::from_str::<Credential>(&credential(256)).is_err());
}

#[test]
fn field_names_all_resolve_or_are_optional() {
    let credential = Credential {
        id: "cred-1".to_string().try_into().unwrap(),
        title: "Nursing License".to_string(),
        holder: "Maria Lopez".to_string(),
        issuer: "State Board".to_string(),
        kind: credlens_model::CredentialKind::License,
        status: CredentialStatus::Verified,
        issued: NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(),
        expires: None,
        trust_score: 88,
    };
    for name in Credential::field_names() {
        if *name != "expires" {
            assert!(credential.field(name).is_some(), "missing field {name}");
        }
    }
    assert_eq!(credential.field("nonexistent"), None);
    assert_eq!(credential.field("trust_score"), Some(FieldValue::Number(88.0)));
}

#[test]
fn search_and_category_fields_are_exposed() {
    for name in Proposal::search_fields()
        .iter()
        .chain(Proposal::category_fields())
    {
        assert!(Proposal::field_names().contains(name));
    }
    for name in AuditEntry::search_fields()
        .iter()
        .chain(AuditEntry::category_fields())
    {
        assert!(AuditEntry::field_names().contains(name));
    }
}

#[test]
fn audit_timestamp_is_exposed_as_date() {
    let json = r#"{
        "id": "log-1",
        "actor": "admin@credlens.io",
        "action": "Suspended account",
        "target": "usr-014",
        "level": "warning",
        "timestamp": "2024-03-02T14:05:00"
    }"#;
    let entry: AuditEntry = serde_json::from_str(json).unwrap();
    assert_eq!(
        entry.field("timestamp"),
        Some(FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()))
    );
}
