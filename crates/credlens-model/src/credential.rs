use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{CredentialKind, CredentialStatus, EntityKind, FieldValue, Record, RecordId};

/// Highest trust score an issuer can carry.
pub const MAX_TRUST_SCORE: u8 = 100;

/// A credential issued to a holder and checked by verifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: RecordId,
    pub title: String,
    pub holder: String,
    pub issuer: String,
    pub kind: CredentialKind,
    pub status: CredentialStatus,
    pub issued: NaiveDate,
    #[serde(default)]
    pub expires: Option<NaiveDate>,
    /// Issuer trust score, 0 to 100.
    #[serde(deserialize_with = "trust_score")]
    pub trust_score: u8,
}

fn trust_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let score = u8::deserialize(deserializer)?;
    if score > MAX_TRUST_SCORE {
        return Err(de::Error::custom(format!(
            "trust_score {score} is above {MAX_TRUST_SCORE}"
        )));
    }
    Ok(score)
}

impl Record for Credential {
    const KIND: EntityKind = EntityKind::Credentials;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "title" => Some(FieldValue::Text(&self.title)),
            "holder" => Some(FieldValue::Text(&self.holder)),
            "issuer" => Some(FieldValue::Text(&self.issuer)),
            "kind" => Some(FieldValue::Text(self.kind.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "issued" => Some(FieldValue::Date(self.issued)),
            "expires" => self.expires.map(FieldValue::Date),
            "trust_score" => Some(FieldValue::Number(f64::from(self.trust_score))),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "holder",
            "issuer",
            "kind",
            "status",
            "issued",
            "expires",
            "trust_score",
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "holder", "issuer"]
    }

    fn category_fields() -> &'static [&'static str] {
        &["kind", "status"]
    }
}
