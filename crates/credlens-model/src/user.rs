use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AccountStatus, EntityKind, FieldValue, Record, RecordId, UserRole};

/// An account listed on the admin, enterprise and verifier dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: AccountStatus,
    #[serde(default)]
    pub organization: Option<String>,
    pub joined: NaiveDate,
    #[serde(default)]
    pub last_active: Option<NaiveDate>,
}

impl Record for UserAccount {
    const KIND: EntityKind = EntityKind::Users;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "name" => Some(FieldValue::Text(&self.name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "role" => Some(FieldValue::Text(self.role.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "organization" => self.organization.as_deref().map(FieldValue::Text),
            "joined" => Some(FieldValue::Date(self.joined)),
            "last_active" => self.last_active.map(FieldValue::Date),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "email",
            "role",
            "status",
            "organization",
            "joined",
            "last_active",
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "email", "organization"]
    }

    fn category_fields() -> &'static [&'static str] {
        &["role", "status"]
    }
}
