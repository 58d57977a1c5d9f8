use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{AuditLevel, EntityKind, FieldValue, Record, RecordId};

/// One line of the admin activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: RecordId,
    pub actor: String,
    pub action: String,
    pub target: String,
    pub level: AuditLevel,
    pub timestamp: NaiveDateTime,
}

impl Record for AuditEntry {
    const KIND: EntityKind = EntityKind::AuditLog;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "actor" => Some(FieldValue::Text(&self.actor)),
            "action" => Some(FieldValue::Text(&self.action)),
            "target" => Some(FieldValue::Text(&self.target)),
            "level" => Some(FieldValue::Text(self.level.as_str())),
            // Matching and sorting only need day resolution.
            "timestamp" => Some(FieldValue::Date(self.timestamp.date())),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &["id", "actor", "action", "target", "level", "timestamp"]
    }

    fn search_fields() -> &'static [&'static str] {
        &["actor", "action", "target"]
    }

    fn category_fields() -> &'static [&'static str] {
        &["level"]
    }
}
