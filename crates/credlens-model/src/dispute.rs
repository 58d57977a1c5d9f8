use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DisputeStatus, EntityKind, FieldValue, Priority, Record, RecordId};

/// A challenge raised against a credential's verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    pub id: RecordId,
    pub credential_id: RecordId,
    pub raised_by: String,
    pub reason: String,
    pub status: DisputeStatus,
    pub priority: Priority,
    pub opened: NaiveDate,
}

impl Record for Dispute {
    const KIND: EntityKind = EntityKind::Disputes;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "credential_id" => Some(FieldValue::Text(self.credential_id.as_str())),
            "raised_by" => Some(FieldValue::Text(&self.raised_by)),
            "reason" => Some(FieldValue::Text(&self.reason)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "priority" => Some(FieldValue::Text(self.priority.as_str())),
            "opened" => Some(FieldValue::Date(self.opened)),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "credential_id",
            "raised_by",
            "reason",
            "status",
            "priority",
            "opened",
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["reason", "raised_by", "credential_id"]
    }

    fn category_fields() -> &'static [&'static str] {
        &["status", "priority"]
    }
}
