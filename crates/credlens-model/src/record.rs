//! The capability every dashboard record exposes to the filtering core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FieldValue, ModelError, RecordId};

/// Entity families shown across the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Users,
    Credentials,
    Disputes,
    Proposals,
    AuditLog,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Users,
        EntityKind::Credentials,
        EntityKind::Disputes,
        EntityKind::Proposals,
        EntityKind::AuditLog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Credentials => "credentials",
            EntityKind::Disputes => "disputes",
            EntityKind::Proposals => "proposals",
            EntityKind::AuditLog => "audit-log",
        }
    }

    /// Fixture file stem (without extension).
    pub fn file_stem(&self) -> &'static str {
        match self {
            EntityKind::AuditLog => "audit_log",
            other => other.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Users => "User accounts",
            EntityKind::Credentials => "Issued credentials",
            EntityKind::Disputes => "Verification disputes",
            EntityKind::Proposals => "Governance proposals",
            EntityKind::AuditLog => "Audit log",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "users" | "user" => EntityKind::Users,
            "credentials" | "credential" => EntityKind::Credentials,
            "disputes" | "dispute" => EntityKind::Disputes,
            "proposals" | "proposal" => EntityKind::Proposals,
            "audit-log" | "audit" | "logs" => EntityKind::AuditLog,
            _ => return Err(ModelError::UnknownEntity(s.to_string())),
        };
        Ok(kind)
    }
}

/// A typed row that the filtering core can inspect without knowing its shape.
///
/// `field` returns `None` for unknown names and for optional fields that
/// are absent; matchers treat both as non-matching.
pub trait Record {
    const KIND: EntityKind;

    fn id(&self) -> &RecordId;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Every field name `field` answers for.
    fn field_names() -> &'static [&'static str];

    /// Fields searched by the free-text box.
    fn search_fields() -> &'static [&'static str];

    /// Fields rendered as tabs or select filters.
    fn category_fields() -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_accepts_aliases() {
        assert_eq!("audit_log".parse::<EntityKind>(), Ok(EntityKind::AuditLog));
        assert_eq!("Credential".parse::<EntityKind>(), Ok(EntityKind::Credentials));
        assert!("wallets".parse::<EntityKind>().is_err());
    }

    #[test]
    fn file_stem_is_snake_case() {
        assert_eq!(EntityKind::AuditLog.file_stem(), "audit_log");
        assert_eq!(EntityKind::Users.file_stem(), "users");
    }
}
