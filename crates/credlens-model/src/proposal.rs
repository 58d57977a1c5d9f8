use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EntityKind, FieldValue, ProposalStatus, Record, RecordId};

/// A governance proposal with its running vote counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: RecordId,
    pub title: String,
    pub proposer: String,
    pub status: ProposalStatus,
    pub votes_for: u32,
    pub votes_against: u32,
    #[serde(default)]
    pub votes_abstain: u32,
    /// Minimum number of votes cast for the result to count.
    pub quorum: u32,
    pub ends: NaiveDate,
}

impl Record for Proposal {
    const KIND: EntityKind = EntityKind::Proposals;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(self.id.as_str())),
            "title" => Some(FieldValue::Text(&self.title)),
            "proposer" => Some(FieldValue::Text(&self.proposer)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "votes_for" => Some(FieldValue::Number(f64::from(self.votes_for))),
            "votes_against" => Some(FieldValue::Number(f64::from(self.votes_against))),
            "votes_abstain" => Some(FieldValue::Number(f64::from(self.votes_abstain))),
            "quorum" => Some(FieldValue::Number(f64::from(self.quorum))),
            "ends" => Some(FieldValue::Date(self.ends)),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "proposer",
            "status",
            "votes_for",
            "votes_against",
            "votes_abstain",
            "quorum",
            "ends",
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "proposer"]
    }

    fn category_fields() -> &'static [&'static str] {
        &["status"]
    }
}
