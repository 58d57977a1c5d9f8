//! Typed records for the credential-verification dashboards.

pub mod audit;
pub mod credential;
pub mod dispute;
pub mod enums;
pub mod error;
pub mod ids;
pub mod proposal;
pub mod record;
pub mod user;
pub mod value;

pub use audit::AuditEntry;
pub use credential::Credential;
pub use dispute::Dispute;
pub use enums::{
    AccountStatus, AuditLevel, CredentialKind, CredentialStatus, DisputeStatus, Priority,
    ProposalStatus, UserRole,
};
pub use error::{ModelError, Result};
pub use ids::RecordId;
pub use proposal::Proposal;
pub use record::{EntityKind, Record};
pub use user::UserAccount;
pub use value::{FieldValue, format_number};
