//! Every fixture collection, loaded once and passed to whoever renders it.
//!
//! Collections are shared as `Arc<[T]>` so several record sets can view the
//! same data without copying it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info_span;

use credlens_model::{AuditEntry, Credential, Dispute, EntityKind, Proposal, UserAccount};

use crate::error::Result;
use crate::loaders::load_collection;

#[derive(Debug, Clone)]
pub struct DataContext {
    /// Directory the collections were read from, if any.
    pub root: Option<PathBuf>,
    pub users: Arc<[UserAccount]>,
    pub credentials: Arc<[Credential]>,
    pub disputes: Arc<[Dispute]>,
    pub proposals: Arc<[Proposal]>,
    pub audit_log: Arc<[AuditEntry]>,
}

impl DataContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self {
            root: None,
            users: Arc::from(Vec::new()),
            credentials: Arc::from(Vec::new()),
            disputes: Arc::from(Vec::new()),
            proposals: Arc::from(Vec::new()),
            audit_log: Arc::from(Vec::new()),
        }
    }

    /// Loads every collection from `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let span = info_span!("load_fixtures", root = %root.display());
        let _guard = span.enter();
        Ok(Self {
            root: Some(root.to_path_buf()),
            users: load_collection::<UserAccount>(root)?.into(),
            credentials: load_collection::<Credential>(root)?.into(),
            disputes: load_collection::<Dispute>(root)?.into(),
            proposals: load_collection::<Proposal>(root)?.into(),
            audit_log: load_collection::<AuditEntry>(root)?.into(),
        })
    }

    pub fn with_users(mut self, users: Vec<UserAccount>) -> Self {
        self.users = users.into();
        self
    }

    pub fn with_credentials(mut self, credentials: Vec<Credential>) -> Self {
        self.credentials = credentials.into();
        self
    }

    pub fn with_disputes(mut self, disputes: Vec<Dispute>) -> Self {
        self.disputes = disputes.into();
        self
    }

    pub fn with_proposals(mut self, proposals: Vec<Proposal>) -> Self {
        self.proposals = proposals.into();
        self
    }

    pub fn with_audit_log(mut self, audit_log: Vec<AuditEntry>) -> Self {
        self.audit_log = audit_log.into();
        self
    }

    /// Number of records held for `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Users => self.users.len(),
            EntityKind::Credentials => self.credentials.len(),
            EntityKind::Disputes => self.disputes.len(),
            EntityKind::Proposals => self.proposals.len(),
            EntityKind::AuditLog => self.audit_log.len(),
        }
    }

    /// Disputes raised against the credential with `credential_id`.
    pub fn disputes_for(&self, credential_id: &str) -> Vec<&Dispute> {
        self.disputes
            .iter()
            .filter(|dispute| dispute.credential_id.as_str() == credential_id)
            .collect()
    }
}

impl Default for DataContext {
    fn default() -> Self {
        Self::new()
    }
}
