//! Status and category enumerations for dashboard records.
//!
//! Fixture files spell every value in lowercase; unknown spellings fail to
//! deserialize instead of silently becoming a catch-all variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the lowercase name used in fixtures and filters.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ModelError::UnknownStatus {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labelled_enum! {
    /// Dashboard a user account belongs to.
    UserRole, "role" {
        Admin => "admin",
        Enterprise => "enterprise",
        Verifier => "verifier",
        User => "user",
    }
}

labelled_enum! {
    AccountStatus, "account status" {
        Active => "active",
        Suspended => "suspended",
        Pending => "pending",
    }
}

labelled_enum! {
    CredentialKind, "credential kind" {
        Degree => "degree",
        Certificate => "certificate",
        License => "license",
        Identity => "identity",
        Employment => "employment",
    }
}

labelled_enum! {
    CredentialStatus, "credential status" {
        Verified => "verified",
        Pending => "pending",
        Revoked => "revoked",
        Expired => "expired",
    }
}

labelled_enum! {
    DisputeStatus, "dispute status" {
        Open => "open",
        Investigating => "investigating",
        Resolved => "resolved",
        Rejected => "rejected",
    }
}

labelled_enum! {
    Priority, "priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

labelled_enum! {
    /// Lifecycle of a governance proposal.
    ProposalStatus, "proposal status" {
        Active => "active",
        Passed => "passed",
        Rejected => "rejected",
        Pending => "pending",
    }
}

labelled_enum! {
    AuditLevel, "audit level" {
        Info => "info",
        Warning => "warning",
        Critical => "critical",
    }
}

impl DisputeStatus {
    /// Returns true once no further action is expected.
    pub fn is_closed(&self) -> bool {
        matches!(self, DisputeStatus::Resolved | DisputeStatus::Rejected)
    }
}
