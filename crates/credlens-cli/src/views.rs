//! Per-entity columns and projections for terminal rendering.

use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Color, Table};
use serde::Serialize;

use credlens_core::{
    Tier, VoteTally, expiry_label, facet_counts, format_date, format_percentage, percentage,
    progress, truncate_middle,
};
use credlens_model::{
    AccountStatus, AuditEntry, AuditLevel, Credential, CredentialStatus, Dispute, DisputeStatus,
    Priority, Proposal, ProposalStatus, Record, UserAccount,
};

use crate::table::{
    TableStyle, align_column, badge_cell, check_cell, dim_cell, id_cell, new_table, optional_cell,
};

/// How one entity kind is laid out as a table.
pub trait EntityView: Record + Serialize {
    fn headers() -> &'static [&'static str];

    fn row(&self) -> Vec<Cell>;

    /// Entity-specific aggregate table shown by `summary`, with its title.
    fn projection(
        _visible: &[&Self],
        _today: NaiveDate,
        _style: TableStyle,
    ) -> Option<(String, Table)> {
        None
    }
}

impl EntityView for UserAccount {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Email",
            "Role",
            "Status",
            "Organization",
            "Joined",
            "Last active",
        ]
    }

    fn row(&self) -> Vec<Cell> {
        vec![
            id_cell(self.id.as_str()),
            Cell::new(&self.name),
            Cell::new(&self.email),
            Cell::new(self.role.as_str()),
            account_status_cell(self.status),
            optional_cell(self.organization.as_deref()),
            Cell::new(format_date(self.joined)),
            optional_cell(self.last_active.map(format_date)),
        ]
    }

    fn projection(
        visible: &[&Self],
        _today: NaiveDate,
        style: TableStyle,
    ) -> Option<(String, Table)> {
        let mut table = new_table(&["Role", "Active", "Total", "Active share"], style);
        for facet in facet_counts(visible.iter().copied(), "role") {
            let active = visible
                .iter()
                .filter(|user| user.role.as_str() == facet.value)
                .filter(|user| user.status == AccountStatus::Active)
                .count();
            table.add_row(vec![
                Cell::new(&facet.value),
                Cell::new(active),
                Cell::new(facet.count),
                Cell::new(format!("{}%", progress(active as u64, facet.count as u64))),
            ]);
        }
        for index in 1..=3 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        Some(("Activation by role".to_string(), table))
    }
}

impl EntityView for Credential {
    fn headers() -> &'static [&'static str] {
        &[
            "ID", "Title", "Holder", "Issuer", "Kind", "Status", "Issued", "Expires", "Trust",
        ]
    }

    fn row(&self) -> Vec<Cell> {
        vec![
            id_cell(self.id.as_str()),
            Cell::new(&self.title),
            Cell::new(&self.holder),
            Cell::new(&self.issuer),
            Cell::new(self.kind.as_str()),
            credential_status_cell(self.status),
            Cell::new(format_date(self.issued)),
            optional_cell(self.expires.map(format_date)),
            Cell::new(self.trust_score),
        ]
    }

    fn projection(
        visible: &[&Self],
        today: NaiveDate,
        style: TableStyle,
    ) -> Option<(String, Table)> {
        let mut table = new_table(&["ID", "Holder", "Score", "Tier", "Expiry"], style);
        for credential in visible {
            let tier = Tier::for_trust_score(f64::from(credential.trust_score));
            table.add_row(vec![
                id_cell(credential.id.as_str()),
                Cell::new(&credential.holder),
                Cell::new(credential.trust_score),
                badge_cell(tier.as_str(), tier_color(tier)),
                Cell::new(expiry_label(credential.expires, today)),
            ]);
        }
        align_column(&mut table, 2, CellAlignment::Right);
        Some(("Trust and expiry".to_string(), table))
    }
}

impl EntityView for Dispute {
    fn headers() -> &'static [&'static str] {
        &["ID", "Credential", "Raised by", "Reason", "Status", "Priority", "Opened"]
    }

    fn row(&self) -> Vec<Cell> {
        vec![
            id_cell(self.id.as_str()),
            Cell::new(self.credential_id.as_str()),
            Cell::new(&self.raised_by),
            Cell::new(&self.reason),
            dispute_status_cell(self.status),
            priority_cell(self.priority),
            Cell::new(format_date(self.opened)),
        ]
    }

    fn projection(
        visible: &[&Self],
        _today: NaiveDate,
        style: TableStyle,
    ) -> Option<(String, Table)> {
        let mut table = new_table(&["Priority", "Closed", "Total", "Progress"], style);
        for priority in Priority::ALL {
            let total = visible.iter().filter(|d| d.priority == *priority).count();
            if total == 0 {
                continue;
            }
            let closed = visible
                .iter()
                .filter(|d| d.priority == *priority && d.status.is_closed())
                .count();
            table.add_row(vec![
                priority_cell(*priority),
                Cell::new(closed),
                Cell::new(total),
                Cell::new(format!("{}%", progress(closed as u64, total as u64))),
            ]);
        }
        for index in 1..=3 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        Some(("Resolution by priority".to_string(), table))
    }
}

impl EntityView for Proposal {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Proposer", "Status", "For", "Against", "Votes", "Ends"]
    }

    fn row(&self) -> Vec<Cell> {
        let tally = VoteTally::from(self);
        vec![
            id_cell(self.id.as_str()),
            Cell::new(&self.title),
            Cell::new(&self.proposer),
            proposal_status_cell(self.status),
            Cell::new(format_percentage(tally.for_pct(), 1)),
            Cell::new(format_percentage(tally.against_pct(), 1)),
            Cell::new(tally.total()),
            Cell::new(format_date(self.ends)),
        ]
    }

    fn projection(
        visible: &[&Self],
        _today: NaiveDate,
        style: TableStyle,
    ) -> Option<(String, Table)> {
        let mut table = new_table(
            &["ID", "For", "Against", "Abstain", "Total", "Quorum", "Reached"],
            style,
        );
        for proposal in visible {
            let tally = VoteTally::from(*proposal);
            table.add_row(vec![
                id_cell(proposal.id.as_str()),
                Cell::new(format_percentage(tally.for_pct(), 1)),
                Cell::new(format_percentage(tally.against_pct(), 1)),
                Cell::new(format_percentage(tally.abstain_pct(), 1)),
                Cell::new(tally.total()),
                Cell::new(proposal.quorum),
                check_cell(tally.quorum_reached(u64::from(proposal.quorum))),
            ]);
        }
        for index in 1..=5 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        align_column(&mut table, 6, CellAlignment::Center);
        Some(("Vote tallies".to_string(), table))
    }
}

impl EntityView for AuditEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "Time", "Actor", "Action", "Target", "Level"]
    }

    fn row(&self) -> Vec<Cell> {
        vec![
            id_cell(self.id.as_str()),
            Cell::new(self.timestamp.format("%b %-d, %Y %H:%M")),
            Cell::new(truncate_middle(&self.actor, 24)),
            Cell::new(&self.action),
            Cell::new(&self.target),
            audit_level_cell(self.level),
        ]
    }
}

/// Share of `count` in `total`, formatted for facet tables.
pub fn share_label(count: usize, total: usize) -> String {
    format_percentage(percentage(count as u64, total as u64), 1)
}

fn account_status_cell(status: AccountStatus) -> Cell {
    let color = match status {
        AccountStatus::Active => Color::Green,
        AccountStatus::Pending => Color::Yellow,
        AccountStatus::Suspended => Color::Red,
    };
    badge_cell(status.as_str(), color)
}

fn credential_status_cell(status: CredentialStatus) -> Cell {
    match status {
        CredentialStatus::Verified => badge_cell(status.as_str(), Color::Green),
        CredentialStatus::Pending => badge_cell(status.as_str(), Color::Yellow),
        CredentialStatus::Revoked => badge_cell(status.as_str(), Color::Red),
        CredentialStatus::Expired => dim_cell(status.as_str()),
    }
}

fn dispute_status_cell(status: DisputeStatus) -> Cell {
    match status {
        DisputeStatus::Open => badge_cell(status.as_str(), Color::Yellow),
        DisputeStatus::Investigating => badge_cell(status.as_str(), Color::Blue),
        DisputeStatus::Resolved => badge_cell(status.as_str(), Color::Green),
        DisputeStatus::Rejected => dim_cell(status.as_str()),
    }
}

fn proposal_status_cell(status: ProposalStatus) -> Cell {
    match status {
        ProposalStatus::Active => badge_cell(status.as_str(), Color::Blue),
        ProposalStatus::Passed => badge_cell(status.as_str(), Color::Green),
        ProposalStatus::Rejected => badge_cell(status.as_str(), Color::Red),
        ProposalStatus::Pending => badge_cell(status.as_str(), Color::Yellow),
    }
}

fn priority_cell(priority: Priority) -> Cell {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::DarkGrey,
    };
    badge_cell(priority.as_str(), color)
}

fn audit_level_cell(level: AuditLevel) -> Cell {
    let color = match level {
        AuditLevel::Info => Color::Blue,
        AuditLevel::Warning => Color::Yellow,
        AuditLevel::Critical => Color::Red,
    };
    badge_cell(level.as_str(), color)
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Low => Color::Red,
        Tier::Medium => Color::Yellow,
        Tier::High => Color::Green,
        Tier::Excellent => Color::Cyan,
    }
}
