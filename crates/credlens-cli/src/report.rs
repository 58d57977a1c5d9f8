//! Rendering list, summary and catalogue views to strings.

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment};
use serde::Serialize;
use tracing::debug;

use credlens_core::{PageRequest, RecordSet, ViewOptions, facet_counts, paginate};
use credlens_fixtures::DataContext;
use credlens_model::{AuditEntry, Credential, Dispute, EntityKind, Proposal, Record, UserAccount};

use crate::table::{TableStyle, align_column, new_table};
use crate::views::{EntityView, share_label};

/// Message rendered instead of an empty table.
pub const EMPTY_STATE: &str = "No results match the current filters.";

pub const DEFAULT_PER_PAGE: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct ListJson<'a, T> {
    entity: EntityKind,
    total_records: usize,
    visible: usize,
    page: usize,
    per_page: usize,
    total_pages: usize,
    items: &'a [&'a T],
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Renders one page of the visible set for `view`.
pub fn render_list<T: EntityView>(
    records: Arc<[T]>,
    view: &ViewOptions,
    format: OutputFormat,
    style: TableStyle,
) -> Result<String> {
    let mut set = RecordSet::new(records);
    set.apply(view)
        .with_context(|| format!("apply view to {}", T::KIND))?;
    let visible = set.visible();
    let request = view.page.unwrap_or(PageRequest {
        page: 1,
        per_page: DEFAULT_PER_PAGE,
    });
    let page = paginate(&visible, request);
    debug!(
        entity = %T::KIND,
        visible = visible.len(),
        page = page.page,
        total_pages = page.total_pages,
        "rendering list"
    );

    if format == OutputFormat::Json {
        let body = ListJson {
            entity: T::KIND,
            total_records: set.records().len(),
            visible: visible.len(),
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            items: page.items,
            message: visible.is_empty().then_some(EMPTY_STATE),
        };
        return serde_json::to_string_pretty(&body).context("serialize list");
    }

    if visible.is_empty() {
        return Ok(EMPTY_STATE.to_string());
    }
    if page.items.is_empty() {
        return Ok(format!(
            "Page {} is past the end ({} pages of {} results).",
            page.page, page.total_pages, page.total_items
        ));
    }
    let mut table = new_table(T::headers(), style);
    for record in page.items {
        table.add_row(record.row());
    }
    let first = (page.page - 1) * page.per_page + 1;
    let last = first + page.items.len() - 1;
    Ok(format!(
        "{table}\nShowing {first}-{last} of {} {} (page {} of {})",
        page.total_items,
        T::KIND,
        page.page,
        page.total_pages
    ))
}

/// Renders facet counts and the entity projection for the visible set.
pub fn render_summary<T: EntityView>(
    records: Arc<[T]>,
    view: &ViewOptions,
    today: NaiveDate,
    style: TableStyle,
) -> Result<String> {
    let mut set = RecordSet::new(records);
    set.apply(view)
        .with_context(|| format!("apply view to {}", T::KIND))?;
    let visible = set.visible();
    let mut out = String::new();
    writeln!(
        out,
        "{}: {} of {} records visible",
        T::KIND.label(),
        visible.len(),
        set.records().len()
    )?;
    if visible.is_empty() {
        out.push_str(EMPTY_STATE);
        return Ok(out);
    }
    for field in T::category_fields() {
        let mut table = new_table(&["Value", "Count", "Share"], style);
        for facet in facet_counts(visible.iter().copied(), field) {
            table.add_row(vec![
                Cell::new(&facet.value),
                Cell::new(facet.count),
                Cell::new(share_label(facet.count, visible.len())),
            ]);
        }
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        writeln!(out, "\nBy {field}:\n{table}")?;
    }
    if let Some((title, table)) = T::projection(&visible, today, style) {
        writeln!(out, "\n{title}:\n{table}")?;
    }
    Ok(out.trim_end().to_string())
}

/// Renders the catalogue of entity kinds held by `context`.
pub fn render_entities(context: &DataContext, style: TableStyle) -> String {
    let mut table = new_table(
        &["Entity", "Description", "Records", "Search fields", "Filters"],
        style,
    );
    for kind in EntityKind::ALL {
        let (search, categories) = field_lists(*kind);
        table.add_row(vec![
            Cell::new(kind.as_str()),
            Cell::new(kind.label()),
            Cell::new(context.count(*kind)),
            Cell::new(search.join(", ")),
            Cell::new(categories.join(", ")),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    table.to_string()
}

fn field_lists(kind: EntityKind) -> (&'static [&'static str], &'static [&'static str]) {
    match kind {
        EntityKind::Users => (UserAccount::search_fields(), UserAccount::category_fields()),
        EntityKind::Credentials => (Credential::search_fields(), Credential::category_fields()),
        EntityKind::Disputes => (Dispute::search_fields(), Dispute::category_fields()),
        EntityKind::Proposals => (Proposal::search_fields(), Proposal::category_fields()),
        EntityKind::AuditLog => (AuditEntry::search_fields(), AuditEntry::category_fields()),
    }
}
