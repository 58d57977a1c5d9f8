use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info_span;

use credlens_core::{PageRequest, SortSpec, ViewOptions, parse_filter_arg};
use credlens_fixtures::{DataContext, resolve_data_root};
use credlens_model::EntityKind;

use credlens_cli::report::{OutputFormat, render_entities, render_list, render_summary};
use credlens_cli::table::TableStyle;

use crate::cli::{ListArgs, OutputFormatArg, SummaryArgs, ViewArgs};

pub fn load_context(data_dir: Option<&std::path::Path>) -> Result<DataContext> {
    let root = resolve_data_root(data_dir);
    DataContext::load(&root).with_context(|| format!("load fixtures from {}", root.display()))
}

pub fn run_entities(context: &DataContext, style: TableStyle) -> String {
    render_entities(context, style)
}

pub fn run_list(context: &DataContext, args: &ListArgs, style: TableStyle) -> Result<String> {
    let span = info_span!("list", entity = %args.view.entity);
    let _guard = span.enter();
    let mut view = view_options(&args.view)?;
    if let Some(sort) = &args.sort {
        view.sort = Some(sort.parse::<SortSpec>()?);
    }
    view.page = Some(PageRequest::new(args.page, args.per_page)?);
    let format = match args.format {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    match args.view.entity {
        EntityKind::Users => render_list(context.users.clone(), &view, format, style),
        EntityKind::Credentials => render_list(context.credentials.clone(), &view, format, style),
        EntityKind::Disputes => render_list(context.disputes.clone(), &view, format, style),
        EntityKind::Proposals => render_list(context.proposals.clone(), &view, format, style),
        EntityKind::AuditLog => render_list(context.audit_log.clone(), &view, format, style),
    }
}

pub fn run_summary(
    context: &DataContext,
    args: &SummaryArgs,
    today: Option<NaiveDate>,
    style: TableStyle,
) -> Result<String> {
    let span = info_span!("summary", entity = %args.view.entity);
    let _guard = span.enter();
    let view = view_options(&args.view)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    match args.view.entity {
        EntityKind::Users => render_summary(context.users.clone(), &view, today, style),
        EntityKind::Credentials => render_summary(context.credentials.clone(), &view, today, style),
        EntityKind::Disputes => render_summary(context.disputes.clone(), &view, today, style),
        EntityKind::Proposals => render_summary(context.proposals.clone(), &view, today, style),
        EntityKind::AuditLog => render_summary(context.audit_log.clone(), &view, today, style),
    }
}

fn view_options(args: &ViewArgs) -> Result<ViewOptions> {
    let mut view = ViewOptions::new();
    if let Some(search) = &args.search {
        view = view.with_search(search.as_str());
    }
    for arg in &args.filters {
        let (key, value) = parse_filter_arg(arg)?;
        view = view.with_filter(key, value);
    }
    Ok(view)
}
