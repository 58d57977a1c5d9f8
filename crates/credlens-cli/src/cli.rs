//! CLI argument definitions for credlens.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use credlens_model::EntityKind;

#[derive(Parser)]
#[command(
    name = "credlens",
    version,
    about = "Browse credential-verification dashboard records",
    long_about = "Filter, sort and summarize the records behind the admin, enterprise,\n\
                  verifier and end-user dashboards.\n\n\
                  Records are read from fixture files (JSON or CSV) and never modified."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory holding the fixture files (default: $CREDLENS_DATA_DIR or ./fixtures).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Date used for expiry labels (default: the local date).
    #[arg(long = "today", value_name = "YYYY-MM-DD", global = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List entity kinds with their record counts and filter keys.
    Entities,

    /// Show the filtered, sorted and paged records of one entity kind.
    List(ListArgs),

    /// Show facet counts and projections for the filtered records.
    Summary(SummaryArgs),
}

#[derive(Args)]
pub struct ViewArgs {
    /// Entity kind (users, credentials, disputes, proposals, audit-log).
    #[arg(value_name = "ENTITY", value_parser = parse_entity)]
    pub entity: EntityKind,

    /// Case-insensitive text search over the entity's search fields.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Category filter such as status=pending; "all" disables it. Repeatable.
    #[arg(long = "filter", short = 'f', value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Sort key: FIELD, FIELD:asc or FIELD:desc.
    #[arg(long = "sort", value_name = "FIELD[:DIR]")]
    pub sort: Option<String>,

    /// Page number, starting at 1.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Records per page.
    #[arg(long = "per-page", default_value_t = 20)]
    pub per_page: usize,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

fn parse_entity(value: &str) -> Result<EntityKind, String> {
    value.parse().map_err(|error| format!("{error}"))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_accepted_before_and_after_the_command() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
        for argv in [
            ["credlens", "--today", "2024-06-01", "summary", "credentials"],
            ["credlens", "summary", "credentials", "--today", "2024-06-01"],
        ] {
            let cli = Cli::try_parse_from(argv).unwrap();
            assert_eq!(cli.today, expected);
            assert!(matches!(cli.command, Command::Summary(_)));
        }
    }

    #[test]
    fn list_collects_repeated_filters() {
        let cli = Cli::try_parse_from([
            "credlens", "list", "credential", "-f", "status=verified", "-f", "kind=all",
        ])
        .unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.view.entity, EntityKind::Credentials);
        assert_eq!(args.view.filters, vec!["status=verified", "kind=all"]);
        assert_eq!(args.page, 1);
    }
}
