//! invdash - Entry Point

use chrono::Utc;
use clap::Parser;
use invdash::model::InvoiceStatus;
use invdash::presence::SimulatedPresence;
use invdash::query::{SortDirection, SortKey, SortSpec};
use invdash::render;
use invdash::source::detect_source;
use invdash::state::AppState;
use std::path::PathBuf;
use tracing::info;

/// Invoice dashboard - filter, sort, and paginate an invoice collection
#[derive(Parser, Debug)]
#[command(name = "invdash")]
#[command(version)]
#[command(about = "Invoice listing engine with filtering, sorting, and pagination")]
pub struct Args {
    /// Path to a JSON file of invoice records (generates mock data if not provided)
    pub file: Option<PathBuf>,

    /// Free-text search over customer name, id, and amount
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by exact status (draft|pending|sent|paid|overdue|cancelled|disputed)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<InvoiceStatus>,

    /// Minimum days overdue (0 disables)
    #[arg(long, default_value = "0")]
    pub min_days_overdue: u32,

    /// Sort field (id, customer.name, amount, due_date, status, last_updated)
    #[arg(long, default_value = "due_date", value_parser = parse_sort_key)]
    pub sort: SortKey,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Number of mock records to generate when no file is given
    #[arg(long, default_value = "100")]
    pub mock_count: usize,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to log file (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_status(raw: &str) -> Result<InvoiceStatus, String> {
    InvoiceStatus::parse(raw).map_err(|e| e.to_string())
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::parse(raw).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = invdash::config::load_config_with_precedence(args.config.clone())?;
        let merged = invdash::config::merge_config(config_file);
        let with_env = invdash::config::apply_env_overrides(merged);
        invdash::config::apply_cli_overrides(with_env, args.page_size, args.log_file.clone())
    };

    invdash::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let now = Utc::now();
    let source = detect_source(args.file.clone(), config.presence_seed, args.mock_count)?;

    let mut state = AppState::new().with_presence_ttl(config.presence_ttl_secs);

    // One-shot fetch; the guard still applies so a scripted shell could
    // overlap fetches safely.
    let ticket = state.begin_fetch();
    state.apply_fetch(ticket, source.fetch(now));
    if let Some(message) = state.error_message() {
        eprintln!("Error: {message} (check the path and retry)");
        std::process::exit(1);
    }

    if let Some(term) = &args.search {
        state.query.set_search(term.clone());
    }
    state.query.set_status_filter(args.status);
    state.query.set_min_days_overdue(args.min_days_overdue);
    state.query.set_sort(SortSpec {
        key: args.sort,
        direction: if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    });
    state.query.set_page_size(config.page_size);
    // Page last: the setters above reset it to 1.
    state.query.set_page(args.page as usize);

    // One simulation tick so the page shows collaborator annotations.
    let ids = state.records().iter().map(|inv| inv.id.clone()).collect();
    let mut presence = SimulatedPresence::new(ids, config.presence_interval_secs, config.presence_seed);
    state.poll_presence(&mut presence, now);

    let summary = state.summary(now);
    let page = state.listing(now);

    print!("{}", render::render_summary(&summary));
    println!();
    print!(
        "{}",
        render::render_listing(&page, state.selection(), state.presence(), now)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["invdash", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["invdash"]);
        assert_eq!(args.file, None);
        assert_eq!(args.search, None);
        assert_eq!(args.status, None);
        assert_eq!(args.min_days_overdue, 0);
        assert_eq!(args.sort, SortKey::DueDate);
        assert!(!args.desc);
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, None);
        assert_eq!(args.mock_count, 100);
    }

    #[test]
    fn status_flag_parses_known_status() {
        let args = Args::parse_from(["invdash", "--status", "overdue"]);
        assert_eq!(args.status, Some(InvoiceStatus::Overdue));
    }

    #[test]
    fn status_flag_rejects_unknown_status() {
        let result = Args::try_parse_from(["invdash", "--status", "archived"]);
        assert!(result.is_err());
    }

    #[test]
    fn sort_flag_accepts_dotted_field() {
        let args = Args::parse_from(["invdash", "--sort", "customer.name", "--desc"]);
        assert_eq!(args.sort, SortKey::CustomerName);
        assert!(args.desc);
    }

    #[test]
    fn page_zero_is_rejected() {
        let result = Args::try_parse_from(["invdash", "--page", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn file_path_populates_file_field() {
        let args = Args::parse_from(["invdash", "invoices.json"]);
        assert_eq!(args.file, Some(PathBuf::from("invoices.json")));
    }
}
