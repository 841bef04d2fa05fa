use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use arxiv_digest_core::{
    FetchConfig, PipelineConfig, ReportFormat, ReportOutcome, ReportRequest, SearchConfig, TableConfig, fetch_file,
    fetch_stdin, fetch_url, format_iso_date, run_report,
};
use clap::Parser;
use owo_colors::OwoColorize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{format_size, print_banner, print_detail, print_error, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const CLI_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const TOTAL_STEPS: usize = 3;

/// Search arXiv over a date range and save the results as a report
#[derive(Parser, Debug)]
#[command(name = "arxiv-digest")]
#[command(version)]
#[command(about = "Search arXiv over a date range and save the results as a report", long_about = None)]
struct Args {
    /// Search query, e.g. "quantum computing"
    #[arg(short, long, default_value = "Artificial Intelligence", value_name = "TEXT")]
    query: String,

    /// First submission date to include (default: the day before --to-date)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_cli_date)]
    from_date: Option<Date>,

    /// Last submission date to include (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_cli_date)]
    to_date: Option<Date>,

    /// Existing directory to save the report in (default: current directory)
    #[arg(short = 'd', long, value_name = "DIR")]
    target_dir: Option<PathBuf>,

    /// Read a saved results page from FILE, or "-" for stdin, instead of fetching
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Report format (markdown, json)
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    format: ReportFormat,

    /// Results per page (25, 50, 100 or 200)
    #[arg(long, default_value = "200", value_name = "NUM")]
    page_size: u32,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Escape "|" inside table cells (Markdown only)
    #[arg(long)]
    escape_pipes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_cli_date(s: &str) -> Result<Date, String> {
    Date::parse(s, CLI_DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "arxiv_digest=debug,arxiv_digest_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_request(args: &Args) -> anyhow::Result<ReportRequest> {
    let today = OffsetDateTime::now_utc().date();
    let to = args.to_date.unwrap_or(today);
    let from = args.from_date.unwrap_or_else(|| to.previous_day().unwrap_or(to));

    ReportRequest::new(args.query.as_str(), from, to).context("Invalid search request")
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let request = build_request(&args)?;

    let config = PipelineConfig {
        search: SearchConfig::builder().page_size(args.page_size).build(),
        output_dir: args.target_dir.clone(),
        format: args.format,
        table: TableConfig { escape_pipes: args.escape_pipes },
    };
    tracing::debug!(?config, "pipeline configured");

    print_step(
        1,
        TOTAL_STEPS,
        &format!(
            "Searching arXiv for '{}' from {} to {}",
            request.query().bright_white(),
            format_iso_date(request.from()),
            format_iso_date(request.to())
        ),
    );

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let verbose = args.verbose;
    let outcome = run_report(&request, &config, |url| {
        let html = match &args.input {
            Some(path) if path == "-" => {
                print_step(2, TOTAL_STEPS, "Reading results page from stdin");
                fetch_stdin()?
            }
            Some(path) => {
                print_step(2, TOTAL_STEPS, &format!("Reading results page from {}", path.bright_white()));
                fetch_file(path)?
            }
            None => {
                print_step(2, TOTAL_STEPS, "Fetching results page");
                if verbose {
                    print_detail("URL", url.as_str());
                }
                runtime.block_on(fetch_url(url.as_str(), &fetch_config))?
            }
        };

        if verbose {
            print_detail("Size", &format_size(html.len()));
        }
        print_step(3, TOTAL_STEPS, "Extracting records");
        Ok(html)
    })
    .context("Failed to build report")?;

    match outcome {
        ReportOutcome::Written { path, records } => {
            if records as u32 >= config.search.page_size {
                print_warning(&format!(
                    "Page is full ({} records); narrow the date range to see every result",
                    records
                ));
            }
            print_success(&format!(
                "Saved {} records to {}",
                records,
                path.display().bright_white()
            ));
        }
        ReportOutcome::NoRecords => print_info("No records found; nothing saved"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
