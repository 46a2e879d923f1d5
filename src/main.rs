use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use sales_reporting_engine::models::ValidationReport;
use sales_reporting_engine::validator::SchemaValidator;

const DEFAULT_DATASET: &str = "data/coffee_sales.csv";

fn main() -> Result<()> {
    //NOTE: With just an optional path and a log level, the clap crate would be
    //      overkill here. A richer CLI surface would justify it.
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: sales-reporting-engine [dataset.csv] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("The dataset path defaults to {DEFAULT_DATASET}");
        exit(0);
    }

    let path = args.get(1)
        .map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let report = SchemaValidator::validate_file(&path)?;
    let duration = timer.elapsed();

    info!("Validated {} in: {duration:?}", path.display());

    write_report_to_stdout(&report)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout so it can be redirected; logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(report: &ValidationReport) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    write!(output, "{report}")?;
    output.flush()?;

    Ok(())
}
