mod attributes;
mod block;
mod error;
mod invariants;
mod models;
mod report;
mod severity;
mod tail;

use std::path::PathBuf;

use clap::Parser;
use error::CheckError;
use report::Report;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Checkmk local check for Splunk forwarder health.
///
/// Always prints exactly one line and exits 0; the leading status code
/// carries the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "/opt/splunkforwarder/var/log/splunk/health.log")]
    log_file: PathBuf,

    /// How many trailing lines of the log are inspected.
    #[arg(long, default_value_t = 200)]
    lines: usize,

    #[arg(long, default_value = "tail")]
    tail_bin: String,

    #[arg(long, default_value = "Splunk Health")]
    service_name: String,

    /// Diagnostics filter for stderr, overridden by RUST_LOG.
    #[arg(long, default_value = "error")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let report = check(&args).unwrap_or_else(|e| {
        warn!(error = %e, log_file = %args.log_file.display(), "health check failed");
        Report::unknown(&e)
    });
    println!("{}", report.render(&args.service_name));
}

fn check(args: &Args) -> Result<Report, CheckError> {
    let lines = tail::tail_lines(&args.tail_bin, args.lines, &args.log_file)?;
    let block = block::select_latest_block(lines, args.lines)?;
    let entries = attributes::parse_block(&block.lines)?;
    Ok(Report::from_entries(&entries, &block.timestamp))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
