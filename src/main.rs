//! check-ceph-df - capacity probe for Ceph storage clusters
//!
//! Thin binary over the library: parse arguments, set up stderr
//! diagnostics, run one check, print one line, exit with the verdict's
//! status code. stdout carries nothing but the verdict line; the
//! monitoring supervisor parses that and the exit status.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use check_ceph_df::{
    evaluate_cluster, evaluate_pool, CephDfCommand, ClusterUsage, QueryConfig, Result, Severity,
    Thresholds, UsageSource, Verdict,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Check Ceph cluster capacity and report a Nagios-style verdict
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the cluster query executable
    #[arg(short = 'e', long, default_value = "/usr/bin/ceph")]
    exe: PathBuf,

    /// Cluster configuration file
    #[arg(short = 'c', long)]
    conf: Option<PathBuf>,

    /// Monitor address to connect to
    #[arg(short = 'm', long)]
    monaddress: Option<String>,

    /// Client id for authentication
    #[arg(short = 'i', long)]
    id: Option<String>,

    /// Client name for authentication
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Keyring file for authentication
    #[arg(short = 'k', long)]
    keyring: Option<PathBuf>,

    /// Evaluate this pool instead of cluster-wide usage
    #[arg(short = 'p', long)]
    pool: Option<String>,

    /// Warning threshold, percent of used capacity
    #[arg(short = 'W', long)]
    warning: Option<f64>,

    /// Critical threshold, percent of used capacity; must not be below
    /// the warning threshold
    #[arg(short = 'C', long)]
    critical: Option<f64>,

    /// Append a capacity breakdown to warning and critical results
    #[arg(short = 'd', long)]
    detail: bool,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let verdict = check(&args).unwrap_or_else(|e| Verdict {
        severity: e.severity(),
        message: e.to_string(),
    });

    println!("{}", verdict);
    process::exit(verdict.severity.exit_code());
}

/// One probe run: validate, retrieve, evaluate
fn check(args: &Args) -> Result<Verdict> {
    // Thresholds gate everything; usage data is not consulted until
    // they hold
    let thresholds = Thresholds::new(args.warning, args.critical)?;

    let config = QueryConfig {
        executable: args.exe.clone(),
        conf: args.conf.clone(),
        mon_address: args.monaddress.clone(),
        client_id: args.id.clone(),
        client_name: args.name.clone(),
        keyring: args.keyring.clone(),
    };
    config.validate()?;

    let snapshot = CephDfCommand::new(config).fetch_usage()?;

    let mut verdict = match &args.pool {
        Some(pool) => evaluate_pool(pool, &snapshot.pools, &thresholds).unwrap_or_else(|| {
            Verdict::unknown(format!("pool '{}' not found in cluster usage report", pool))
        }),
        None => evaluate_cluster(&snapshot.stats, &thresholds),
    };

    if args.detail && matches!(verdict.severity, Severity::Warning | Severity::Critical) {
        verdict.message.push_str(&capacity_breakdown(&snapshot.stats));
    }

    Ok(verdict)
}

// =============================================================================
// Presentation
// =============================================================================

/// Same-line GiB breakdown appended to non-OK verdicts on request
fn capacity_breakdown(stats: &ClusterUsage) -> String {
    format!(
        " ({:.1} GiB raw used, {:.1} GiB data of {:.1} GiB total, {:.1} GiB avail)",
        gib(stats.used_raw_bytes),
        gib(stats.used_bytes),
        gib(stats.total_bytes),
        gib(stats.avail_bytes)
    )
}

fn gib(bytes: u64) -> f64 {
    bytes as f64 / (1u64 << 30) as f64
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout belongs to the supervisor; diagnostics go to stderr only
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
