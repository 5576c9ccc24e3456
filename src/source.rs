//! Usage data retrieval
//!
//! The evaluator only consumes an already-parsed [`UsageSnapshot`]; this
//! module owns how one is obtained. [`UsageSource`] is the seam, and
//! [`CephDfCommand`] is the production implementation: run the cluster
//! query executable, capture its report, classify anything that is not a
//! clean report as a retrieval failure.

use crate::error::{Error, Result};
use crate::snapshot::UsageSnapshot;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Marker the cluster CLI puts on its stderr failure lines; everything
/// after the last occurrence is the human-readable part
const ERROR_MARKER: &str = "-1 ";

const DEFAULT_EXECUTABLE: &str = "/usr/bin/ceph";

// =============================================================================
// Source seam
// =============================================================================

/// Port for usage retrieval, so evaluation stays independently testable
pub trait UsageSource {
    fn fetch_usage(&self) -> Result<UsageSnapshot>;
}

// =============================================================================
// Query configuration
// =============================================================================

/// Connection settings for the cluster query executable.
///
/// The executable path is a default with explicit override, resolved once
/// at startup.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Path to the query executable
    pub executable: PathBuf,
    /// Cluster configuration file
    pub conf: Option<PathBuf>,
    /// Monitor address to connect to
    pub mon_address: Option<String>,
    /// Client id used for authentication
    pub client_id: Option<String>,
    /// Client name used for authentication
    pub client_name: Option<String>,
    /// Keyring file used for authentication
    pub keyring: Option<PathBuf>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            conf: None,
            mon_address: None,
            client_id: None,
            client_name: None,
            keyring: None,
        }
    }
}

impl QueryConfig {
    /// Check the prerequisite files before anything is executed.
    ///
    /// A missing executable, configuration file, or keyring is a
    /// configuration failure; the cluster is never queried.
    pub fn validate(&self) -> Result<()> {
        if !self.executable.is_file() {
            return Err(Error::Configuration(format!(
                "cluster query executable '{}' not found",
                self.executable.display()
            )));
        }
        if let Some(conf) = &self.conf {
            if !conf.is_file() {
                return Err(Error::Configuration(format!(
                    "cluster configuration file '{}' not found",
                    conf.display()
                )));
            }
        }
        if let Some(keyring) = &self.keyring {
            if !keyring.is_file() {
                return Err(Error::Configuration(format!(
                    "keyring file '{}' not found",
                    keyring.display()
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Command-backed source
// =============================================================================

/// Retrieves usage by running `<executable> [connection options] df
/// --format json`
pub struct CephDfCommand {
    config: QueryConfig,
}

impl CephDfCommand {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Argument list handed to the executable: connection options first,
    /// the `df` subcommand and output format last
    fn command_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(mon) = &self.config.mon_address {
            args.push("-m".into());
            args.push(mon.into());
        }
        if let Some(conf) = &self.config.conf {
            args.push("-c".into());
            args.push(conf.into());
        }
        if let Some(id) = &self.config.client_id {
            args.push("--id".into());
            args.push(id.into());
        }
        if let Some(name) = &self.config.client_name {
            args.push("--name".into());
            args.push(name.into());
        }
        if let Some(keyring) = &self.config.keyring {
            args.push("--keyring".into());
            args.push(keyring.into());
        }
        args.push("df".into());
        args.push("--format".into());
        args.push("json".into());
        args
    }
}

impl UsageSource for CephDfCommand {
    fn fetch_usage(&self) -> Result<UsageSnapshot> {
        let args = self.command_args();
        debug!(executable = %self.config.executable.display(), ?args, "querying cluster usage");

        let output = Command::new(&self.config.executable)
            .args(&args)
            .output()
            .map_err(|e| {
                Error::Retrieval(format!(
                    "failed to run '{}': {}",
                    self.config.executable.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Error text, or a report with no content, means the query failed
        // regardless of the exit status
        if !stderr.trim().is_empty() || stdout.trim().is_empty() {
            return Err(Error::Retrieval(extract_error_line(
                &stderr,
                &self.config.executable,
            )));
        }

        let snapshot: UsageSnapshot = serde_json::from_str(&stdout)?;
        debug!(pools = snapshot.pools.len(), "parsed cluster usage report");
        Ok(snapshot)
    }
}

/// Reduce the executable's stderr to one human-readable line.
///
/// Only the first line is consulted. When it carries the CLI's error
/// marker the fragment after the last marker is kept and prefixed with
/// the executable path; otherwise the line passes through verbatim.
fn extract_error_line(stderr: &str, executable: &Path) -> String {
    let first_line = stderr.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        return format!("'{}' produced no usage data", executable.display());
    }
    match first_line.rfind(ERROR_MARKER) {
        Some(idx) => format!(
            "{}: {}",
            executable.display(),
            &first_line[idx + ERROR_MARKER.len()..]
        ),
        None => first_line.to_string(),
    }
}
