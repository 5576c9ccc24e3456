//! Error types for the capacity probe
//!
//! Every failure class terminates at an UNKNOWN verdict (exit status 3);
//! the probe never retries, the monitoring supervisor owns that policy.

use crate::verdict::Severity;
use thiserror::Error;

/// Unified error type for the probe
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid thresholds, missing prerequisite files.
    /// Raised before the cluster is ever queried.
    #[error("{0}")]
    Configuration(String),

    /// The cluster query executable failed, wrote error text, or
    /// produced no usage data
    #[error("{0}")]
    Retrieval(String),

    /// The usage report could not be decoded
    #[error("malformed cluster usage report: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Severity a failure maps to on the wire
    pub fn severity(&self) -> Severity {
        Severity::Unknown
    }

    /// True for failures raised before any usage data was consulted
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Result type alias for the probe
pub type Result<T> = std::result::Result<T, Error>;
