//! Capacity probe for Ceph storage clusters
//!
//! A single-shot, Nagios-compatible check: query the cluster's capacity
//! usage, compare it against operator-supplied thresholds, print exactly
//! one line, exit with the matching status code.
//!
//! | Verdict  | Exit status |
//! |----------|-------------|
//! | OK       | 0           |
//! | WARNING  | 1           |
//! | CRITICAL | 2           |
//! | UNKNOWN  | 3           |
//!
//! The evaluation core ([`evaluate`]) is pure: it consumes an
//! already-parsed [`snapshot::UsageSnapshot`] plus validated
//! [`evaluate::Thresholds`] and yields a [`verdict::Verdict`]. Retrieval
//! lives behind the [`source::UsageSource`] seam so the decision logic
//! stays independently testable.
//!
//! # Modules
//!
//! - [`error`]: failure taxonomy, everything terminating at UNKNOWN
//! - [`evaluate`]: threshold validation and the usage evaluator
//! - [`snapshot`]: data model of the cluster usage report
//! - [`source`]: query-executable invocation and failure classification
//! - [`verdict`]: severity, message, and exit-status mapping

pub mod error;
pub mod evaluate;
pub mod snapshot;
pub mod source;
pub mod verdict;

// Re-export commonly used types
pub use error::{Error, Result};
pub use evaluate::{evaluate_cluster, evaluate_pool, Thresholds};
pub use snapshot::{ClusterUsage, PoolStats, PoolUsage, UsageSnapshot};
pub use source::{CephDfCommand, QueryConfig, UsageSource};
pub use verdict::{Severity, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
