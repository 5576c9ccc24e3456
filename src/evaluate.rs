//! Usage Evaluator
//!
//! Pure decision procedures mapping (usage data, thresholds, optional
//! pool selector) to a [`Verdict`]. No IO, no shared state; callers
//! validate thresholds first and retrieve data however they like.

use crate::error::{Error, Result};
use crate::snapshot::{ClusterUsage, PoolUsage};
use crate::verdict::Verdict;
use tracing::warn;

// =============================================================================
// Thresholds
// =============================================================================

/// Validated warning/critical threshold pair, percent scale.
///
/// Construction is the precondition gate: both values must be present and
/// `warn` must not exceed `critical`. Equal thresholds are accepted; the
/// warning band then collapses and values strictly above the shared
/// threshold go critical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn: f64,
    pub critical: f64,
}

impl Thresholds {
    pub fn new(warn: Option<f64>, critical: Option<f64>) -> Result<Self> {
        let warn = warn
            .ok_or_else(|| Error::Configuration("warning threshold is required".into()))?;
        let critical = critical
            .ok_or_else(|| Error::Configuration("critical threshold is required".into()))?;
        if warn > critical {
            return Err(Error::Configuration(format!(
                "warning threshold {} exceeds critical threshold {}",
                warn, critical
            )));
        }
        Ok(Self { warn, critical })
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluate cluster-wide raw usage against the thresholds.
///
/// The raw ratio is scaled to a percentage and rounded to 2 decimal
/// places before comparison. Ordering is strict: critical first, then
/// warning, both exclusive, so a value sitting exactly on a threshold
/// stays in the lower band.
pub fn evaluate_cluster(usage: &ClusterUsage, thresholds: &Thresholds) -> Verdict {
    let raw_percentage = round_to(usage.used_raw_ratio * 100.0, 2);

    if raw_percentage > thresholds.critical {
        Verdict::critical(format!(
            "RAW usage {}% is above {}%",
            raw_percentage, thresholds.critical
        ))
    } else if raw_percentage > thresholds.warn {
        Verdict::warning(format!(
            "RAW usage {}% is above {}%",
            raw_percentage, thresholds.warn
        ))
    } else {
        Verdict::ok(format!("RAW usage {}%", raw_percentage))
    }
}

/// Evaluate a single pool's usage against the thresholds.
///
/// Selection policy: the first entry whose name equals `pool_name` wins,
/// even when later entries duplicate it (a diagnostic is logged in that
/// case, the selection is unaffected). Returns `None` when no entry
/// matches; the caller decides how to report that.
pub fn evaluate_pool(
    pool_name: &str,
    pools: &[PoolUsage],
    thresholds: &Thresholds,
) -> Option<Verdict> {
    let (index, pool) = pools
        .iter()
        .enumerate()
        .find(|(_, pool)| pool.name == pool_name)?;

    if pools[index + 1..].iter().any(|later| later.name == pool_name) {
        warn!(pool = pool_name, "duplicate pool name in usage report, using first entry");
    }

    let percent_used = round_to(pool.stats.percent_used, 4);

    let verdict = if percent_used > thresholds.critical {
        Verdict::critical(format!(
            "pool '{}' usage {}% is above {}%",
            pool_name, percent_used, thresholds.critical
        ))
    } else if percent_used > thresholds.warn {
        Verdict::warning(format!(
            "pool '{}' usage {}% is above {}%",
            pool_name, percent_used, thresholds.warn
        ))
    } else {
        Verdict::ok(format!("pool '{}' usage {}%", pool_name, percent_used))
    };
    Some(verdict)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
