//! Data model of the cluster usage report
//!
//! Mirrors the JSON emitted by `ceph df --format json`. Field aliases
//! accept both the short names and the `total_*` names a live cluster
//! reports, so fixture data and real reports decode identically.
//!
//! A snapshot is produced fresh per invocation and never mutated or
//! persisted.

use serde::Deserialize;

/// One complete usage report: cluster-wide stats plus per-pool stats
#[derive(Debug, Clone, Deserialize)]
pub struct UsageSnapshot {
    /// Aggregate numbers for the whole cluster
    pub stats: ClusterUsage,
    /// Per-pool usage, one entry per pool; duplicates possible in
    /// source data
    #[serde(default)]
    pub pools: Vec<PoolUsage>,
}

/// Aggregate capacity numbers for the whole cluster
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterUsage {
    /// Fraction of raw capacity consumed, 0.0 to 1.0
    #[serde(alias = "total_used_raw_ratio")]
    pub used_raw_ratio: f64,
    /// Raw bytes consumed across all redundancy overhead
    #[serde(alias = "total_used_raw_bytes")]
    pub used_raw_bytes: u64,
    /// Bytes of stored data
    #[serde(alias = "total_used_bytes")]
    pub used_bytes: u64,
    /// Total raw capacity in bytes
    pub total_bytes: u64,
    /// Raw bytes still available
    #[serde(alias = "total_avail_bytes")]
    pub avail_bytes: u64,
}

/// Usage stats for one named pool
#[derive(Debug, Clone, Deserialize)]
pub struct PoolUsage {
    pub name: String,
    pub stats: PoolStats,
}

/// The per-pool stats block; only `percent_used` drives evaluation,
/// the rest is display data
#[derive(Debug, Clone, Deserialize)]
pub struct PoolStats {
    /// Pool usage on a 0 to 100 scale
    pub percent_used: f64,
    #[serde(default)]
    pub stored: Option<u64>,
    #[serde(default)]
    pub max_avail: Option<u64>,
    #[serde(default)]
    pub objects: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_short_field_names() {
        let report = r#"{
            "stats": {
                "used_raw_ratio": 0.451234,
                "used_raw_bytes": 48378511622144,
                "used_bytes": 16126170540714,
                "total_bytes": 107222934425600,
                "avail_bytes": 58844422803456
            },
            "pools": [
                {"name": "rbd", "stats": {"percent_used": 62.5}}
            ]
        }"#;
        let snapshot: UsageSnapshot = serde_json::from_str(report).unwrap();
        assert_eq!(snapshot.stats.used_raw_ratio, 0.451234);
        assert_eq!(snapshot.stats.total_bytes, 107222934425600);
        assert_eq!(snapshot.pools.len(), 1);
        assert_eq!(snapshot.pools[0].name, "rbd");
        assert_eq!(snapshot.pools[0].stats.percent_used, 62.5);
    }

    #[test]
    fn test_decode_live_report_field_names() {
        let report = r#"{
            "stats": {
                "total_bytes": 107222934425600,
                "total_avail_bytes": 58844422803456,
                "total_used_bytes": 16126170540714,
                "total_used_raw_bytes": 48378511622144,
                "total_used_raw_ratio": 0.451234
            },
            "pools": [
                {
                    "name": "rbd",
                    "stats": {
                        "stored": 5368709120,
                        "objects": 1280,
                        "percent_used": 62.5,
                        "max_avail": 3221225472
                    }
                }
            ]
        }"#;
        let snapshot: UsageSnapshot = serde_json::from_str(report).unwrap();
        assert_eq!(snapshot.stats.used_raw_ratio, 0.451234);
        assert_eq!(snapshot.stats.avail_bytes, 58844422803456);
        assert_eq!(snapshot.pools[0].stats.stored, Some(5368709120));
        assert_eq!(snapshot.pools[0].stats.objects, Some(1280));
    }

    #[test]
    fn test_missing_pools_defaults_to_empty() {
        let report = r#"{
            "stats": {
                "used_raw_ratio": 0.1,
                "used_raw_bytes": 100,
                "used_bytes": 50,
                "total_bytes": 1000,
                "avail_bytes": 900
            }
        }"#;
        let snapshot: UsageSnapshot = serde_json::from_str(report).unwrap();
        assert!(snapshot.pools.is_empty());
    }

    #[test]
    fn test_malformed_numeric_field_is_an_error() {
        let report = r#"{
            "stats": {
                "used_raw_ratio": "not-a-number",
                "used_raw_bytes": 100,
                "used_bytes": 50,
                "total_bytes": 1000,
                "avail_bytes": 900
            }
        }"#;
        assert!(serde_json::from_str::<UsageSnapshot>(report).is_err());
    }
}
